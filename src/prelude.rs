// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{MergeContext, build_graph_from_lines, lines_from_geojson};
pub use crate::model::{EdgeTarget, NodeKey, RouteGraph};
pub use crate::routing::{RouteResult, ShortestPath, find_shortest_path, shortest_path};
