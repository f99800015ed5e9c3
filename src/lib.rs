//! Point-to-point shortest-path routing over polyline networks.
//!
//! Converts a set of line features (rail, road, or trail segments) into an
//! undirected weighted graph, merging near-duplicate endpoints under a
//! caller-supplied tolerance, and answers shortest-path queries between
//! arbitrary geographic points with Dijkstra's algorithm. Query points are
//! snapped to the nearest graph node; edge weights are great-circle
//! distances in kilometers.
//!
//! ```
//! use geo::{line_string, point};
//! use railpath::find_shortest_path;
//!
//! let lines = vec![
//!     line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0)],
//!     line_string![(x: 0.0, y: 1.0), (x: 1.0, y: 1.0)],
//! ];
//! let route = find_shortest_path(
//!     &lines,
//!     point!(x: 0.0, y: 0.0),
//!     point!(x: 1.0, y: 1.0),
//!     0.0,
//! )
//! .expect("the lines form a connected chain");
//! assert_eq!(route.path_keys.len(), 3);
//! ```

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{MergeContext, build_graph_from_lines, lines_from_geojson};
pub use model::{EdgeTarget, NodeKey, RouteGraph};
pub use routing::{RouteResult, ShortestPath, find_shortest_path, shortest_path};
