//! Graph construction from polyline input

mod builder;
mod geojson;
mod merge;

pub use self::builder::build_graph_from_lines;
pub use self::geojson::lines_from_geojson;
pub use self::merge::MergeContext;
