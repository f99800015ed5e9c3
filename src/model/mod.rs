//! Graph data model for routable line networks

pub mod graph;
pub mod node;

pub use graph::{EdgeTarget, RouteGraph};
pub use node::NodeKey;
