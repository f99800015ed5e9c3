use geo::{Distance, Haversine, Point};
use hashbrown::HashMap;

use crate::model::NodeKey;

/// One entry in a node's adjacency list.
#[derive(Debug, Clone)]
pub struct EdgeTarget {
    /// Key of the neighboring node.
    pub node: NodeKey,
    /// Representative coordinate of the neighboring node.
    pub coord: Point<f64>,
    /// Great-circle distance between the two representatives, kilometers.
    pub weight: f64,
}

/// Undirected weighted graph over merged line endpoints.
///
/// Adjacency is symmetric: an edge `(A, B, w)` is stored in both node's
/// lists with equal weight. Self-loops and duplicate edges per node pair
/// are rejected on insertion.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<NodeKey, Vec<EdgeTarget>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.adjacency.contains_key(key)
    }

    /// Adjacency list of `key`; empty for unknown nodes.
    pub fn neighbors(&self, key: &NodeKey) -> &[EdgeTarget] {
        self.adjacency.get(key).map_or(&[], Vec::as_slice)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeKey> {
        self.adjacency.keys()
    }

    /// Inserts an undirected edge between two nodes.
    ///
    /// Self-loops are skipped, and a second edge between the same pair of
    /// nodes is a no-op in that direction.
    pub fn add_edge(
        &mut self,
        a: NodeKey,
        a_coord: Point<f64>,
        b: NodeKey,
        b_coord: Point<f64>,
        weight: f64,
    ) {
        if a == b {
            return;
        }
        self.push_half_edge(a.clone(), b.clone(), b_coord, weight);
        self.push_half_edge(b, a, a_coord, weight);
    }

    fn push_half_edge(&mut self, from: NodeKey, to: NodeKey, to_coord: Point<f64>, weight: f64) {
        let edges = self.adjacency.entry(from).or_default();
        if edges.iter().all(|edge| edge.node != to) {
            edges.push(EdgeTarget {
                node: to,
                coord: to_coord,
                weight,
            });
        }
    }

    /// Finds the node whose representative coordinate is closest to `point`
    /// by great-circle distance, along with that distance in kilometers.
    ///
    /// Linear scan over all nodes; ties keep the first minimum in iteration
    /// order. Returns `None` only for an empty graph.
    pub fn nearest_node(&self, point: &Point<f64>) -> Option<(NodeKey, f64)> {
        let mut best: Option<(NodeKey, f64)> = None;
        for key in self.adjacency.keys() {
            // Keys are always produced from representative coordinates.
            let Ok(node_point) = key.to_point() else {
                continue;
            };
            let distance = Haversine.distance(*point, node_point) / 1000.0;
            if best.as_ref().is_none_or(|(_, min)| distance < *min) {
                best = Some((key.clone(), distance));
            }
        }
        best
    }
}
