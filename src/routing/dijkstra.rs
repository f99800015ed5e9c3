use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;

use crate::model::{NodeKey, RouteGraph};

#[derive(Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeKey,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap). Costs are
// finite and non-negative, so total_cmp is a valid total order here.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A shortest path between two graph nodes.
#[derive(Debug, Clone)]
pub struct ShortestPath {
    /// Ordered node keys from start to end inclusive.
    pub keys: Vec<NodeKey>,
    /// Total path weight in kilometers.
    pub total_km: f64,
}

/// Dijkstra's algorithm between two nodes of the graph.
///
/// The search finalizes nodes in non-decreasing distance order, so it
/// terminates as soon as the destination is popped from the frontier.
/// Returns `None` when no path connects the two nodes or when either key
/// is absent from the graph.
pub fn shortest_path(graph: &RouteGraph, start: &NodeKey, end: &NodeKey) -> Option<ShortestPath> {
    let mut distances: HashMap<NodeKey, f64> = HashMap::with_capacity(graph.node_count());
    let mut predecessors: HashMap<NodeKey, NodeKey> = HashMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(start.clone(), 0.0);
    heap.push(State {
        cost: 0.0,
        node: start.clone(),
    });

    let mut total_km = None;
    while let Some(State { cost, node }) = heap.pop() {
        if node == *end {
            total_km = Some(cost);
            break;
        }

        // Skip stale heap entries superseded by a better path.
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.neighbors(&node) {
            let next_cost = cost + edge.weight;
            match distances.entry(edge.node.clone()) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(edge.node.clone(), node.clone());
                    heap.push(State {
                        cost: next_cost,
                        node: edge.node.clone(),
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(edge.node.clone(), node.clone());
                        heap.push(State {
                            cost: next_cost,
                            node: edge.node.clone(),
                        });
                    }
                }
            }
        }
    }

    // Frontier exhausted without popping the destination.
    let total_km = total_km?;

    // Walk predecessor links backward from the destination. The walk must
    // terminate at the start key; a missing link means the destination was
    // never connected, which is treated as no path rather than a partial
    // sequence.
    let mut keys = vec![end.clone()];
    let mut current = end.clone();
    while current != *start {
        let prev = predecessors.get(&current)?.clone();
        keys.push(prev.clone());
        current = prev;
    }
    keys.reverse();

    Some(ShortestPath { keys, total_km })
}
