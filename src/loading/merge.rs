use geo::{Distance, Haversine, Point};
use hashbrown::HashMap;

use crate::model::NodeKey;

/// Node merge state scoped to a single graph build.
///
/// Maps raw input coordinates to canonical node keys, collapsing
/// coordinates that fall within `tolerance_meters` of an existing node's
/// representative into that node. A tolerance of zero disables merging
/// entirely and keys each distinct coordinate as itself.
#[derive(Debug, Default)]
pub struct MergeContext {
    tolerance_meters: f64,
    /// Raw coordinate key -> canonical node key.
    assignments: HashMap<NodeKey, NodeKey>,
    /// Canonical keys with their representatives, in creation order.
    /// The tolerance scan walks this in order, so merging is first-fit.
    representatives: Vec<(NodeKey, Point<f64>)>,
}

impl MergeContext {
    pub fn new(tolerance_meters: f64) -> Self {
        Self {
            tolerance_meters,
            ..Self::default()
        }
    }

    /// Number of distinct nodes created so far.
    pub fn node_count(&self) -> usize {
        self.representatives.len()
    }

    /// Resolves a raw coordinate to its canonical node key and
    /// representative coordinate.
    ///
    /// A coordinate seen before (exact match on the raw value) reuses its
    /// prior assignment. Otherwise the existing representatives are scanned
    /// in creation order and the first one within tolerance wins -- a
    /// first-fit policy, deliberately not nearest-fit. Only when no
    /// representative is close enough does the coordinate become a new node
    /// with itself as representative.
    pub fn resolve(&mut self, coord: Point<f64>) -> (NodeKey, Point<f64>) {
        let raw = NodeKey::from_point(coord);
        if let Some(key) = self.assignments.get(&raw) {
            // to_point on a key we created cannot fail; fall back to the
            // raw coordinate rather than unwrapping.
            let representative = key.to_point().unwrap_or(coord);
            return (key.clone(), representative);
        }

        if self.tolerance_meters > 0.0 {
            let tolerance_km = self.tolerance_meters / 1000.0;
            for (key, representative) in &self.representatives {
                if Haversine.distance(coord, *representative) / 1000.0 <= tolerance_km {
                    let found = (key.clone(), *representative);
                    self.assignments.insert(raw, found.0.clone());
                    return found;
                }
            }
        }

        self.assignments.insert(raw.clone(), raw.clone());
        self.representatives.push((raw.clone(), coord));
        (raw, coord)
    }
}
