use geo::{Distance, Haversine, LineString};
use itertools::Itertools;
use log::debug;

use crate::loading::merge::MergeContext;
use crate::model::RouteGraph;

/// Builds an undirected weighted graph from polyline features.
///
/// Every consecutive coordinate pair of every line becomes an edge between
/// the two merged endpoint nodes. Segments whose endpoints collapse into
/// the same node under the tolerance are skipped, as are repeated
/// segments. Lines with fewer than two coordinates contribute nothing;
/// that is not an error.
///
/// Edge weights are great-circle distances in kilometers between the
/// *representative* coordinates of the resolved nodes, so after merging
/// the weight reflects the canonical node positions rather than the raw
/// segment endpoints.
pub fn build_graph_from_lines(lines: &[LineString<f64>], tolerance_meters: f64) -> RouteGraph {
    let mut graph = RouteGraph::new();
    let mut merge = MergeContext::new(tolerance_meters);

    for line in lines {
        for (a, b) in line.points().tuple_windows() {
            let (key_a, rep_a) = merge.resolve(a);
            let (key_b, rep_b) = merge.resolve(b);

            // Both endpoints collapsed into the same node.
            if key_a == key_b {
                continue;
            }

            let weight = Haversine.distance(rep_a, rep_b) / 1000.0;
            graph.add_edge(key_a, rep_a, key_b, rep_b, weight);
        }
    }

    debug!(
        "built graph with {} nodes and {} edges from {} lines",
        graph.node_count(),
        graph.edge_count(),
        lines.len()
    );
    graph
}

#[cfg(test)]
mod tests {
    use geo::{line_string, point};

    use super::build_graph_from_lines;
    use crate::model::NodeKey;

    #[test]
    fn two_lines_sharing_an_endpoint_form_a_chain() {
        let lines = vec![
            line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0)],
            line_string![(x: 0.0, y: 1.0), (x: 1.0, y: 1.0)],
        ];
        let graph = build_graph_from_lines(&lines, 0.0);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        let shared = NodeKey::from_point(point!(x: 0.0, y: 1.0));
        assert_eq!(graph.neighbors(&shared).len(), 2);
    }

    #[test]
    fn short_and_empty_lines_are_silent_no_ops() {
        let lines = vec![
            line_string![],
            line_string![(x: 5.0, y: 5.0)],
        ];
        let graph = build_graph_from_lines(&lines, 0.0);
        assert!(graph.is_empty());
    }

    #[test]
    fn repeated_segment_does_not_duplicate_the_edge() {
        let lines = vec![
            line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0)],
            line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0)],
        ];
        let graph = build_graph_from_lines(&lines, 0.0);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn duplicate_consecutive_points_produce_no_self_loop() {
        let lines = vec![line_string![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 1.0),
        ]];
        let graph = build_graph_from_lines(&lines, 0.0);
        assert_eq!(graph.edge_count(), 1);
        for key in graph.nodes() {
            assert!(graph.neighbors(key).iter().all(|edge| edge.node != *key));
        }
    }

    #[test]
    fn tolerance_merges_nearly_touching_endpoints() {
        // The second line starts ~11 m from where the first ends; with a
        // 20 m tolerance the two endpoints become one node and the graph
        // is connected.
        let lines = vec![
            line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0)],
            line_string![(x: 0.0, y: 1.0001), (x: 1.0, y: 1.0)],
        ];

        let disconnected = build_graph_from_lines(&lines, 0.0);
        assert_eq!(disconnected.node_count(), 4);

        let merged = build_graph_from_lines(&lines, 20.0);
        assert_eq!(merged.node_count(), 3);

        // The joint keeps the first-seen representative, and edge weights
        // are measured from it.
        let joint = NodeKey::from_point(point!(x: 0.0, y: 1.0));
        assert!(merged.contains(&joint));
        assert!(!merged.contains(&NodeKey::from_point(point!(x: 0.0, y: 1.0001))));
    }
}
