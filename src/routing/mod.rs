//! Shortest-path search and query orchestration

mod dijkstra;

pub use dijkstra::{ShortestPath, shortest_path};

use geo::{Coord, LineString, Point};
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use log::warn;
use serde_json::json;

use crate::Error;
use crate::loading::build_graph_from_lines;
use crate::model::{NodeKey, RouteGraph};

/// Result of a successful point-to-point routing query.
#[derive(Debug, Clone)]
pub struct RouteResult {
    /// Ordered route coordinates, start to end.
    pub path: Vec<Point<f64>>,
    /// Node keys matching `path` one-to-one.
    pub path_keys: Vec<NodeKey>,
    /// Graph node the start point snapped to.
    pub start_key: NodeKey,
    /// Graph node the end point snapped to.
    pub end_key: NodeKey,
    /// Total route length in kilometers.
    pub total_km: f64,
    /// The constructed graph, for callers issuing further queries.
    pub graph: RouteGraph,
}

impl RouteResult {
    /// Converts the route to a `GeoJSON` `Feature` with a `LineString`
    /// geometry.
    pub fn to_feature(&self) -> Result<Feature, Error> {
        let line: LineString<f64> = self.path.iter().map(|point| Coord::from(*point)).collect();
        let geometry = Geometry::new(GeoJsonValue::from(&line));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "start_key": self.start_key.as_str(),
                "end_key": self.end_key.as_str(),
                "node_count": self.path_keys.len(),
                "total_km": self.total_km,
            }
        });

        Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_feature()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

/// Builds a graph from `lines` and routes between the graph nodes nearest
/// to `start` and `end`.
///
/// Coordinates closer together than `tolerance_meters` are merged into one
/// node during the build; zero disables merging. Endpoints snap to graph
/// nodes only, never onto positions along a segment.
///
/// Returns `None` when either endpoint cannot be resolved (only possible
/// for an empty graph) or when no path connects the resolved nodes. Both
/// conditions are logged as warnings; neither is a hard error.
pub fn find_shortest_path(
    lines: &[LineString<f64>],
    start: Point<f64>,
    end: Point<f64>,
    tolerance_meters: f64,
) -> Option<RouteResult> {
    let graph = build_graph_from_lines(lines, tolerance_meters);

    let Some((start_key, _)) = graph.nearest_node(&start) else {
        warn!("could not resolve start point {start:?} to a graph node");
        return None;
    };
    let Some((end_key, _)) = graph.nearest_node(&end) else {
        warn!("could not resolve end point {end:?} to a graph node");
        return None;
    };

    let Some(found) = shortest_path(&graph, &start_key, &end_key) else {
        warn!("no path found between {start_key} and {end_key}");
        return None;
    };

    let mut path = Vec::with_capacity(found.keys.len());
    for key in &found.keys {
        match key.to_point() {
            Ok(point) => path.push(point),
            Err(err) => {
                warn!("malformed node key in path: {err}");
                return None;
            }
        }
    }

    Some(RouteResult {
        path,
        path_keys: found.keys,
        start_key,
        end_key,
        total_km: found.total_km,
        graph,
    })
}
