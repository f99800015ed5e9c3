//! GeoJSON input handling

use geo::{Coord, LineString};
use geojson::{GeoJson, Geometry, Value};

use crate::Error;

/// Extracts routable line geometries from a GeoJSON document.
///
/// Accepts a `FeatureCollection`, a single `Feature`, or a bare geometry.
/// `LineString` geometries map to one line each, `MultiLineString` to one
/// per member, and geometry collections are walked recursively. Points,
/// polygons, and other geometry types carry no routable segments and are
/// skipped.
///
/// # Errors
///
/// Returns an error if the input is not valid GeoJSON.
pub fn lines_from_geojson(input: &str) -> Result<Vec<LineString<f64>>, Error> {
    let geojson = input.parse::<GeoJson>()?;
    let mut lines = Vec::new();
    match geojson {
        GeoJson::FeatureCollection(collection) => {
            for feature in collection.features {
                if let Some(geometry) = feature.geometry {
                    collect_lines(&geometry, &mut lines);
                }
            }
        }
        GeoJson::Feature(feature) => {
            if let Some(geometry) = feature.geometry {
                collect_lines(&geometry, &mut lines);
            }
        }
        GeoJson::Geometry(geometry) => collect_lines(&geometry, &mut lines),
    }
    Ok(lines)
}

fn collect_lines(geometry: &Geometry, lines: &mut Vec<LineString<f64>>) {
    match &geometry.value {
        Value::LineString(positions) => lines.push(line_from_positions(positions)),
        Value::MultiLineString(multi) => {
            lines.extend(multi.iter().map(|positions| line_from_positions(positions)));
        }
        Value::GeometryCollection(members) => {
            for member in members {
                collect_lines(member, lines);
            }
        }
        _ => {}
    }
}

fn line_from_positions(positions: &[Vec<f64>]) -> LineString<f64> {
    positions
        .iter()
        .filter(|position| position.len() >= 2)
        .map(|position| Coord {
            x: position[0],
            y: position[1],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::lines_from_geojson;

    #[test]
    fn collects_line_strings_and_multi_line_strings() {
        let input = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[0.0, 0.0], [0.0, 1.0]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "MultiLineString",
                        "coordinates": [
                            [[0.0, 1.0], [1.0, 1.0]],
                            [[1.0, 1.0], [2.0, 1.0]]
                        ]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Point",
                        "coordinates": [9.0, 9.0]
                    }
                }
            ]
        }"#;

        let lines = lines_from_geojson(input).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].0.len(), 2);
        assert_eq!(lines[2].0[1].x, 2.0);
    }

    #[test]
    fn altitude_is_dropped_from_positions() {
        let input = r#"{
            "type": "LineString",
            "coordinates": [[0.0, 0.0, 120.5], [0.0, 1.0, 121.0]]
        }"#;
        let lines = lines_from_geojson(input).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0[0].y, 0.0);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(lines_from_geojson("{ not geojson").is_err());
    }
}
