//! Primitive assembly: GeoJSON geometries to renderable primitives.
//!
//! Walks each geometry's nested coordinate payload, subdivides long
//! segments, projects every point onto the target surface, and emits
//! one primitive per logical sub-geometry (one marker per point, one
//! line strip per line string or polygon ring).

use geo_types::Coord;
use geojson::{Geometry, Value};
use glam::DVec3;

use super::error::GeoError;
use super::extract::flatten_document;
use super::interpolate::densify;
use super::projection::Projection;

/// A renderable primitive handed to the canvas.
///
/// Emission order follows input traversal order: document order, then
/// ring/segment order within each geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A single projected point. The line-based canvas renderer cannot
    /// draw these (see `ui::canvas`); they are still emitted so any
    /// capable renderer gets well-formed input.
    Marker(DVec3),
    /// An ordered run of projected points drawn as connected segments.
    LineStrip(Vec<DVec3>),
}

/// Runs the whole pipeline for one document: flatten its containers,
/// then assemble every geometry into primitives.
///
/// Fails on the first invalid geometry; no partial output is returned.
pub fn build_primitives(
    document: &serde_json::Value,
    radius: f64,
    projection: Projection,
) -> Result<Vec<Primitive>, GeoError> {
    let geometries = flatten_document(document)?;

    let mut primitives = Vec::new();
    for geometry in &geometries {
        assemble_geometry(geometry, projection, radius, &mut primitives)?;
    }

    log::debug!(
        "assembled {} primitive(s) from {} geometry(ies)",
        primitives.len(),
        geometries.len()
    );
    Ok(primitives)
}

/// Assembles one geometry, appending its primitives to `out`.
pub fn assemble_geometry(
    geometry: &Geometry,
    projection: Projection,
    radius: f64,
    out: &mut Vec<Primitive>,
) -> Result<(), GeoError> {
    match &geometry.value {
        Value::Point(position) => {
            out.push(Primitive::Marker(
                projection.project(geo_coord(position)?, radius),
            ));
        }
        Value::MultiPoint(positions) => {
            for position in positions {
                out.push(Primitive::Marker(
                    projection.project(geo_coord(position)?, radius),
                ));
            }
        }
        Value::LineString(line) => {
            out.push(line_strip(line, projection, radius)?);
        }
        Value::Polygon(rings) => {
            for ring in rings {
                out.push(line_strip(ring, projection, radius)?);
            }
        }
        Value::MultiLineString(lines) => {
            for line in lines {
                out.push(line_strip(line, projection, radius)?);
            }
        }
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                for ring in rings {
                    out.push(line_strip(ring, projection, radius)?);
                }
            }
        }
        Value::GeometryCollection(_) => {
            // Collections are flattened one level by the extractor; a
            // collection nested inside another is out of contract.
            return Err(GeoError::InvalidGeometry(
                "nested GeometryCollection".to_string(),
            ));
        }
    }

    Ok(())
}

/// Builds one line strip: subdivide, then project every point.
///
/// The vertex buffer is freshly allocated per strip, so no state leaks
/// from one line into the next.
fn line_strip(
    positions: &[Vec<f64>],
    projection: Projection,
    radius: f64,
) -> Result<Primitive, GeoError> {
    let mut points = Vec::with_capacity(positions.len());
    for position in positions {
        points.push(geo_coord(position)?);
    }

    let vertices = densify(&points)
        .into_iter()
        .map(|point| projection.project(point, radius))
        .collect();

    Ok(Primitive::LineStrip(vertices))
}

fn geo_coord(position: &[f64]) -> Result<Coord<f64>, GeoError> {
    match position {
        [lon, lat, ..] => Ok(Coord { x: *lon, y: *lat }),
        _ => Err(GeoError::InvalidGeometry(format!(
            "coordinate position has {} component(s), expected at least 2",
            position.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn geometry(value: serde_json::Value) -> Geometry {
        serde_json::from_value(value).unwrap()
    }

    fn assemble(value: serde_json::Value) -> Vec<Primitive> {
        let mut out = Vec::new();
        assemble_geometry(&geometry(value), Projection::Sphere, 1.0, &mut out).unwrap();
        out
    }

    #[test]
    fn test_line_string_emits_one_subdivided_strip() {
        let out = assemble(json!({
            "type": "LineString",
            "coordinates": [[0.0, 0.0], [0.0, 20.0]]
        }));

        assert_eq!(out.len(), 1);
        let Primitive::LineStrip(vertices) = &out[0] else {
            panic!("expected a line strip");
        };
        // 20-degree span subdivides into four 5-degree segments.
        assert_eq!(vertices.len(), 5);
        assert!((vertices[0] - DVec3::new(1.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_polygon_emits_one_strip_per_ring() {
        let out = assemble(json!({
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
                [[0.2, 0.2], [0.8, 0.2], [0.8, 0.8], [0.2, 0.2]]
            ]
        }));

        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| matches!(p, Primitive::LineStrip(_))));
    }

    #[test]
    fn test_multi_polygon_ordering() {
        let out = assemble(json!({
            "type": "MultiPolygon",
            "coordinates": [
                [
                    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]
                ],
                [
                    [[10.0, 10.0], [11.0, 10.0], [11.0, 11.0], [10.0, 10.0]],
                    [[10.2, 10.2], [10.8, 10.2], [10.8, 10.8], [10.2, 10.2]]
                ]
            ]
        }));

        // One ring from the first polygon, then two from the second.
        assert_eq!(out.len(), 3);
        let Primitive::LineStrip(second) = &out[1] else {
            panic!("expected a line strip");
        };
        let expected_start = Projection::Sphere.project(Coord { x: 10.0, y: 10.0 }, 1.0);
        assert!((second[0] - expected_start).length() < 1e-9);
    }

    #[test]
    fn test_point_and_multi_point_emit_markers() {
        let out = assemble(json!({ "type": "Point", "coordinates": [0.0, 0.0] }));
        assert_eq!(out, vec![Primitive::Marker(DVec3::new(1.0, 0.0, 0.0))]);

        let out = assemble(json!({
            "type": "MultiPoint",
            "coordinates": [[0.0, 0.0], [90.0, 0.0], [0.0, 90.0]]
        }));
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|p| matches!(p, Primitive::Marker(_))));
    }

    #[test]
    fn test_nested_geometry_collection_is_invalid() {
        let nested = geometry(json!({
            "type": "GeometryCollection",
            "geometries": [{ "type": "Point", "coordinates": [0.0, 0.0] }]
        }));

        let mut out = Vec::new();
        let err = assemble_geometry(&nested, Projection::Sphere, 1.0, &mut out).unwrap_err();
        assert!(matches!(err, GeoError::InvalidGeometry(_)));
    }

    #[test]
    fn test_short_position_is_invalid() {
        let bad = geometry(json!({
            "type": "LineString",
            "coordinates": [[0.0, 0.0], [1.0]]
        }));

        let mut out = Vec::new();
        let err = assemble_geometry(&bad, Projection::Sphere, 1.0, &mut out).unwrap_err();
        assert!(matches!(err, GeoError::InvalidGeometry(_)));
    }

    #[test]
    fn test_build_primitives_end_to_end() {
        let document = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "marker" },
                    "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "meridian" },
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[0.0, 0.0], [0.0, 20.0]]
                    }
                }
            ]
        });

        let primitives = build_primitives(&document, 1.0, Projection::Sphere).unwrap();

        assert_eq!(primitives.len(), 2);
        assert!(matches!(primitives[0], Primitive::Marker(_)));
        assert!(matches!(&primitives[1], Primitive::LineStrip(v) if v.len() == 5));
    }

    #[test]
    fn test_unsupported_shape_fails_before_geometry_processing() {
        // The shape token is resolved before the pipeline touches any
        // geometry; a bad token never reaches the assembler.
        let err = Projection::from_token("cube").unwrap_err();
        assert!(matches!(err, GeoError::UnsupportedShape(_)));
    }
}
