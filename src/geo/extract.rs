//! GeoJSON document flattening.
//!
//! Normalizes the containers a GeoJSON document may arrive in (bare
//! geometry, `Feature`, `FeatureCollection`, `GeometryCollection`)
//! into a flat, ordered list of geometries for the assembler.

use geojson::{GeoJson, Geometry, Value};

use super::error::GeoError;

/// Flattens a decoded GeoJSON document into its geometries.
///
/// - `Feature` yields its single geometry.
/// - `FeatureCollection` yields each feature's geometry, in order.
/// - A `GeometryCollection` yields its members, in order. Only one
///   level is unwrapped; members are expected to be plain geometries.
/// - Any other bare geometry yields itself.
///
/// A document with an unrecognized top-level `type`, or a feature
/// missing its geometry, fails with [`GeoError::InvalidGeometry`].
pub fn flatten_document(document: &serde_json::Value) -> Result<Vec<Geometry>, GeoError> {
    let geojson: GeoJson = serde_json::from_value(document.clone())
        .map_err(|e| GeoError::InvalidGeometry(e.to_string()))?;

    match geojson {
        GeoJson::Feature(feature) => {
            let geometry = feature
                .geometry
                .ok_or_else(|| GeoError::InvalidGeometry("feature has no geometry".to_string()))?;
            Ok(vec![geometry])
        }
        GeoJson::FeatureCollection(collection) => collection
            .features
            .into_iter()
            .map(|feature| {
                feature.geometry.ok_or_else(|| {
                    GeoError::InvalidGeometry("feature has no geometry".to_string())
                })
            })
            .collect(),
        GeoJson::Geometry(geometry) => match geometry.value {
            Value::GeometryCollection(members) => Ok(members),
            _ => Ok(vec![geometry]),
        },
    }
}
