//! Surface projection strategies.
//!
//! Maps geographic coordinates onto the target surface: the globe
//! itself, or an equirectangular flat plane for a "paper map" view.

use geo_types::Coord;
use glam::DVec3;

use super::coords::to_cartesian;
use super::error::GeoError;

/// The surface a document is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Points on a sphere of the configured radius.
    #[default]
    Sphere,
    /// Equirectangular flattening into the y/z plane. Not equal-area
    /// or conformal; just `(lon/180, lat/180)` scaled by the radius.
    Plane,
}

impl Projection {
    /// Resolves a shape token from configuration or the command line.
    ///
    /// Only `"sphere"` and `"plane"` are recognized; anything else is
    /// rejected up front, before any geometry is processed.
    pub fn from_token(token: &str) -> Result<Self, GeoError> {
        match token {
            "sphere" => Ok(Projection::Sphere),
            "plane" => Ok(Projection::Plane),
            other => Err(GeoError::UnsupportedShape(other.to_string())),
        }
    }

    /// Projects a geographic coordinate (x = longitude, y = latitude,
    /// degrees) onto this surface at the given radius.
    pub fn project(&self, point: Coord<f64>, radius: f64) -> DVec3 {
        match self {
            Projection::Sphere => to_cartesian(point, radius),
            Projection::Plane => DVec3::new(0.0, point.x / 180.0 * radius, point.y / 180.0 * radius),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Projection::Sphere => "Sphere",
            Projection::Plane => "Plane",
        }
    }

    pub fn all() -> &'static [Projection] {
        &[Projection::Sphere, Projection::Plane]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_projection_of_origin() {
        let point = Projection::Sphere.project(Coord { x: 0.0, y: 0.0 }, 1.0);

        assert!((point.x - 1.0).abs() < 1e-9);
        assert!(point.y.abs() < 1e-9);
        assert!(point.z.abs() < 1e-9);
    }

    #[test]
    fn test_plane_projection() {
        let point = Projection::Plane.project(Coord { x: 90.0, y: 45.0 }, 2.0);

        assert_eq!(point, DVec3::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn test_token_resolution() {
        assert_eq!(Projection::from_token("sphere").unwrap(), Projection::Sphere);
        assert_eq!(Projection::from_token("plane").unwrap(), Projection::Plane);
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = Projection::from_token("cube").unwrap_err();
        assert!(matches!(err, GeoError::UnsupportedShape(token) if token == "cube"));
    }
}
