//! Geographic <-> Cartesian coordinate conversion.
//!
//! Converts between geographic coordinates (lon/lat in degrees) and
//! Cartesian coordinates on a sphere of a given radius. Used by the
//! graticule generator and by point picking on the canvas; the GeoJSON
//! pipeline goes through [`crate::geo::Projection`] instead.

use geo_types::Coord;
use glam::DVec3;

/// Converts a geographic coordinate (x = longitude, y = latitude, in
/// degrees) to a Cartesian point on a sphere of the given radius.
///
/// The frame is right-handed and Y-up: longitude 0 maps to +X and
/// increasing longitude rotates toward -Z.
pub fn to_cartesian(point: Coord<f64>, radius: f64) -> DVec3 {
    let lat_rad = point.y.to_radians();
    let lon_rad = point.x.to_radians();

    DVec3::new(
        radius * lat_rad.cos() * lon_rad.cos(),
        radius * lat_rad.sin(),
        -radius * lat_rad.cos() * lon_rad.sin(),
    )
}

/// Converts a Cartesian point on the sphere's surface back to a
/// geographic coordinate (x = longitude, y = latitude, in degrees).
///
/// Exact inverse of [`to_cartesian`] for points on the sphere of the
/// given radius. Off-sphere input is not meaningful: `y/radius`
/// outside [-1, 1] leaves `asin` undefined (NaN).
pub fn to_spherical(point: DVec3, radius: f64) -> Coord<f64> {
    let latitude = (point.y / radius).asin().to_degrees();

    let longitude = point.x.atan2(point.z).to_degrees() - 90.0;
    let longitude = if longitude < -180.0 {
        longitude + 360.0
    } else {
        longitude
    };

    Coord {
        x: longitude,
        y: latitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_vec3_eq(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_origin_maps_to_positive_x() {
        let point = to_cartesian(Coord { x: 0.0, y: 0.0 }, 1.0);
        assert_vec3_eq(point, DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_north_pole_maps_to_positive_y() {
        let point = to_cartesian(Coord { x: 0.0, y: 90.0 }, 2.0);
        assert_vec3_eq(point, DVec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_east_longitude_rotates_toward_negative_z() {
        let point = to_cartesian(Coord { x: 90.0, y: 0.0 }, 1.0);
        assert_vec3_eq(point, DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_round_trip_away_from_poles() {
        let radius = 6371.0;
        for lat in [-80.0, -45.0, -10.0, 0.0, 10.0, 45.0, 80.0] {
            for lon in [-170.0, -90.0, -30.0, 0.0, 30.0, 90.0, 170.0] {
                let original = Coord { x: lon, y: lat };
                let restored = to_spherical(to_cartesian(original, radius), radius);

                assert!(
                    (restored.x - original.x).abs() < EPSILON,
                    "longitude {lon} came back as {}",
                    restored.x
                );
                assert!(
                    (restored.y - original.y).abs() < EPSILON,
                    "latitude {lat} came back as {}",
                    restored.y
                );
            }
        }
    }

    #[test]
    fn test_longitude_normalized_into_range() {
        // lon = 170 exercises the < -180 normalization branch in the
        // inverse (atan2 yields -100 degrees, so -190 before the +360
        // correction).
        let point = to_cartesian(Coord { x: 170.0, y: 0.0 }, 1.0);
        let restored = to_spherical(point, 1.0);

        assert!(restored.x >= -180.0 && restored.x < 180.0);
        assert!((restored.x - 170.0).abs() < EPSILON);
    }
}
