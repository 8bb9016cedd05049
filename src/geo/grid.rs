//! Graticule generation.
//!
//! Builds the reference grid drawn on the globe: meridians (great
//! circles through the poles) and circles of latitude. Independent of
//! the GeoJSON pipeline; works directly in Cartesian space via
//! [`to_cartesian`].

use geo_types::Coord;

use super::assemble::Primitive;
use super::coords::to_cartesian;

/// Sampling step along each grid line, in degrees. Fine enough that
/// the strips look like smooth circles without running the segment
/// subdivider over them.
const SAMPLE_STEP_DEG: usize = 5;

/// Builds the graticule for a sphere of the given radius.
///
/// `circle_count` controls density: meridians are spaced
/// `360 / circle_count` degrees apart, and the same spacing is used
/// between circles of latitude. Returns one closed line strip per
/// grid line. The poles themselves carry no circle (they would be
/// degenerate points).
pub fn graticule(radius: f64, circle_count: usize) -> Vec<Primitive> {
    if circle_count == 0 {
        return Vec::new();
    }
    let spacing = 360.0 / circle_count as f64;

    let mut strips = Vec::new();

    for idx in 0..circle_count {
        let longitude = idx as f64 * spacing - 180.0;
        strips.push(meridian(longitude, radius));
    }

    // Parallels between (but not at) the poles.
    let mut latitude = -90.0 + spacing;
    while latitude < 90.0 - 1e-9 {
        strips.push(circle_of_latitude(latitude, radius));
        latitude += spacing;
    }

    strips
}

/// A full great circle through both poles at a fixed longitude.
///
/// Sweeping latitude through the full -180..180 range traces the
/// back half of the circle too (the trig functions wrap past the
/// poles), so one strip closes on itself.
fn meridian(longitude: f64, radius: f64) -> Primitive {
    let vertices = (-180..=180)
        .step_by(SAMPLE_STEP_DEG)
        .map(|latitude| {
            to_cartesian(
                Coord {
                    x: longitude,
                    y: latitude as f64,
                },
                radius,
            )
        })
        .collect();
    Primitive::LineStrip(vertices)
}

/// A closed circle at a fixed latitude.
fn circle_of_latitude(latitude: f64, radius: f64) -> Primitive {
    let vertices = (0..=360)
        .step_by(SAMPLE_STEP_DEG)
        .map(|longitude| {
            to_cartesian(
                Coord {
                    x: longitude as f64,
                    y: latitude,
                },
                radius,
            )
        })
        .collect();
    Primitive::LineStrip(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_count() {
        // 12 meridians at 30-degree spacing, plus parallels at
        // -60/-30/0/30/60 (poles excluded).
        let strips = graticule(1.0, 12);
        assert_eq!(strips.len(), 12 + 5);
    }

    #[test]
    fn test_strips_are_closed_loops() {
        for strip in graticule(1.0, 6) {
            let Primitive::LineStrip(vertices) = strip else {
                panic!("graticule should only emit line strips");
            };
            let first = vertices.first().unwrap();
            let last = vertices.last().unwrap();
            assert!((*first - *last).length() < 1e-9);
        }
    }

    #[test]
    fn test_vertices_lie_on_the_sphere() {
        let radius = 3.0;
        for strip in graticule(radius, 8) {
            let Primitive::LineStrip(vertices) = strip else {
                panic!("graticule should only emit line strips");
            };
            for vertex in vertices {
                assert!((vertex.length() - radius).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_count_yields_nothing() {
        assert!(graticule(1.0, 0).is_empty());
    }
}
