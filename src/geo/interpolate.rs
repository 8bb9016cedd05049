//! Adaptive segment subdivision.
//!
//! Long lon/lat segments drawn directly on the sphere would cut
//! through it as chords. Subdividing them until no pair of adjacent
//! points spans more than a few degrees makes the projected line hug
//! the surface closely enough to read as a great circle.

use geo_types::Coord;

/// Maximum angular gap, in degrees, allowed between adjacent points.
/// Pairs exceeding this in either axis get a midpoint inserted.
pub const SUBDIVISION_THRESHOLD_DEG: f64 = 5.0;

/// Safety cap on subdivision passes. Each pass halves the largest
/// gap, so even a full 360-degree span settles in under ten passes;
/// the cap guards against pathological input such as unwrapped
/// antimeridian crossings.
const MAX_PASSES: usize = 20;

/// Subdivides a point sequence until every adjacent pair is within
/// [`SUBDIVISION_THRESHOLD_DEG`] in both longitude and latitude.
///
/// Midpoints are arithmetic means in lon/lat space, not geodesic
/// points. The first and last input points are always preserved, and
/// sequences of length 0 or 1 are returned unchanged.
///
/// Longitude deltas are compared without wrapping at the
/// antimeridian: a segment from 179 to -179 reads as a 358-degree gap
/// and gets subdivided the long way around the globe. Known
/// inaccuracy, kept because downstream rendering expects it.
pub fn densify(points: &[Coord<f64>]) -> Vec<Coord<f64>> {
    let mut current = points.to_vec();
    if current.len() < 2 {
        return current;
    }

    for _ in 0..MAX_PASSES {
        let mut next = Vec::with_capacity(current.len());
        let mut inserted = false;

        for pair in current.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            next.push(a);
            if needs_subdivision(a, b) {
                next.push(midpoint(a, b));
                inserted = true;
            }
        }
        next.push(current[current.len() - 1]);

        current = next;
        if !inserted {
            break;
        }
    }

    current
}

/// True when the pair spans more than the threshold in either axis.
fn needs_subdivision(a: Coord<f64>, b: Coord<f64>) -> bool {
    (a.x - b.x).abs() > SUBDIVISION_THRESHOLD_DEG || (a.y - b.y).abs() > SUBDIVISION_THRESHOLD_DEG
}

fn midpoint(a: Coord<f64>, b: Coord<f64>) -> Coord<f64> {
    Coord {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}
