//! The geometry pipeline.
//!
//! Turns a decoded GeoJSON document into projection-ready primitives:
//! container flattening, adaptive segment subdivision, and projection
//! onto the target surface (sphere or flattened plane). Rendering is
//! the canvas's concern; nothing in this module draws.

mod assemble;
mod coords;
mod error;
mod extract;
mod grid;
mod interpolate;
mod projection;

pub use assemble::{build_primitives, Primitive};
pub use coords::{to_cartesian, to_spherical};
pub use error::GeoError;
pub use grid::graticule;
pub use projection::Projection;
