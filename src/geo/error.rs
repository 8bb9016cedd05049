//! Errors raised by the geometry pipeline.

use thiserror::Error;

/// Fatal pipeline errors. Both are input-shape problems, so neither is
/// retried; a populate pass aborts without partial output and the
/// caller surfaces the message to the user.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The document's top-level `type` is unrecognized, or an
    /// individual geometry does not match one of the six supported
    /// variants.
    #[error("invalid GeoJSON geometry: {0}")]
    InvalidGeometry(String),

    /// The requested surface shape token is neither "sphere" nor
    /// "plane". Raised before any geometry is processed.
    #[error("unsupported surface shape: {0:?}")]
    UnsupportedShape(String),
}
