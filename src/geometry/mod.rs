use thiserror::Error;

pub mod codec;
pub mod interchange;

pub use interchange::{Geometry, Position};

/// Errors from geometry conversion between interchange and binary form
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The decoded binary value is a kind this service does not handle.
    /// Stored data should never contain one, so this is an internal fault.
    #[error("unsupported geometry kind: {0}")]
    UnsupportedKind(&'static str),

    #[error("polygon must have at least one ring")]
    EmptyPolygon,

    #[error(transparent)]
    Codec(#[from] geozero::error::GeozeroError),
}
