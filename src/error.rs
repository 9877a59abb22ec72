//! Defines [`GeoFeatureError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum GeoFeatureError {
    /// Malformed WKT text or GeoJSON coordinate structure.
    #[error("Format error: {0}")]
    Format(String),

    /// A decoded GeoJSON document did not carry the expected geometry type tag.
    #[error("Incorrect geometry type: expected {expected}, got {actual}")]
    IncorrectType {
        expected: &'static str,
        actual: String,
    },

    /// A coordinate outside the WGS84 longitude/latitude domain, or non-finite.
    #[error("Coordinate out of range: ({lon}, {lat})")]
    OutOfRange { lon: f64, lat: f64 },

    /// A computation that is undefined for the given geometry.
    #[error("Degenerate geometry: {0}")]
    Degenerate(&'static str),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoFeatureError>;
