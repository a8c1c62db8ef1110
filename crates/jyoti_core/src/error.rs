//! Error types for position computation.

use jyoti_config::ConfigError;
use jyoti_time::TimeError;
use thiserror::Error;

/// Errors from the position models.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Error from civil-time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Configuration failed validation.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// Latitude magnitude is not finite or exceeds 90°.
    #[error("latitude out of supported range: {0}")]
    LatitudeOutOfRange(f64),
    /// Longitude magnitude is not finite or exceeds 180°.
    #[error("longitude out of supported range: {0}")]
    LongitudeOutOfRange(f64),
}
