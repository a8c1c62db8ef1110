//! Error types for house and almanac-element calculations.

use jyoti_core::EphemerisError;
use jyoti_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the position engine.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// Error from civil-time arithmetic.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
