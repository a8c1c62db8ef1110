//! Error types for civil-time conversion.

use thiserror::Error;

/// Errors from time conversion.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Zone offset is not finite or exceeds one day.
    #[error("invalid meridian offset: {0} s")]
    InvalidOffset(f64),
    /// Shift amount is not a finite number of seconds.
    #[error("non-finite time shift")]
    NonFiniteShift,
    /// Result falls outside the representable calendar range.
    #[error("time out of range: {0}")]
    OutOfRange(&'static str),
}
