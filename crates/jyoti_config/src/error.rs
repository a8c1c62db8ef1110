//! Error types for configuration loading and validation.

use thiserror::Error;

/// Errors from loading or validating an [`crate::EphemerisConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration document is not valid JSON for this schema.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is outside its physical domain.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
