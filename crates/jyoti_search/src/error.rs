//! Error types for calendar searches and the almanac.

use jyoti_core::EphemerisError;
use jyoti_time::TimeError;
use jyoti_vedic_base::VedicError;
use thiserror::Error;

use crate::tamil_calendar_types::SearchStage;

/// Errors from search and aggregation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("vedic error: {0}")]
    Vedic(#[from] VedicError),
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// A bounded root-finder loop ran out of steps.
    #[error("calendar boundary not found: {stage} exhausted after {steps} steps")]
    BoundaryNotFound { stage: SearchStage, steps: u32 },
}
