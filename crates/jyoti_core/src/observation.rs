//! Observation input: one civil instant at one place.

use chrono::NaiveDateTime;
use jyoti_time::{EastWest, NorthSouth, TimeError};

use crate::error::EphemerisError;

/// Civil date-time plus the observer's zone offset and coordinates.
///
/// Longitude and latitude are non-negative magnitudes with separate
/// hemisphere flags. The zone offset shares the longitude's hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub civil: NaiveDateTime,
    /// Zone offset from Greenwich, seconds (magnitude).
    pub meridian_offset_s: f64,
    pub longitude_deg: f64,
    pub longitude_dir: EastWest,
    pub latitude_deg: f64,
    pub latitude_dir: NorthSouth,
}

impl Observation {
    pub fn new(
        civil: NaiveDateTime,
        meridian_offset_s: f64,
        longitude_deg: f64,
        longitude_dir: EastWest,
        latitude_deg: f64,
        latitude_dir: NorthSouth,
    ) -> Self {
        Self {
            civil,
            meridian_offset_s,
            longitude_deg,
            longitude_dir,
            latitude_deg,
            latitude_dir,
        }
    }

    /// Same place, different civil instant.
    pub fn at(&self, civil: NaiveDateTime) -> Self {
        Self { civil, ..*self }
    }

    /// Signed longitude, east positive.
    pub fn signed_longitude(&self) -> f64 {
        self.longitude_dir.signed(self.longitude_deg)
    }

    pub fn is_south(&self) -> bool {
        self.latitude_dir.is_south()
    }

    /// Magnitudes must be non-negative; the hemisphere lives in the flags.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || !(0.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemerisError::LatitudeOutOfRange(self.latitude_deg));
        }
        if !self.longitude_deg.is_finite() || !(0.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemerisError::LongitudeOutOfRange(self.longitude_deg));
        }
        if !self.meridian_offset_s.is_finite() || self.meridian_offset_s < 0.0 {
            return Err(TimeError::InvalidOffset(self.meridian_offset_s).into());
        }
        Ok(())
    }
}
