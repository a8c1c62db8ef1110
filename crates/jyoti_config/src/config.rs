//! The top-level immutable configuration value.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use jyoti_math::dms_to_deg;
use serde::{Deserialize, Serialize};

use crate::elements::PlanetTable;
use crate::error::ConfigError;

/// Fixed reference instants of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Epochs {
    /// Origin for elapsed years (precession, apse drift): 1900-01-01 00:00.
    pub reference: NaiveDateTime,
    /// Origin for elapsed days (mean longitudes): 1900-01-01 06:00.
    pub mean_sunrise: NaiveDateTime,
    /// Origin of the Jupiter/Saturn secular terms: 1558-04-01 00:00.
    pub secular_base: NaiveDateTime,
}

impl Default for Epochs {
    fn default() -> Self {
        Self {
            reference: fixed_instant(1900, 1, 1, 0),
            mean_sunrise: fixed_instant(1900, 1, 1, 6),
            secular_base: fixed_instant(1558, 4, 1, 0),
        }
    }
}

/// Build one of the model's fixed instants. Arguments are literals that
/// always form a valid date.
fn fixed_instant(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap_or_default()
}

/// Solar mean elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarElements {
    pub sidereal_year_days: f64,
    pub mean_longitude_deg: f64,
    pub apse_deg: f64,
    /// Apse drift, arc-seconds per year.
    pub apse_rate_arcsec: f64,
    pub eccentricity: f64,
    /// Mean daily motion, arc-seconds (59′8″).
    pub daily_motion_arcsec: f64,
}

impl Default for SolarElements {
    fn default() -> Self {
        Self {
            sidereal_year_days: 365.256374,
            mean_longitude_deg: dms_to_deg(257.0, 58.0, 26.0),
            apse_deg: dms_to_deg(78.0, 45.0, 32.0),
            apse_rate_arcsec: 11.63,
            eccentricity: 0.01675,
            daily_motion_arcsec: 59.0 * 60.0 + 8.0,
        }
    }
}

/// Lunar mean elements and perturbation constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunarElements {
    pub period_days: f64,
    pub mean_longitude_deg: f64,
    pub apse_deg: f64,
    pub apse_period_days: f64,
    /// Ascending node (Rahu) at epoch; the node regresses.
    pub node_deg: f64,
    pub node_period_days: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    /// Fixed angle of the variation term (88°22′31″).
    pub variation_angle_deg: f64,
    /// Daily motions in arc-minutes used by the net-correction injection.
    pub moon_motion_arcmin: f64,
    pub apse_motion_arcmin: f64,
    pub sun_motion_arcmin: f64,
}

impl Default for LunarElements {
    fn default() -> Self {
        Self {
            period_days: 27.32166,
            mean_longitude_deg: dms_to_deg(257.0, 51.0, 16.0),
            apse_deg: dms_to_deg(132.0, 0.0, 19.0),
            apse_period_days: 3232.54051,
            node_deg: dms_to_deg(236.0, 41.0, 42.0),
            node_period_days: 6793.39477,
            eccentricity: 0.0549,
            inclination_deg: 5.1467,
            variation_angle_deg: dms_to_deg(88.0, 22.0, 31.0),
            moon_motion_arcmin: 790.0 + 35.0 / 60.0,
            apse_motion_arcmin: 6.0 + 41.0 / 60.0,
            sun_motion_arcmin: 59.0 + 8.0 / 60.0,
        }
    }
}

/// Linear precession (ayanamsa) model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecessionModel {
    pub at_epoch_deg: f64,
    /// Arc-seconds per year.
    pub rate_arcsec: f64,
}

impl Default for PrecessionModel {
    fn default() -> Self {
        Self {
            at_epoch_deg: dms_to_deg(22.0, 27.0, 44.0),
            rate_arcsec: 50.2564,
        }
    }
}

impl PrecessionModel {
    /// Precession in degrees after `years` tropical years.
    pub fn at(&self, years: f64) -> f64 {
        self.at_epoch_deg + self.rate_arcsec * years / 3600.0
    }
}

/// Everything the position models read, built once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    pub epochs: Epochs,
    pub sun: SolarElements,
    pub moon: LunarElements,
    pub precession: PrecessionModel,
    /// Obliquity of the ecliptic (23°27.5′).
    pub obliquity_deg: f64,
    pub planets: PlanetTable,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            epochs: Epochs::default(),
            sun: SolarElements::default(),
            moon: LunarElements::default(),
            precession: PrecessionModel::default(),
            obliquity_deg: 23.0 + 27.5 / 60.0,
            planets: PlanetTable::default(),
        }
    }
}

impl EphemerisConfig {
    /// Parse a (possibly partial) JSON document over the defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn obliquity_rad(&self) -> f64 {
        self.obliquity_deg.to_radians()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.obliquity_deg.is_finite() && self.obliquity_deg > 0.0 && self.obliquity_deg < 90.0)
        {
            return Err(ConfigError::Invalid("obliquity must be in (0, 90)"));
        }
        let sun = &self.sun;
        if !(sun.sidereal_year_days.is_finite() && sun.sidereal_year_days > 0.0) {
            return Err(ConfigError::Invalid("sidereal year must be positive"));
        }
        if !(0.0..1.0).contains(&sun.eccentricity) {
            return Err(ConfigError::Invalid("solar eccentricity must be in [0, 1)"));
        }
        let moon = &self.moon;
        for period in [moon.period_days, moon.apse_period_days, moon.node_period_days] {
            if !(period.is_finite() && period > 0.0) {
                return Err(ConfigError::Invalid("lunar periods must be positive"));
            }
        }
        if !(0.0..1.0).contains(&moon.eccentricity) {
            return Err(ConfigError::Invalid("lunar eccentricity must be in [0, 1)"));
        }
        if !(self.precession.at_epoch_deg.is_finite() && self.precession.rate_arcsec.is_finite()) {
            return Err(ConfigError::Invalid("precession must be finite"));
        }
        if self.epochs.mean_sunrise < self.epochs.reference {
            return Err(ConfigError::Invalid("epoch sunrise precedes the reference epoch"));
        }
        self.planets.validate()
    }
}
