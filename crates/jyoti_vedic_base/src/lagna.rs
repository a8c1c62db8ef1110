//! Lagna (ascendant), RAMC and culmination point.
//!
//! RAMC is built from the Sun's mean longitude, a longitude-time term at
//! 59°8′ per full turn of longitude, precession, and the local-time
//! correction. Ascendant and culmination are `atan` solutions in RAMC,
//! latitude and obliquity, each followed by a half-turn branch pick.
//! All returned longitudes are sidereal (precession removed).

use chrono::NaiveDateTime;
use jyoti_core::{EphemerisConfig, Observation, SunParams};
use jyoti_math::{diff_degrees, nearest_separation, sum_degrees};
use jyoti_time::{SECONDS_PER_DAY, civil_noon};
use tracing::debug;

use crate::error::VedicError;

/// Degrees of RAMC gained per 360° of observer longitude.
pub const LONGITUDE_TIME_RATE_DEG: f64 = 59.0 + 8.0 / 60.0;

/// Clock seconds per one second of sidereal gain.
const CLOCK_RATE_SECONDS: i64 = 360;

/// Angles shared by the house solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnaParams {
    /// Local-time correction, degrees (negative before local noon).
    pub local_time_correction_deg: f64,
    /// Right ascension of the meridian, tropical degrees.
    pub ramc_deg: f64,
    /// Sidereal ascendant.
    pub ascendant_deg: f64,
    /// Sidereal culmination point (10th cusp).
    pub culmination_deg: f64,
    pub south: bool,
}

/// Local-time correction in degrees for a true local time.
///
/// Whole seconds from local noon, plus one second per six minutes, turned
/// into degrees of rotation; negative at or before noon.
pub fn local_time_correction_deg(local_time: NaiveDateTime) -> Result<f64, VedicError> {
    let noon = civil_noon(local_time)?;
    let whole = (local_time - noon)
        .num_milliseconds()
        .div_euclid(1000)
        .abs();
    let total = whole + whole / CLOCK_RATE_SECONDS;
    let deg = total as f64 / SECONDS_PER_DAY * 360.0;
    Ok(if local_time <= noon { -deg } else { deg })
}

/// RAMC in degrees. `signed_longitude_deg` is negative for west.
pub fn ramc_deg(
    signed_longitude_deg: f64,
    sun_mean_longitude_deg: f64,
    precession_deg: f64,
    local_time_correction_deg: f64,
    south: bool,
) -> f64 {
    let longitude_term = signed_longitude_deg * LONGITUDE_TIME_RATE_DEG / 360.0;
    let corrected = diff_degrees(sun_mean_longitude_deg, longitude_term);
    let ramc = sum_degrees(&[
        sum_degrees(&[corrected, precession_deg]),
        local_time_correction_deg,
    ]);
    if south { sum_degrees(&[ramc, 180.0]) } else { ramc }
}

/// Sidereal ascendant.
pub fn ascendant_deg(
    ramc_deg: f64,
    latitude_deg: f64,
    obliquity_rad: f64,
    precession_deg: f64,
    south: bool,
) -> f64 {
    let r = ramc_deg.to_radians();
    let lat = latitude_deg.to_radians();
    let mut asc = ((lat.tan() * obliquity_rad.sin()) / r.cos() + obliquity_rad.cos() * r.tan())
        .atan()
        .to_degrees();
    if nearest_separation(diff_degrees(asc, ramc_deg)) > 90.0 {
        asc = sum_degrees(&[asc, 180.0]);
    }
    asc = sum_degrees(&[asc, 90.0]);
    if south {
        asc = sum_degrees(&[asc, 180.0]);
    }
    diff_degrees(asc, precession_deg)
}

/// Sidereal culmination point (meridian-ecliptic intersection).
pub fn culmination_deg(ramc_deg: f64, obliquity_rad: f64, precession_deg: f64, south: bool) -> f64 {
    let r = ramc_deg.to_radians();
    let mut mc = (r.tan() / obliquity_rad.cos()).atan().to_degrees();
    if nearest_separation(diff_degrees(ramc_deg, mc)) > 90.0 {
        mc = sum_degrees(&[mc, 180.0]);
    }
    if south {
        mc = sum_degrees(&[mc, 180.0]);
    }
    diff_degrees(mc, precession_deg)
}

/// Lagna, RAMC and culmination for an observation whose Sun is known.
pub fn compute_lagna(
    config: &EphemerisConfig,
    obs: &Observation,
    sun: &SunParams,
) -> Result<LagnaParams, VedicError> {
    if obs.latitude_deg.abs() >= 90.0 {
        return Err(VedicError::InvalidLocation("ascendant undefined at the poles"));
    }
    let south = obs.is_south();
    let ltc = local_time_correction_deg(sun.local_time)?;
    let ramc = ramc_deg(
        obs.signed_longitude(),
        sun.mean_longitude_deg,
        sun.precession_deg,
        ltc,
        south,
    );
    let obliquity = config.obliquity_rad();
    let ascendant = ascendant_deg(ramc, obs.latitude_deg, obliquity, sun.precession_deg, south);
    let culmination = culmination_deg(ramc, obliquity, sun.precession_deg, south);
    debug!(ramc, ascendant, culmination, "lagna");

    Ok(LagnaParams {
        local_time_correction_deg: ltc,
        ramc_deg: ramc,
        ascendant_deg: ascendant,
        culmination_deg: culmination,
        south,
    })
}
