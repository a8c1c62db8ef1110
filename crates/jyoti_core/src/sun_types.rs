//! Solar parameter set.

use chrono::NaiveDateTime;

/// Everything derived for the Sun at one observation.
///
/// Longitudes are sidereal unless named tropical. `true_longitude_deg` has
/// the net (local) correction applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunParams {
    /// Input re-expressed at the reference meridian.
    pub reference_time: NaiveDateTime,
    /// True local mean time at the observer.
    pub local_time: NaiveDateTime,
    pub years_since_epoch: f64,
    pub days_since_epoch: f64,
    pub precession_deg: f64,
    pub mean_longitude_deg: f64,
    pub true_longitude_deg: f64,
    pub tropical_longitude_deg: f64,
    pub apse_deg: f64,
    pub mean_anomaly_deg: f64,
    /// Equation of center, arc-seconds.
    pub mandaphalam_arcsec: f64,
    /// Heliocentric daily motion, degrees.
    pub helio_velocity_deg: f64,
    pub radius_vector: f64,
    pub hour_angle_deg: f64,
    pub charam_deg: f64,
    pub pranam_deg: f64,
    /// Net correction, arc-minutes.
    pub net_correction_min: f64,
    /// The observer's latitude was clamped in the hour-angle solve.
    pub latitude_clamped: bool,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

impl SunParams {
    /// Daylight duration in seconds.
    pub fn day_length_s(&self) -> f64 {
        jyoti_time::elapsed_seconds(self.sunset, self.sunrise)
    }

    /// Whether `t` lies between sunrise and sunset (inclusive).
    pub fn is_daytime(&self, t: NaiveDateTime) -> bool {
        self.sunrise <= t && t <= self.sunset
    }
}
