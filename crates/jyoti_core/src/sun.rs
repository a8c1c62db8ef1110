//! Solar position model.
//!
//! mean longitude → apse → mean anomaly → equation of center → true
//! longitude → + precession → tropical longitude, followed by the horizon
//! quantities and the net correction that yields the corrected longitude.

use jyoti_config::EphemerisConfig;
use jyoti_math::{ARCSEC_PER_DEGREE, sum_degrees};
use jyoti_time::{
    civil_midnight, days_elapsed, shift_seconds, to_reference_time, to_true_local_time,
    years_elapsed,
};
use tracing::{debug, warn};

use crate::error::EphemerisError;
use crate::horizon::{charam, hour_angle, net_correction_min, pranam, rise_set_seconds};
use crate::kepler::{equation_of_center_arcsec, radius_vector, true_longitude, velocity_factor};
use crate::mean_motion::{apse_position, mean_anomaly, mean_longitude};
use crate::observation::Observation;
use crate::sun_types::SunParams;

/// Arc-minutes of rotation in one day.
const ARCMIN_PER_DAY: f64 = 360.0 * 60.0;

/// Heliocentric daily motion of the Sun in degrees.
pub fn solar_velocity_deg(config: &EphemerisConfig, mean_anomaly_deg: f64) -> f64 {
    let n = config.sun.daily_motion_arcsec;
    (n * velocity_factor(config.sun.eccentricity, mean_anomaly_deg) + 0.5) / ARCSEC_PER_DEGREE
}

/// Shift a true longitude by the net correction (arc-minutes) at the
/// body's daily velocity (degrees).
pub fn corrected_longitude(true_longitude_deg: f64, net_correction_min: f64, velocity_deg: f64) -> f64 {
    sum_degrees(&[
        true_longitude_deg,
        net_correction_min / ARCMIN_PER_DAY * velocity_deg,
    ])
}

pub(crate) fn compute_sun(
    config: &EphemerisConfig,
    obs: &Observation,
) -> Result<SunParams, EphemerisError> {
    obs.validate()?;
    let reference_time = to_reference_time(obs.civil, obs.meridian_offset_s, obs.longitude_dir)?;
    let local_time = to_true_local_time(reference_time, obs.longitude_deg, obs.longitude_dir)?;

    let years = years_elapsed(reference_time, config.epochs.reference);
    let days = days_elapsed(local_time, config.epochs.mean_sunrise);
    let precession = config.precession.at(years);

    let sun = &config.sun;
    let mean_long = mean_longitude(days, sun.sidereal_year_days, sun.mean_longitude_deg, false);
    let apse = apse_position(sun.apse_deg, sun.apse_rate_arcsec, years);
    let anomaly = mean_anomaly(apse, mean_long);
    let mandaphalam = equation_of_center_arcsec(sun.eccentricity, anomaly);
    let true_long = true_longitude(mean_long, mandaphalam);
    let tropical = sum_degrees(&[true_long, precession]);

    let velocity = solar_velocity_deg(config, anomaly);
    let radius = radius_vector(apse, tropical, sun.eccentricity, 1.0);

    let obliquity = config.obliquity_rad();
    let ha = hour_angle(obs.latitude_deg, tropical, obliquity);
    if ha.latitude_clamped {
        warn!(
            latitude = obs.latitude_deg,
            tropical_sun = tropical,
            "latitude beyond the rising limit, clamped in hour-angle solve"
        );
    }
    let charam_deg = charam(ha.deg);
    let pranam_deg = pranam(tropical, obliquity);

    let net_min = net_correction_min(charam_deg, mandaphalam, pranam_deg, obs.signed_longitude());
    let corrected = corrected_longitude(true_long, net_min, velocity);

    let (rise_s, set_s) =
        rise_set_seconds(tropical, mandaphalam, charam_deg, pranam_deg, obs.is_south());
    let midnight = civil_midnight(obs.civil)?;
    let sunrise = shift_seconds(midnight, rise_s)?;
    let sunset = shift_seconds(midnight, set_s)?;

    debug!(
        %reference_time,
        %local_time,
        true_longitude = corrected,
        tropical_longitude = tropical,
        %sunrise,
        %sunset,
        "sun"
    );

    Ok(SunParams {
        reference_time,
        local_time,
        years_since_epoch: years,
        days_since_epoch: days,
        precession_deg: precession,
        mean_longitude_deg: mean_long,
        true_longitude_deg: corrected,
        tropical_longitude_deg: tropical,
        apse_deg: apse,
        mean_anomaly_deg: anomaly,
        mandaphalam_arcsec: mandaphalam,
        helio_velocity_deg: velocity,
        radius_vector: radius,
        hour_angle_deg: ha.deg,
        charam_deg,
        pranam_deg,
        net_correction_min: net_min,
        latitude_clamped: ha.latitude_clamped,
        sunrise,
        sunset,
    })
}
