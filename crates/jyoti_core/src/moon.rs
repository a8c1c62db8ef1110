//! Lunar position model.
//!
//! Mean longitude, apse and node from their own periods; the Sun's net
//! correction injected into the mean Moon, apse and Sun; annual variation,
//! evection and variation; equation of center; reduction to the ecliptic;
//! six-term final correction.

use std::f64::consts::PI;

use jyoti_config::EphemerisConfig;
use jyoti_math::{ARCSEC_PER_DEGREE, diff_degrees, nearest_equivalent, quadrant, sum_degrees};
use tracing::debug;

use crate::kepler::{equation_of_center_arcsec, true_longitude};
use crate::mean_motion::{inject_correction, mean_anomaly, mean_longitude};
use crate::moon_types::MoonParams;
use crate::sun_types::SunParams;

const EVECTION_ARCSEC: f64 = 4467.0;
const VARIATION_ARCSEC: f64 = 8580.0;

/// Annual variation in arc-minutes: −mandaphalam/16, mandaphalam being the
/// Sun's equation of center in arc-seconds.
pub fn annual_variation_min(sun_mandaphalam_arcsec: f64) -> f64 {
    -(sun_mandaphalam_arcsec / 60.0) / 16.0
}

/// Evection in arc-minutes.
pub fn evection_min(moon_deg: f64, sun_deg: f64, apse_deg: f64) -> f64 {
    let theta_deg = diff_degrees(sum_degrees(&[moon_deg, apse_deg]), sum_degrees(&[sun_deg, sun_deg]));
    let theta = theta_deg.to_radians();
    let mut angle = (-EVECTION_ARCSEC / (60.0 * theta.sin())).atan();
    if theta_deg < 180.0 {
        let q = quadrant(angle.to_degrees());
        if q == 0.0 || q == 2.0 {
            angle += PI;
        }
    }
    EVECTION_ARCSEC * (angle + theta).cos() / 60.0
}

/// Variation in arc-minutes; `cv_deg` is the fixed variation angle.
pub fn variation_min(moon_deg: f64, sun_deg: f64, cv_deg: f64) -> f64 {
    let theta = diff_degrees(moon_deg, sun_deg).to_radians();
    let cv = cv_deg.to_radians();
    -VARIATION_ARCSEC * theta.sin() * ((theta + cv) / 2.0).sin() * ((theta - cv) / 2.0).sin() / 60.0
}

/// Reduce an orbital longitude to the ecliptic through the node.
///
/// The `atan` result is restored against the nodal distance, then forced
/// back into the quadrant of the orbital longitude.
pub fn ecliptic_longitude(true_deg: f64, node_deg: f64, inclination_deg: f64) -> f64 {
    let nodal = diff_degrees(true_deg, node_deg);
    let reduced = (inclination_deg.to_radians().cos() * nodal.to_radians().tan())
        .atan()
        .to_degrees();
    let mut ecliptic = sum_degrees(&[nearest_equivalent(nodal, reduced), node_deg]);
    let q_true = quadrant(true_deg);
    let q_ecl = quadrant(ecliptic);
    if q_true != q_ecl {
        ecliptic = sum_degrees(&[ecliptic, (q_true - q_ecl) * 90.0]);
    }
    ecliptic
}

/// Six-term final correction, degrees.
pub fn final_correction_deg(
    sun_deg: f64,
    moon_deg: f64,
    sun_apse_deg: f64,
    moon_apse_deg: f64,
    rahu_deg: f64,
) -> f64 {
    let a = diff_degrees(moon_deg, sun_deg).to_radians();
    let b = diff_degrees(sun_apse_deg, sun_deg).to_radians();
    let c = diff_degrees(moon_apse_deg, moon_deg).to_radians();
    let d = diff_degrees(sun_deg, moon_apse_deg).to_radians();
    let e = diff_degrees(moon_deg, rahu_deg).to_radians();
    let f = diff_degrees(sun_deg, rahu_deg).to_radians();
    let arcsec = -155.0 * (2.0 * a + b).sin()
        + 198.0 * (a + b - d).sin()
        + 112.0 * (b - c).sin()
        + 73.0 * (b + c).sin()
        + 85.0 * (c + 2.0 * e).sin()
        - 81.0 * (2.0 * f).sin();
    arcsec / ARCSEC_PER_DEGREE
}

pub(crate) fn compute_moon(config: &EphemerisConfig, sun: &SunParams) -> MoonParams {
    let m = &config.moon;
    let days = sun.days_since_epoch;

    let mean_moon = mean_longitude(days, m.period_days, m.mean_longitude_deg, false);
    let mean_apse = mean_longitude(days, m.apse_period_days, m.apse_deg, false);
    let rahu = mean_longitude(days, m.node_period_days, m.node_deg, true);
    let ketu = sum_degrees(&[rahu, 180.0]);

    let net = sun.net_correction_min;
    let moon_c = inject_correction(mean_moon, net, m.moon_motion_arcmin);
    let apse_c = inject_correction(mean_apse, net, m.apse_motion_arcmin);
    let sun_c = inject_correction(sun.mean_longitude_deg, net, m.sun_motion_arcmin);

    let periodic_min = annual_variation_min(sun.mandaphalam_arcsec)
        + evection_min(moon_c, sun_c, apse_c)
        + variation_min(moon_c, sun_c, m.variation_angle_deg);
    let mean_long = sum_degrees(&[moon_c, periodic_min / 60.0]);

    let anomaly = mean_anomaly(apse_c, mean_long);
    let mandaphalam = equation_of_center_arcsec(m.eccentricity, anomaly);
    let orbital = true_longitude(mean_long, mandaphalam);

    let ecliptic = ecliptic_longitude(orbital, rahu, m.inclination_deg);
    let correction = final_correction_deg(sun_c, mean_long, sun.apse_deg, apse_c, rahu);
    let true_long = sum_degrees(&[ecliptic, correction]);

    debug!(true_longitude = true_long, rahu, ketu, "moon");

    MoonParams {
        mean_longitude_deg: mean_long,
        apse_deg: mean_apse,
        mandaphalam_arcsec: mandaphalam,
        true_longitude_deg: true_long,
        rahu_deg: rahu,
        ketu_deg: ketu,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annual_variation_sign() {
        assert!((annual_variation_min(-6375.82) - 6.641_479).abs() < 1e-5);
    }

    #[test]
    fn evection_bounded() {
        for m in (0..36).map(|i| f64::from(i) * 10.0) {
            let e = evection_min(m, 100.0, 250.0);
            assert!(e.abs() <= EVECTION_ARCSEC / 60.0 + 1e-9, "moon {m}: {e}");
        }
    }

    #[test]
    fn variation_vanishes_at_syzygy() {
        assert!(variation_min(100.0, 100.0, 88.375).abs() < 1e-12);
        assert!(variation_min(280.0, 100.0, 88.375).abs() < 1e-9);
    }

    #[test]
    fn ecliptic_reduction_small_and_same_quadrant() {
        for moon in [5.0, 80.0, 100.0, 170.0, 190.0, 260.0, 280.0, 355.0] {
            let e = ecliptic_longitude(moon, 176.7, 5.1467);
            assert_eq!(quadrant(e), quadrant(moon), "moon {moon} -> {e}");
        }
    }

    #[test]
    fn ecliptic_at_node_unchanged() {
        let e = ecliptic_longitude(176.7, 176.7, 5.1467);
        assert!((e - 176.7).abs() < 1e-9);
    }

    #[test]
    fn final_correction_bounded() {
        let c = final_correction_deg(147.0, 25.0, 79.0, 117.0, 176.0);
        assert!(c.abs() <= (155.0 + 198.0 + 112.0 + 73.0 + 85.0 + 81.0) / 3600.0);
    }
}
