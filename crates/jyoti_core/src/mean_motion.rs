//! Linear mean-motion propagation.

use jyoti_math::{diff_degrees, sum_degrees};

/// Mean longitude after `elapsed_days`, for a body with the given sidereal
/// period. `regressing` bodies (the lunar node) move backwards.
pub fn mean_longitude(
    elapsed_days: f64,
    period_days: f64,
    at_epoch_deg: f64,
    regressing: bool,
) -> f64 {
    let motion = elapsed_days / period_days * 360.0;
    if regressing {
        diff_degrees(at_epoch_deg, motion)
    } else {
        sum_degrees(&[at_epoch_deg, motion])
    }
}

/// Apse after `years` of secular drift at `rate_arcsec` per year.
pub fn apse_position(at_epoch_deg: f64, rate_arcsec: f64, years: f64) -> f64 {
    sum_degrees(&[at_epoch_deg, rate_arcsec * years / 3600.0])
}

/// Mean anomaly measured from the apse: `apse - mean_longitude`.
pub fn mean_anomaly(apse_deg: f64, mean_longitude_deg: f64) -> f64 {
    diff_degrees(apse_deg, mean_longitude_deg)
}

/// Inject a net correction into a mean longitude.
///
/// `rate` is a daily motion in arc-minutes and `correction` the net
/// correction in arc-minutes; their product is scaled by one day's worth of
/// arc-minutes (21600).
pub fn inject_correction(deg: f64, correction: f64, rate: f64) -> f64 {
    let arcmin = rate * correction / 21_600.0;
    sum_degrees(&[deg, arcmin / 60.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_period_returns_to_epoch() {
        let l = mean_longitude(365.256374, 365.256374, 257.97, false);
        assert!((l - 257.97).abs() < 1e-9, "l = {l}");
    }

    #[test]
    fn regressing_node_moves_backwards() {
        let l = mean_longitude(6793.39477 / 4.0, 6793.39477, 100.0, true);
        assert!((l - 10.0).abs() < 1e-9, "l = {l}");
    }

    #[test]
    fn negative_elapsed_days() {
        let l = mean_longitude(-27.32166 / 2.0, 27.32166, 90.0, false);
        assert!((l - 270.0).abs() < 1e-9, "l = {l}");
    }

    #[test]
    fn apse_drift() {
        let a = apse_position(78.0, 3600.0, 2.5);
        assert!((a - 80.5).abs() < 1e-12);
    }

    #[test]
    fn anomaly_is_directional() {
        assert!((mean_anomaly(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((mean_anomaly(350.0, 10.0) - 340.0).abs() < 1e-12);
    }

    #[test]
    fn correction_scales_with_rate() {
        // a full day's correction moves the body by its daily motion
        let l = inject_correction(100.0, 21_600.0, 60.0);
        assert!((l - 101.0).abs() < 1e-12, "l = {l}");
    }
}
