//! Equation of center (mandaphalam), velocity series and radius vector.
//!
//! The mean anomaly throughout is measured from the aphelion direction, so
//! a positive sine gives a positive correction.

use jyoti_math::{ARCSEC_PER_DEGREE, ARCSEC_PER_RADIAN, diff_degrees, sum_degrees};

/// Equation of center in arc-seconds for eccentricity `e` and mean anomaly
/// in degrees.
///
/// Truncated Kepler series, rounded by +0.5″. When the anomaly lies past
/// 180° the result is forced negative regardless of the series' own sign.
pub fn equation_of_center_arcsec(e: f64, mean_anomaly_deg: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    let series = e * m.sin() / 2.0 * (4.0 - 5.0 * e * m.cos())
        + e.powi(3) / 12.0 * (13.0 * (3.0 * m).sin() - 3.0 * m.sin());
    let secs = ARCSEC_PER_RADIAN * series + 0.5;
    if mean_anomaly_deg > 180.0 {
        -secs.abs()
    } else {
        secs
    }
}

/// Mean longitude plus an equation of center given in arc-seconds.
pub fn true_longitude(mean_longitude_deg: f64, correction_arcsec: f64) -> f64 {
    sum_degrees(&[mean_longitude_deg, correction_arcsec / ARCSEC_PER_DEGREE])
}

/// Dimensionless velocity factor multiplying a body's mean daily motion:
/// `1 − 2e cos M + 2.5e² cos 2M − e³(13 cos 3M − cos M)/4`.
pub fn velocity_factor(e: f64, mean_anomaly_deg: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    1.0 - 2.0 * e * m.cos() + 2.5 * e * e * (2.0 * m).cos()
        - e.powi(3) * (13.0 * (3.0 * m).cos() - m.cos()) / 4.0
}

/// Heliocentric distance `a(1 − e²)/(1 − e cos θ)`, θ = `apse − longitude`.
pub fn radius_vector(apse_deg: f64, longitude_deg: f64, e: f64, semi_major_axis: f64) -> f64 {
    let theta = diff_degrees(apse_deg, longitude_deg).to_radians();
    semi_major_axis * (1.0 - e * e) / (1.0 - e * theta.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH_E: f64 = 0.01675;

    #[test]
    fn zero_anomaly_is_half_arcsec() {
        assert!((equation_of_center_arcsec(EARTH_E, 0.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn quadrature_magnitude() {
        // ~2e radians at 90°
        let c = equation_of_center_arcsec(EARTH_E, 90.0);
        let expected = ARCSEC_PER_RADIAN * (2.0 * EARTH_E - EARTH_E.powi(3) * 16.0 / 12.0) + 0.5;
        assert!((c - expected).abs() < 1e-6, "c = {c}");
    }

    #[test]
    fn sign_follows_anomaly_half() {
        for m in [1.0, 45.0, 90.0, 135.0, 179.0] {
            assert!(equation_of_center_arcsec(0.2, m) > 0.0, "M = {m}");
        }
        for m in [181.0, 225.0, 270.0, 315.0, 359.9] {
            assert!(equation_of_center_arcsec(0.2, m) < 0.0, "M = {m}");
        }
    }

    #[test]
    fn sign_forced_even_when_series_positive() {
        // at 359.99999° the raw series is ≈ +0.5″ from the rounding term
        let c = equation_of_center_arcsec(EARTH_E, 359.999_999);
        assert!(c < 0.0 && c > -1.0, "c = {c}");
    }

    #[test]
    fn sun_example_value() {
        let c = equation_of_center_arcsec(EARTH_E, 291.559_317_753_7);
        assert!((c + 6375.821_936_8).abs() < 1e-3, "c = {c}");
    }

    #[test]
    fn true_longitude_wraps() {
        assert!((true_longitude(359.5, 3600.0) - 0.5).abs() < 1e-12);
        assert!((true_longitude(0.5, -3600.0) - 359.5).abs() < 1e-12);
    }

    #[test]
    fn velocity_extremes() {
        // fastest at perihelion (anomaly 180° from the aphelion)
        assert!(velocity_factor(EARTH_E, 180.0) > 1.0);
        assert!(velocity_factor(EARTH_E, 0.0) < 1.0);
    }

    #[test]
    fn radius_at_apsides() {
        let e = 0.0934;
        let a = 1.523679;
        let aphelion = radius_vector(100.0, 100.0, e, a);
        let perihelion = radius_vector(100.0, 280.0, e, a);
        assert!((aphelion - a * (1.0 + e)).abs() < 1e-12);
        assert!((perihelion - a * (1.0 - e)).abs() < 1e-12);
    }
}
