//! Hour angle, charam, pranam and sunrise/sunset timing.

use std::f64::consts::{FRAC_PI_2, PI};

use jyoti_math::{ARCSEC_PER_DEGREE, diff_degrees, sum_degrees};
use jyoti_time::SECONDS_PER_DEGREE;

/// One ghatika (nazhigai) in seconds.
pub const GHATIKA_S: f64 = 24.0 * 60.0;

/// Hour angle at the horizon, and whether the latitude had to be clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAngle {
    pub deg: f64,
    /// Latitude exceeded the limit for this solar longitude and was clamped.
    pub latitude_clamped: bool,
}

/// Hour angle of the Sun at rising for a latitude magnitude and a tropical
/// solar longitude.
///
/// The latitude is clamped to the largest value for which the Sun still
/// rises (the arccos argument stays in [−1, 1]). At the equinoxes, where
/// `sin λ = 0`, the hour angle is exactly 90°.
pub fn hour_angle(latitude_deg: f64, tropical_sun_deg: f64, obliquity_rad: f64) -> HourAngle {
    let s = obliquity_rad.sin() * tropical_sun_deg.to_radians().sin();
    if s == 0.0 {
        return HourAngle {
            deg: 90.0,
            latitude_clamped: false,
        };
    }
    let cos_dec = (1.0 - s * s).sqrt();
    let limit = (cos_dec / s).abs().atan();
    let mut lat = latitude_deg.to_radians();
    let latitude_clamped = lat.abs() > limit;
    if latitude_clamped {
        lat = limit.copysign(lat);
    }
    let arg = (-lat.tan() * s / cos_dec).clamp(-1.0, 1.0);
    HourAngle {
        deg: arg.acos().to_degrees(),
        latitude_clamped,
    }
}

/// Ascensional difference: `|90° − hour angle|`.
pub fn charam(hour_angle_deg: f64) -> f64 {
    (90.0 - hour_angle_deg).abs()
}

/// Reduction to the equator for a tropical solar longitude, in degrees.
///
/// Magnitude from the half-angle formula; the sign is then forced negative
/// for longitudes in [0°, 90°) and [180°, 270°).
pub fn pranam(tropical_sun_deg: f64, obliquity_rad: f64) -> f64 {
    let t = tropical_sun_deg.to_radians();
    let half = (obliquity_rad / 2.0).sin();
    let magnitude = (2.0 * t.tan() * half * half / (1.0 + t.tan() * t.tan() * obliquity_rad.cos()))
        .atan()
        .abs();
    let negative = (0.0..FRAC_PI_2).contains(&t) || (PI..1.5 * PI).contains(&t);
    let p = if negative { -magnitude } else { magnitude };
    p.to_degrees()
}

/// Net correction in arc-minutes: `(charam + mandaphalam + pranam) − longitude`,
/// taken mod 360 before scaling.
pub fn net_correction_min(
    charam_deg: f64,
    mandaphalam_arcsec: f64,
    pranam_deg: f64,
    signed_longitude_deg: f64,
) -> f64 {
    let sum = sum_degrees(&[charam_deg, mandaphalam_arcsec / ARCSEC_PER_DEGREE, pranam_deg]);
    diff_degrees(sum, signed_longitude_deg) * 60.0
}

/// Sunrise and sunset as seconds after civil midnight.
///
/// Apparent noon is 6 h + 15 ghatikas offset by the pranam and mandaphalam
/// time equivalents. The half-day is 15 ghatikas ± the charam, the charam
/// counting negative in the northern winter half and the southern summer half.
pub fn rise_set_seconds(
    tropical_sun_deg: f64,
    mandaphalam_arcsec: f64,
    charam_deg: f64,
    pranam_deg: f64,
    south: bool,
) -> (f64, f64) {
    let net_deg = pranam_deg + mandaphalam_arcsec / ARCSEC_PER_DEGREE;
    let apparent_noon = net_deg * SECONDS_PER_DEGREE + 15.0 * GHATIKA_S + 6.0 * 3600.0;
    let short_day = if south {
        tropical_sun_deg <= 180.0
    } else {
        tropical_sun_deg > 180.0
    };
    let charam_deg = if short_day { -charam_deg } else { charam_deg };
    let half_day = charam_deg * SECONDS_PER_DEGREE + 15.0 * GHATIKA_S;
    (apparent_noon - half_day, apparent_noon + half_day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eps() -> f64 {
        (23.0_f64 + 27.5 / 60.0).to_radians()
    }

    #[test]
    fn equator_has_six_hour_semi_arc() {
        let h = hour_angle(0.0, 120.0, eps());
        assert!((h.deg - 90.0).abs() < 1e-12);
        assert!(!h.latitude_clamped);
    }

    #[test]
    fn equinox_is_degenerate_not_nan() {
        let h = hour_angle(60.0, 0.0, eps());
        assert_eq!(h.deg, 90.0);
        assert!((charam(h.deg)).abs() < 1e-12);
        let h = hour_angle(60.0, 180.0, eps());
        assert!(h.deg.is_finite());
    }

    #[test]
    fn northern_summer_day_longer() {
        // sun in the northern half: hour angle beyond 90° at northern latitudes
        let h = hour_angle(30.0, 90.0, eps());
        assert!(h.deg > 90.0, "ha = {}", h.deg);
        assert!(h.deg < 120.0);
    }

    #[test]
    fn polar_latitude_clamped() {
        let h = hour_angle(80.0, 90.0, eps());
        assert!(h.latitude_clamped);
        assert!((h.deg - 180.0).abs() < 1e-4, "ha = {}", h.deg);
    }

    #[test]
    fn negative_latitude_clamp_is_reported() {
        let h = hour_angle(-80.0, 90.0, eps());
        assert!(h.latitude_clamped);
        assert!(h.deg.abs() < 1e-4, "ha = {}", h.deg);
    }

    #[test]
    fn example_charam() {
        let h = hour_angle(11.66, 169.862_475_146_772_43, eps());
        assert!((charam(h.deg) - 0.830_519_809_165_807).abs() < 1e-9);
    }

    #[test]
    fn pranam_sign_by_quadrant() {
        assert!(pranam(45.0, eps()) < 0.0);
        assert!(pranam(135.0, eps()) > 0.0);
        assert!(pranam(225.0, eps()) < 0.0);
        assert!(pranam(315.0, eps()) > 0.0);
    }

    #[test]
    fn pranam_example_value() {
        let p = pranam(169.862_475_146_772_43, eps());
        assert!((p - 0.822_540_753_600_634_5).abs() < 1e-9, "p = {p}");
    }

    #[test]
    fn pranam_max_magnitude() {
        // largest near 46°, ~2.47°
        let p = pranam(46.0, eps()).abs();
        assert!(p > 2.3 && p < 2.6, "p = {p}");
    }

    #[test]
    fn net_correction_wraps_before_scaling() {
        let c = net_correction_min(1.0, 0.0, 0.0, 78.2);
        assert!((c - (360.0 - 77.2) * 60.0).abs() < 1e-9);
    }

    #[test]
    fn rise_set_symmetric_about_noon() {
        let (rise, set) = rise_set_seconds(169.86, -6375.82, 0.83, 0.82, false);
        let noon = (rise + set) / 2.0;
        let expected = (0.82 - 6375.82 / 3600.0) * 240.0 + 15.0 * GHATIKA_S + 21_600.0;
        assert!((noon - expected).abs() < 1e-6);
        assert!(set - rise > 12.0 * 3600.0);
    }

    #[test]
    fn rise_set_hemisphere_flip() {
        let (n_rise, n_set) = rise_set_seconds(200.0, 0.0, 2.0, 0.0, false);
        let (s_rise, s_set) = rise_set_seconds(200.0, 0.0, 2.0, 0.0, true);
        assert!(n_set - n_rise < 12.0 * 3600.0);
        assert!(s_set - s_rise > 12.0 * 3600.0);
    }
}
