//! Mod-360 arithmetic on degree-valued angles.

use std::f64::consts::PI;

/// Arc-seconds in one degree.
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Arc-seconds in one radian (1 296 000 / 2π).
pub const ARCSEC_PER_RADIAN: f64 = 1_296_000.0 / (2.0 * PI);

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Sum any number of angles, normalized to [0, 360).
pub fn sum_degrees(angles: &[f64]) -> f64 {
    normalize_360(angles.iter().sum())
}

/// Directional difference `(a - b) mod 360`, in [0, 360).
///
/// Not symmetric: `diff_degrees(10.0, 20.0)` is 350, not 10.
pub fn diff_degrees(a: f64, b: f64) -> f64 {
    normalize_360(a - b)
}

/// Shortest arc between two directions given their directional difference.
///
/// `general` is a [`diff_degrees`] result; the return value lies in [0, 180].
pub fn nearest_separation(general: f64) -> f64 {
    if general < 180.0 {
        general
    } else {
        diff_degrees(360.0, general)
    }
}

/// 0-based quadrant of an angle (`floor(deg / 90)`), not normalized.
pub fn quadrant(deg: f64) -> f64 {
    (deg / 90.0).floor()
}

/// Restore the quadrant of an `atan` result against a reference angle.
///
/// `candidate` is known only up to a multiple of 90°; it is shifted by
/// whole quadrants so that it lands next to `reference`. The result is not
/// normalized, callers fold it back with [`sum_degrees`].
pub fn nearest_equivalent(reference: f64, candidate: f64) -> f64 {
    let n1 = quadrant(reference);
    let n2 = quadrant(candidate);
    if candidate < 0.0 {
        if reference > -candidate {
            candidate + ((n1 + 1.0) - n2) * 90.0
        } else if reference > 0.0 && reference < 90.0 && candidate.abs() < 90.0 {
            candidate + 180.0
        } else {
            candidate + ((n2 + 1.0) - n1) * 90.0
        }
    } else if reference > candidate {
        candidate + (n1 - n2) * 90.0
    } else {
        candidate - (n2 - n1) * 90.0
    }
}
