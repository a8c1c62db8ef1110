//! Reference-meridian and true-local-time conversion.

use chrono::{Duration, NaiveDateTime};

use crate::direction::EastWest;
use crate::error::TimeError;

/// Longitude of the reference (standard) meridian, degrees east.
pub const REFERENCE_MERIDIAN_DEG: f64 = 82.5;

/// Seconds of clock time per degree of rotation (86400 / 360).
pub const SECONDS_PER_DEGREE: f64 = 240.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Length of the tropical year used for elapsed-year counts.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242216;

/// Zone offset of the reference meridian from Greenwich, in seconds.
const REFERENCE_OFFSET_S: f64 = REFERENCE_MERIDIAN_DEG * SECONDS_PER_DEGREE;

/// Shift an instant by a fractional number of seconds (microsecond resolution).
pub fn shift_seconds(t: NaiveDateTime, seconds: f64) -> Result<NaiveDateTime, TimeError> {
    if !seconds.is_finite() {
        return Err(TimeError::NonFiniteShift);
    }
    let micros = (seconds * 1e6).round();
    if micros.abs() >= i64::MAX as f64 {
        return Err(TimeError::OutOfRange("shift too large"));
    }
    t.checked_add_signed(Duration::microseconds(micros as i64))
        .ok_or(TimeError::OutOfRange("shifted instant"))
}

/// Signed `a - b` in seconds.
pub fn elapsed_seconds(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    let d = a - b;
    match d.num_microseconds() {
        Some(us) => us as f64 * 1e-6,
        None => d.num_milliseconds() as f64 * 1e-3,
    }
}

/// Civil time at some zone offset → time at the reference meridian.
///
/// `meridian_offset_s` is the zone's offset from Greenwich as a magnitude in
/// seconds; `direction` gives its sign.
pub fn to_reference_time(
    civil: NaiveDateTime,
    meridian_offset_s: f64,
    direction: EastWest,
) -> Result<NaiveDateTime, TimeError> {
    if !meridian_offset_s.is_finite() || meridian_offset_s.abs() >= SECONDS_PER_DAY {
        return Err(TimeError::InvalidOffset(meridian_offset_s));
    }
    let offset = direction.signed(meridian_offset_s);
    shift_seconds(civil, REFERENCE_OFFSET_S - offset)
}

/// Reference-meridian time → true local mean time at `longitude_deg`.
pub fn to_true_local_time(
    reference: NaiveDateTime,
    longitude_deg: f64,
    direction: EastWest,
) -> Result<NaiveDateTime, TimeError> {
    let lon = direction.signed(longitude_deg);
    shift_seconds(reference, -(REFERENCE_MERIDIAN_DEG - lon) * SECONDS_PER_DEGREE)
}

/// Fractional tropical years from `epoch` to `t` (negative before the epoch).
pub fn years_elapsed(t: NaiveDateTime, epoch: NaiveDateTime) -> f64 {
    elapsed_seconds(t, epoch) / SECONDS_PER_DAY / TROPICAL_YEAR_DAYS
}

/// Fractional days from `epoch_sunrise` to `t`.
pub fn days_elapsed(t: NaiveDateTime, epoch_sunrise: NaiveDateTime) -> f64 {
    elapsed_seconds(t, epoch_sunrise) / SECONDS_PER_DAY
}

/// 00:00 on the civil date of `t`.
pub fn civil_midnight(t: NaiveDateTime) -> Result<NaiveDateTime, TimeError> {
    t.date()
        .and_hms_opt(0, 0, 0)
        .ok_or(TimeError::OutOfRange("midnight"))
}

/// 12:00 on the civil date of `t`.
pub fn civil_noon(t: NaiveDateTime) -> Result<NaiveDateTime, TimeError> {
    t.date()
        .and_hms_opt(12, 0, 0)
        .ok_or(TimeError::OutOfRange("noon"))
}
