//! Degrees-minutes-seconds conversion.

/// An angle split into whole degrees, whole minutes and fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Build a decimal angle from degrees, minutes and seconds, normalized to [0, 360).
pub fn dms_to_deg(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    crate::normalize_360(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Hundredths of an arc-second per degree and per arc-minute.
const CENTI_PER_DEGREE: u64 = 360_000;
const CENTI_PER_MINUTE: u64 = 6_000;

/// Split a decimal angle (normalized to [0, 360) first) into DMS.
///
/// Seconds are rounded to hundredths and carried into minutes and degrees,
/// so 10.9999999999 splits as 11°00'00.00".
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = crate::normalize_360(deg);
    let total = (d * CENTI_PER_DEGREE as f64).round() as u64 % (360 * CENTI_PER_DEGREE);
    let degrees = total / CENTI_PER_DEGREE;
    let minutes = total / CENTI_PER_MINUTE % 60;
    let centi = total % CENTI_PER_MINUTE;
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: centi as f64 / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traditional_constants() {
        assert!((dms_to_deg(22.0, 27.0, 44.0) - 22.462_222_222).abs() < 1e-8);
        assert!((dms_to_deg(257.0, 58.0, 26.0) - 257.973_888_889).abs() < 1e-8);
    }

    #[test]
    fn split_angle() {
        let d = deg_to_dms(88.375_277_777_8);
        assert_eq!(d.degrees, 88);
        assert_eq!(d.minutes, 22);
        assert!((d.seconds - 31.0).abs() < 1e-4);
    }

    #[test]
    fn split_negative_wraps() {
        let d = deg_to_dms(-0.5);
        assert_eq!(d.degrees, 359);
        assert_eq!(d.minutes, 30);
    }

    #[test]
    fn seconds_carry_into_minutes() {
        let d = deg_to_dms(10.999_999_999_9);
        assert_eq!((d.degrees, d.minutes), (11, 0));
        assert_eq!(d.seconds, 0.0);
        assert_eq!(d.to_string(), "11°00'00.00\"");

        let m = deg_to_dms(20.0 + 29.0 / 60.0 + 59.999 / 3600.0);
        assert_eq!((m.degrees, m.minutes), (20, 30));
        assert_eq!(m.to_string(), "20°30'00.00\"");
    }

    #[test]
    fn carry_wraps_full_circle() {
        let d = deg_to_dms(359.999_999_999);
        assert_eq!((d.degrees, d.minutes), (0, 0));
        assert_eq!(d.to_string(), "0°00'00.00\"");
    }

    #[test]
    fn display_format() {
        let s = deg_to_dms(10.5).to_string();
        assert_eq!(s, "10°30'00.00\"");
    }
}
