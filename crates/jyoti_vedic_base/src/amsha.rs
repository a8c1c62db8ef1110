//! Navamsa (D9) and whole-sign (D1) sub-divisions.

use jyoti_math::normalize_360;

use crate::rashi::{RASHI_SPAN_DEG, Rashi, rasi_index};

/// Arc-minutes in one navamsa (3°20′).
const NAVAMSA_SPAN_ARCMIN: f64 = 200.0;

/// Navamsa sign index of a longitude.
///
/// `(rasi · 9 + floor(deg_in_rasi · 60 / 200)) mod 12`, which starts each
/// sign's nine parts from the movable sign of its element.
pub fn navamsa_index(longitude_deg: f64) -> u8 {
    let lon = normalize_360(longitude_deg);
    let sign = u32::from(rasi_index(lon));
    let within = lon - f64::from(sign) * RASHI_SPAN_DEG;
    let part = ((within * 60.0 / NAVAMSA_SPAN_ARCMIN).floor() as u32).min(8);
    ((sign * 9 + part) % 12) as u8
}

pub fn navamsa_rashi(longitude_deg: f64) -> Rashi {
    Rashi::from_index(navamsa_index(longitude_deg))
}

/// Navamsa indices for a set of longitudes.
pub fn navamsa_positions<const N: usize>(longitudes: &[f64; N]) -> [u8; N] {
    longitudes.map(navamsa_index)
}

/// Whole-sign indices for a set of longitudes.
pub fn rasi_positions<const N: usize>(longitudes: &[f64; N]) -> [u8; N] {
    longitudes.map(rasi_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesha_starts_at_mesha() {
        assert_eq!(navamsa_index(0.0), 0);
        assert_eq!(navamsa_index(3.4), 1);
        assert_eq!(navamsa_index(29.9), 8);
    }

    #[test]
    fn vrishabha_starts_at_makara() {
        assert_eq!(navamsa_rashi(30.0), Rashi::Makara);
        assert_eq!(navamsa_rashi(59.9), Rashi::Kanya);
    }

    #[test]
    fn meena_ends_at_meena() {
        assert_eq!(navamsa_rashi(359.9), Rashi::Meena);
    }

    #[test]
    fn batch_helpers() {
        let lons = [0.0, 146.56, 297.76];
        assert_eq!(rasi_positions(&lons), [0, 4, 9]);
        assert_eq!(navamsa_positions(&lons), [0, 7, 5]);
    }
}
