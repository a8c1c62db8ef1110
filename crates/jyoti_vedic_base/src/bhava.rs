//! House cusps and bhava spans.
//!
//! Cusps 1 and 10 are the lagna and culmination. Cusps 11, 12, 2, 3 come
//! either from the pole-elevation solve or, above the polar limit, from a
//! linear split of the lagna–culmination arc. Cusps 4–9 mirror 10–3.

use jyoti_math::{diff_degrees, nearest_separation, sum_degrees};

use crate::bhava_types::{BhavaSandhi, HouseCusps};
use crate::lagna::LagnaParams;

/// Half-turn branch threshold for the intermediate cusps, degrees.
const CUSP_BRANCH_LIMIT_DEG: f64 = 67.0;

/// RAMC offset and pole id for cusps 11, 12, 2, 3 (0-based index).
const INTERMEDIATE_CUSPS: [(usize, f64, f64); 4] =
    [(10, 30.0, 1.0), (11, 60.0, 2.0), (1, 120.0, 2.0), (2, 150.0, 1.0)];

/// One intermediate cusp by the pole-elevation method.
///
/// `sine` is `tan(lat)·tan(obliquity)`, `ramc_adder` the oblique-ascension
/// offset from RAMC, `pole_id` 1 or 2 (thirds of the pole height).
pub fn calculate_house(
    sine: f64,
    ramc_deg: f64,
    ramc_adder: f64,
    pole_id: f64,
    obliquity_rad: f64,
    precession_deg: f64,
    south: bool,
) -> f64 {
    let pole = sine.clamp(-1.0, 1.0).asin();
    let oblique = sum_degrees(&[ramc_deg, ramc_adder]);
    let elevation = ((1.0 / obliquity_rad.tan()) * (pole_id * pole / 3.0).sin()).atan();
    let s90 = diff_degrees(oblique, 90.0).to_radians();
    let mut cusp = (-1.0
        / ((elevation.tan() * obliquity_rad.sin() / s90.cos())
            + s90.tan() * obliquity_rad.cos()))
    .atan()
    .to_degrees();
    if nearest_separation(diff_degrees(oblique, cusp)) > CUSP_BRANCH_LIMIT_DEG {
        cusp = sum_degrees(&[cusp, 180.0]);
    }
    if south {
        cusp = sum_degrees(&[cusp, 180.0]);
    }
    diff_degrees(cusp, precession_deg)
}

/// All 12 cusps.
pub fn house_cusps(
    lagna: &LagnaParams,
    latitude_deg: f64,
    obliquity_rad: f64,
    precession_deg: f64,
) -> HouseCusps {
    let mut cusps = [0.0; 12];
    cusps[0] = lagna.ascendant_deg;
    cusps[9] = lagna.culmination_deg;

    let sine = latitude_deg.to_radians().tan() * obliquity_rad.tan();
    let polar = sine > 1.0;
    if polar {
        let step = diff_degrees(lagna.ascendant_deg, lagna.culmination_deg) / 3.0;
        cusps[10] = sum_degrees(&[cusps[9], step]);
        cusps[11] = sum_degrees(&[cusps[10], step]);
        let rising = diff_degrees(60.0, step);
        cusps[1] = sum_degrees(&[cusps[0], rising]);
        cusps[2] = sum_degrees(&[cusps[1], rising]);
    } else {
        for (idx, adder, pole_id) in INTERMEDIATE_CUSPS {
            cusps[idx] = calculate_house(
                sine,
                lagna.ramc_deg,
                adder,
                pole_id,
                obliquity_rad,
                precession_deg,
                lagna.south,
            );
        }
    }
    for i in 3..9 {
        cusps[i] = sum_degrees(&[cusps[(i + 6) % 12], 180.0]);
    }

    HouseCusps { cusps, polar }
}

/// Forward-arc midpoint from `from` to `to`.
fn midpoint(from: f64, to: f64) -> f64 {
    sum_degrees(&[from, diff_degrees(to, from) / 2.0])
}

/// Start and end of each bhava, at the midpoints between adjacent cusps.
pub fn bhava_sandhis(houses: &HouseCusps) -> [BhavaSandhi; 12] {
    let c = &houses.cusps;
    std::array::from_fn(|i| BhavaSandhi {
        start_deg: midpoint(c[(i + 11) % 12], c[i]),
        end_deg: midpoint(c[i], c[(i + 1) % 12]),
    })
}

/// 0-based bhava containing `longitude_deg`.
///
/// Returns `None` only for degenerate spans where every sandhi coincides.
pub fn bhava_of(longitude_deg: f64, sandhis: &[BhavaSandhi; 12]) -> Option<u8> {
    sandhis
        .iter()
        .position(|s| {
            diff_degrees(longitude_deg, s.start_deg) < diff_degrees(s.end_deg, s.start_deg)
        })
        .map(|i| i as u8)
}

/// Bhava of each longitude in a set.
pub fn bhava_positions<const N: usize>(
    longitudes: &[f64; N],
    houses: &HouseCusps,
) -> [Option<u8>; N] {
    let sandhis = bhava_sandhis(houses);
    longitudes.map(|lon| bhava_of(lon, &sandhis))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_houses(start: f64) -> HouseCusps {
        HouseCusps {
            cusps: std::array::from_fn(|i| sum_degrees(&[start, 30.0 * i as f64])),
            polar: false,
        }
    }

    #[test]
    fn sandhis_are_contiguous() {
        let s = bhava_sandhis(&equal_houses(297.76));
        for i in 0..12 {
            assert!((s[i].end_deg - s[(i + 1) % 12].start_deg).abs() < 1e-12);
        }
        assert!((s[0].start_deg - 282.76).abs() < 1e-9);
        assert!((s[0].end_deg - 312.76).abs() < 1e-9);
    }

    #[test]
    fn bhava_of_wraps_through_zero() {
        let houses = equal_houses(350.0);
        let s = bhava_sandhis(&houses);
        assert_eq!(bhava_of(350.0, &s), Some(0));
        assert_eq!(bhava_of(4.0, &s), Some(0));
        assert_eq!(bhava_of(5.0, &s), Some(1));
        assert_eq!(bhava_of(336.0, &s), Some(0));
        assert_eq!(bhava_of(334.0, &s), Some(11));
    }

    #[test]
    fn every_longitude_has_a_bhava() {
        let houses = equal_houses(123.4);
        let lons: [f64; 36] = std::array::from_fn(|i| i as f64 * 10.0 + 0.5);
        for b in bhava_positions(&lons, &houses) {
            assert!(b.is_some());
        }
    }

    #[test]
    fn polar_branch_splits_arc() {
        let lagna = LagnaParams {
            local_time_correction_deg: 0.0,
            ramc_deg: 237.2,
            ascendant_deg: 215.159_578_581_685_93,
            culmination_deg: 215.350_285_833_792_73,
            south: false,
        };
        let h = house_cusps(&lagna, 70.0, (23.0_f64 + 27.5 / 60.0).to_radians(), 24.06);
        assert!(h.polar);
        assert!((h.cusps[10] - 335.286_716_749_757_15).abs() < 1e-9, "{}", h.cusps[10]);
        assert!((h.cusps[1] - 155.223_147_665_721_5).abs() < 1e-9, "{}", h.cusps[1]);
    }
}
