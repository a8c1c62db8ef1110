//! Rashi (zodiac sign) of a sidereal longitude.
//!
//! Twelve equal signs of 30 degrees starting from Mesha at 0 degrees.

use jyoti_math::{Dms, deg_to_dms, normalize_360};

/// Width of one sign in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis starting from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Tamil name.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesham",
            Self::Vrishabha => "Rishabam",
            Self::Mithuna => "Mithunam",
            Self::Karka => "Kadagam",
            Self::Simha => "Simmam",
            Self::Kanya => "Kanni",
            Self::Tula => "Thulaam",
            Self::Vrischika => "Viruchigam",
            Self::Dhanu => "Dhanusu",
            Self::Makara => "Magaram",
            Self::Kumbha => "Kumbam",
            Self::Meena => "Meenam",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }
}

/// Sign position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the sign as DMS.
    pub dms: Dms,
    /// Decimal degrees within the sign, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Whole-sign index of a longitude, `floor(lon / 30)`.
pub fn rasi_index(longitude_deg: f64) -> u8 {
    // 359.999... can round to exactly 12 after normalization
    ((normalize_360(longitude_deg) / RASHI_SPAN_DEG).floor() as u8).min(11)
}

/// Determine the rashi of a sidereal longitude.
pub fn rashi_from_longitude(longitude_deg: f64) -> RashiInfo {
    let lon = normalize_360(longitude_deg);
    let rashi_index = rasi_index(lon);
    let degrees_in_rashi = lon - f64::from(rashi_index) * RASHI_SPAN_DEG;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}
