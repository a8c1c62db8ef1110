//! Houses and almanac elements on top of the epicyclic ephemeris.
//!
//! This crate provides:
//! - Lagna (ascendant), RAMC and culmination
//! - The 12 house cusps, bhava spans, navamsa and whole-sign positions
//! - Thithi, yogam and karanam
//! - Rashi, nakshatra, Tamil month and 60-year cycle names

pub mod amsha;
pub mod bhava;
pub mod bhava_types;
pub mod error;
pub mod lagna;
pub mod nakshatra;
pub mod panchanga;
pub mod rashi;
pub mod samvatsara;
pub mod tamil_month;

pub use amsha::{navamsa_index, navamsa_positions, navamsa_rashi, rasi_positions};
pub use bhava::{bhava_of, bhava_positions, bhava_sandhis, calculate_house, house_cusps};
pub use bhava_types::{BhavaSandhi, HouseCusps};
pub use error::VedicError;
pub use lagna::{
    LONGITUDE_TIME_RATE_DEG, LagnaParams, ascendant_deg, compute_lagna, culmination_deg,
    local_time_correction_deg, ramc_deg,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraInfo, PADA_SPAN_DEG,
    nakshatra_from_longitude,
};
pub use panchanga::{
    ALL_KARANAMS, ALL_YOGAMS, Karanam, Paksha, Panchanga, THITHI_NAMES, ThithiInfo, Yogam,
    elongation_deg, karanam_from_elongation, panchanga, thithi_from_elongation, yogam_from_sum,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi, RashiInfo, rasi_index, rashi_from_longitude};
pub use samvatsara::{ALL_SAMVATSARAS, Samvatsara, samvatsara_from_year};
pub use tamil_month::{ALL_TAMIL_MONTHS, TamilMonth};
