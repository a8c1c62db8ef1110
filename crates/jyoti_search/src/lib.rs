//! Calendar searches and full almanac evaluation.
//!
//! This crate provides:
//! - The Tamil solar-calendar date by a bounded search for the Sun's ingress
//! - Saka-era dates and the Kali year
//! - [`Almanac`], which bundles every derived quantity for one observation

pub mod almanac;
pub mod error;
pub mod saka;
pub mod tamil_calendar;
pub mod tamil_calendar_types;

pub use almanac::Almanac;
pub use error::SearchError;
pub use saka::{ALL_SAKA_MONTHS, SakaDate, SakaMonth, is_leap_year, kali_year, saka_date};
pub use tamil_calendar::tamil_date;
pub use tamil_calendar_types::{DayAdjustment, SearchStage, TamilCalendarConfig, TamilDate};
