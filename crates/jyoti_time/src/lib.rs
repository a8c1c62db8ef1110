//! Civil-time handling for the traditional ephemeris.
//!
//! Input instants are civil clock readings (`chrono::NaiveDateTime`) at some
//! zone offset. They are first re-expressed at the 82.5°E reference meridian
//! (the "reference time"), then shifted to the observer's true local mean
//! time. Elapsed years and days since the model epochs are measured from
//! those two instants respectively.

pub mod direction;
pub mod error;
pub mod reference;

pub use direction::{EastWest, NorthSouth};
pub use error::TimeError;
pub use reference::{
    REFERENCE_MERIDIAN_DEG, SECONDS_PER_DAY, SECONDS_PER_DEGREE, TROPICAL_YEAR_DAYS, civil_midnight,
    civil_noon, days_elapsed, elapsed_seconds, shift_seconds, to_reference_time,
    to_true_local_time, years_elapsed,
};
