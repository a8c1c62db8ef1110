//! Epicyclic position models for the Sun, Moon, lunar nodes and planets.
//!
//! This crate provides:
//! - Mean-motion propagation and the equation-of-center (mandaphalam) series
//! - Solar longitude, heliocentric velocity, radius vector, sunrise/sunset
//! - Lunar longitude with evection, variation and the six-term final correction
//! - Heliocentric-to-geocentric conversion for the seven planets
//!
//! Every computation goes through an [`Ephemeris`], which owns a validated
//! immutable [`EphemerisConfig`](jyoti_config::EphemerisConfig).

pub mod engine;
pub mod error;
pub mod horizon;
pub mod kepler;
pub mod mean_motion;
pub mod moon;
pub mod moon_types;
pub mod observation;
pub mod planet;
pub mod planet_types;
pub mod sun;
pub mod sun_types;

pub use engine::Ephemeris;
pub use error::EphemerisError;
pub use horizon::{HourAngle, charam, hour_angle, net_correction_min, pranam, rise_set_seconds};
pub use kepler::{equation_of_center_arcsec, radius_vector, true_longitude, velocity_factor};
pub use mean_motion::{apse_position, inject_correction, mean_anomaly, mean_longitude};
pub use moon_types::MoonParams;
pub use observation::Observation;
pub use planet::{geocentric, jupiter_term_deg, saturn_term_deg};
pub use planet_types::{GeocentricPosition, HelioState, PlanetParams, PlanetPositions};
pub use sun_types::SunParams;

pub use jyoti_config::{ALL_PLANETS, EphemerisConfig, Planet};
pub use jyoti_time::{EastWest, NorthSouth};
