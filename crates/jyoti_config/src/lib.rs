//! Immutable model configuration: epochs, solar/lunar constants and the
//! per-planet orbital element table.
//!
//! An [`EphemerisConfig`] is built once (its `Default` carries the
//! traditional values), optionally overridden from JSON, validated, and then
//! shared read-only by every computation.

pub mod config;
pub mod elements;
pub mod error;
pub mod planet;

pub use config::{Epochs, EphemerisConfig, LunarElements, PrecessionModel, SolarElements};
pub use elements::{OrbitalElements, PlanetTable};
pub use error::ConfigError;
pub use planet::{ALL_PLANETS, Planet, SecularTerm};
