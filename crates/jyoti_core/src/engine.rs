//! Ephemeris engine: owns a validated configuration and evaluates bodies.

use jyoti_config::{ALL_PLANETS, EphemerisConfig, Planet};

use crate::error::EphemerisError;
use crate::moon::compute_moon;
use crate::moon_types::MoonParams;
use crate::observation::Observation;
use crate::planet::compute_planet;
use crate::planet_types::{PlanetParams, PlanetPositions};
use crate::sun::compute_sun;
use crate::sun_types::SunParams;

/// Entry point for every position computation.
///
/// The configuration is validated once at construction and never mutated,
/// so an `Ephemeris` can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Ephemeris {
    config: EphemerisConfig,
}

impl Ephemeris {
    /// Build an engine, rejecting an invalid configuration.
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Solar parameters for an observation.
    pub fn sun(&self, obs: &Observation) -> Result<SunParams, EphemerisError> {
        compute_sun(&self.config, obs)
    }

    /// Lunar parameters. Depends on the Sun computed for the same observation.
    pub fn moon(&self, sun: &SunParams) -> MoonParams {
        compute_moon(&self.config, sun)
    }

    /// One planet. Depends on the Sun and the Moon (Ketu feeds the net
    /// correction of the mean longitude).
    pub fn planet(&self, planet: Planet, sun: &SunParams, moon: &MoonParams) -> PlanetParams {
        compute_planet(&self.config, planet, sun, moon)
    }

    pub fn planets(&self, sun: &SunParams, moon: &MoonParams) -> PlanetPositions {
        PlanetPositions {
            params: ALL_PLANETS.map(|p| compute_planet(&self.config, p, sun, moon)),
        }
    }

    /// Corrected sidereal solar longitude only. Used by the calendar search.
    pub fn sun_longitude(&self, obs: &Observation) -> Result<f64, EphemerisError> {
        Ok(self.sun(obs)?.true_longitude_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_accepted() {
        assert!(Ephemeris::new(EphemerisConfig::default()).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = EphemerisConfig::default();
        config.sun.eccentricity = 1.5;
        assert!(matches!(
            Ephemeris::new(config),
            Err(EphemerisError::Config(_))
        ));
    }
}
