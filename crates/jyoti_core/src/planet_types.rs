//! Planetary parameter sets.

use jyoti_config::Planet;

/// A body's heliocentric longitude, daily motion and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelioState {
    pub longitude_deg: f64,
    pub velocity_deg: f64,
    pub radius: f64,
}

/// Result of the Earth–Sun–planet triangle solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPosition {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    /// Geocentric daily motion, degrees (mod 360).
    pub velocity_deg: f64,
}

/// Everything derived for one planet at one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetParams {
    pub planet: Planet,
    /// Mean longitude after secular and net corrections.
    pub mean_longitude_deg: f64,
    pub apse_deg: f64,
    pub mean_anomaly_deg: f64,
    pub mandaphalam_arcsec: f64,
    pub helio_velocity_deg: f64,
    pub radius_vector: f64,
    /// Angular distance of the planet from its ascending node.
    pub node_distance_deg: f64,
    /// Heliocentric longitude reduced to the ecliptic.
    pub heliocentric_longitude_deg: f64,
    pub geo_velocity_deg: f64,
    /// Geocentric sidereal longitude.
    pub true_longitude_deg: f64,
    pub latitude_deg: f64,
}

/// All seven planets, indexed by [`Planet::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPositions {
    pub params: [PlanetParams; 7],
}

impl PlanetPositions {
    pub fn get(&self, planet: Planet) -> &PlanetParams {
        &self.params[planet.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanetParams> {
        self.params.iter()
    }

    /// Geocentric longitudes indexed by [`Planet::index`].
    pub fn longitudes(&self) -> [f64; 7] {
        self.params.map(|p| p.true_longitude_deg)
    }
}
