//! Orbital element sets for the heliocentric planets.
//!
//! Angles are sidereal degrees at the epoch sunrise (1900-01-01 06:00 local).
//! The apse is the aphelion direction, matching the solar and lunar models
//! where the mean anomaly is measured as `apse - mean_longitude`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::planet::Planet;

/// One planet's mean elements and secular rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis in units of the Earth's.
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Sidereal period in days.
    pub period_days: f64,
    /// Apse drift, arc-seconds per year.
    pub apse_rate_arcsec: f64,
    /// Node regression magnitude, arc-seconds per year.
    pub node_rate_arcsec: f64,
    /// Mean daily motion in arc-minutes, used both as the net-correction
    /// scale and as the base rate of the heliocentric velocity series.
    pub nc: f64,
    pub mean_longitude_deg: f64,
    pub apse_deg: f64,
    pub node_deg: f64,
    pub inclination_deg: f64,
}

impl OrbitalElements {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            self.semi_major_axis,
            self.eccentricity,
            self.period_days,
            self.apse_rate_arcsec,
            self.node_rate_arcsec,
            self.nc,
            self.mean_longitude_deg,
            self.apse_deg,
            self.node_deg,
            self.inclination_deg,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("orbital elements must be finite"));
        }
        if self.semi_major_axis <= 0.0 {
            return Err(ConfigError::Invalid("semi-major axis must be positive"));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ConfigError::Invalid("eccentricity must be in [0, 1)"));
        }
        if self.period_days <= 0.0 {
            return Err(ConfigError::Invalid("period must be positive"));
        }
        if !(0.0..90.0).contains(&self.inclination_deg) {
            return Err(ConfigError::Invalid("inclination must be in [0, 90)"));
        }
        Ok(())
    }
}

/// Element sets for all seven planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetTable {
    pub mars: OrbitalElements,
    pub mercury: OrbitalElements,
    pub jupiter: OrbitalElements,
    pub venus: OrbitalElements,
    pub saturn: OrbitalElements,
    pub uranus: OrbitalElements,
    pub neptune: OrbitalElements,
}

impl PlanetTable {
    pub fn get(&self, planet: Planet) -> &OrbitalElements {
        match planet {
            Planet::Mars => &self.mars,
            Planet::Mercury => &self.mercury,
            Planet::Jupiter => &self.jupiter,
            Planet::Venus => &self.venus,
            Planet::Saturn => &self.saturn,
            Planet::Uranus => &self.uranus,
            Planet::Neptune => &self.neptune,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for p in Planet::all() {
            self.get(*p).validate()?;
        }
        Ok(())
    }
}

impl Default for PlanetTable {
    fn default() -> Self {
        Self {
            mars: OrbitalElements {
                semi_major_axis: 1.523679,
                eccentricity: 0.0934,
                period_days: 686.9796,
                apse_rate_arcsec: 16.01,
                node_rate_arcsec: 22.46,
                nc: 31.442,
                mean_longitude_deg: 271.6679,
                apse_deg: 131.7571,
                node_deg: 26.3238,
                inclination_deg: 1.8497,
            },
            mercury: OrbitalElements {
                semi_major_axis: 0.387098,
                eccentricity: 0.205632,
                period_days: 87.9691,
                apse_rate_arcsec: 5.76,
                node_rate_arcsec: 7.57,
                nc: 245.5408,
                mean_longitude_deg: 158.7860,
                apse_deg: 233.4377,
                node_deg: 24.6827,
                inclination_deg: 7.0050,
            },
            jupiter: OrbitalElements {
                semi_major_axis: 5.202603,
                eccentricity: 0.048495,
                period_days: 4332.589,
                apse_rate_arcsec: 7.73,
                node_rate_arcsec: 13.53,
                nc: 4.9855,
                mean_longitude_deg: 215.6490,
                apse_deg: 170.2575,
                node_deg: 76.9817,
                inclination_deg: 1.3033,
            },
            venus: OrbitalElements {
                semi_major_axis: 0.723330,
                eccentricity: 0.006772,
                period_days: 224.7008,
                apse_rate_arcsec: 0.30,
                node_rate_arcsec: 17.85,
                nc: 96.1278,
                mean_longitude_deg: 321.5065,
                apse_deg: 287.6982,
                node_deg: 53.3170,
                inclination_deg: 3.3947,
            },
            saturn: OrbitalElements {
                semi_major_axis: 9.554910,
                eccentricity: 0.055509,
                period_days: 10759.22,
                apse_rate_arcsec: 20.38,
                node_rate_arcsec: 18.67,
                nc: 2.0076,
                mean_longitude_deg: 244.1298,
                apse_deg: 248.6316,
                node_deg: 90.3261,
                inclination_deg: 2.4889,
            },
            uranus: OrbitalElements {
                semi_major_axis: 19.218446,
                eccentricity: 0.046296,
                period_days: 30685.4,
                apse_rate_arcsec: 3.24,
                node_rate_arcsec: 31.59,
                nc: 0.7039,
                mean_longitude_deg: 221.7378,
                apse_deg: 329.0568,
                node_deg: 51.0239,
                inclination_deg: 0.7732,
            },
            neptune: OrbitalElements {
                semi_major_axis: 30.110387,
                eccentricity: 0.008988,
                period_days: 60189.0,
                apse_rate_arcsec: 1.06,
                node_rate_arcsec: 10.60,
                nc: 0.3589,
                mean_longitude_deg: 62.0079,
                apse_deg: 204.2356,
                node_deg: 108.2199,
                inclination_deg: 1.7700,
            },
        }
    }
}
