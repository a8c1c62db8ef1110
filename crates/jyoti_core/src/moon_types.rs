//! Lunar parameter set.

/// Sidereal lunar longitudes at one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonParams {
    /// Mean longitude after the net correction and the three periodic terms.
    pub mean_longitude_deg: f64,
    /// Mean apse (perigee + 180°), before net correction.
    pub apse_deg: f64,
    pub mandaphalam_arcsec: f64,
    /// Apparent longitude on the ecliptic, final correction applied.
    pub true_longitude_deg: f64,
    /// Mean ascending node.
    pub rahu_deg: f64,
    /// Mean descending node, always `rahu + 180°`.
    pub ketu_deg: f64,
}
