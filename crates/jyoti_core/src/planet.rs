//! Planetary position model.
//!
//! Heliocentric: mean longitude (with the Jupiter/Saturn secular terms),
//! net-correction injection, equation of center, radius vector, reduction
//! to the ecliptic. Geocentric: solve the Earth–Sun–planet triangle, with a
//! separate branch rule for the two inferior planets.

use jyoti_config::{EphemerisConfig, Planet, SecularTerm};
use jyoti_math::{diff_degrees, nearest_equivalent, sum_degrees};
use jyoti_time::years_elapsed;
use tracing::debug;

use crate::kepler::{equation_of_center_arcsec, radius_vector, true_longitude, velocity_factor};
use crate::mean_motion::{apse_position, inject_correction, mean_anomaly, mean_longitude};
use crate::moon_types::MoonParams;
use crate::planet_types::{GeocentricPosition, HelioState, PlanetParams};
use crate::sun_types::SunParams;

/// Degrees of argument per year shared by both secular terms.
const GREAT_INEQUALITY_RATE: f64 = 0.4074926;

/// Tolerance on the inferior-planet triangle angle sum, degrees.
const TRIANGLE_TOLERANCE_DEG: f64 = 2.0;

/// Jupiter's secular correction in degrees, `t` years after the secular base.
pub fn jupiter_term_deg(t: f64) -> f64 {
    let h = (18.129 * (t - 241.75) - (41.0 + 11.0 / 60.0)).to_radians();
    let arcmin = 20.8 * (t * GREAT_INEQUALITY_RATE).to_radians().sin() - 1.3783 * h.sin()
        + 3.4050 * (2.0 * h).sin()
        + 0.2830 * (3.0 * h).sin();
    arcmin / 60.0
}

/// Saturn's secular correction in degrees, `t` years after the secular base.
pub fn saturn_term_deg(t: f64) -> f64 {
    let x1 = (168.48 - 5.8945 * t).to_radians();
    let x2 = (243.15 - 11.794 * t).to_radians();
    let arcmin = -48.7 * (t * GREAT_INEQUALITY_RATE).to_radians().sin()
        + 7.0 * x1.sin()
        + 10.85 * x2.sin();
    arcmin / 60.0
}

fn secular_term_deg(term: SecularTerm, t: f64) -> f64 {
    match term {
        SecularTerm::Jupiter => jupiter_term_deg(t),
        SecularTerm::Saturn => saturn_term_deg(t),
    }
}

/// Convert a heliocentric ecliptic state to geocentric.
///
/// `node_distance_deg` is the planet's distance from its ascending node,
/// `inclination_deg` its orbital inclination. The Sun's state is its
/// geocentric longitude, daily motion and distance.
pub fn geocentric(
    planet: &HelioState,
    sun: &HelioState,
    inclination_deg: f64,
    node_distance_deg: f64,
    inferior: bool,
) -> GeocentricPosition {
    let inc = inclination_deg.to_radians();
    let node = node_distance_deg.to_radians();
    let sin_lat = inc.sin() * node.sin();
    let sm = planet.radius * sin_lat.asin().cos();
    let se = sun.radius;

    let earth_from_sun = sum_degrees(&[sun.longitude_deg, 180.0]);
    let mse_deg = diff_degrees(planet.longitude_deg, earth_from_sun);
    let mse = mse_deg.to_radians();
    let em = (sm * sm + se * se - 2.0 * sm * se * mse.cos()).sqrt();

    let mut sme_deg = ((se / em) * mse.sin()).clamp(-1.0, 1.0).asin().to_degrees();
    if inferior {
        let t_deg = if mse_deg > 180.0 {
            diff_degrees(360.0, mse_deg)
        } else {
            mse_deg
        };
        let mes_deg = (sm * t_deg.to_radians().sin() / em)
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees();
        let angle_sum = t_deg.abs() + sme_deg.abs() + mes_deg.abs();
        if (angle_sum - 180.0).abs() > TRIANGLE_TOLERANCE_DEG {
            sme_deg = if sme_deg > 0.0 {
                diff_degrees(180.0, sme_deg)
            } else {
                diff_degrees(-180.0, sme_deg)
            };
        }
    } else if sme_deg > 90.0 {
        sme_deg = diff_degrees(180.0, sme_deg);
    }
    let sme = sme_deg.to_radians();

    let longitude = sum_degrees(&[planet.longitude_deg, sme_deg]);
    let latitude = ((planet.radius / em) * sin_lat.sin()).atan().to_degrees();

    let relative_velocity = diff_degrees(planet.velocity_deg, sun.velocity_deg);
    let adder = ((se / em) * (mse.cos() / sme.cos())
        - (sm * se / em.powi(3)) * mse.sin().powi(2) / sme.cos())
        * relative_velocity
        / 1.1;
    let velocity = sum_degrees(&[planet.velocity_deg, adder]);

    GeocentricPosition {
        longitude_deg: longitude,
        latitude_deg: latitude,
        velocity_deg: velocity,
    }
}

pub(crate) fn compute_planet(
    config: &EphemerisConfig,
    planet: Planet,
    sun: &SunParams,
    moon: &MoonParams,
) -> PlanetParams {
    let el = config.planets.get(planet);
    let years = sun.years_since_epoch;

    let mut mean_long = mean_longitude(
        sun.days_since_epoch,
        el.period_days,
        el.mean_longitude_deg,
        false,
    );
    if let Some(term) = planet.secular_term() {
        let t = years_elapsed(sun.reference_time, config.epochs.secular_base);
        mean_long += secular_term_deg(term, t);
    }
    // Ketu's longitude is the rate operand here, as in the traditional tables.
    let mean_long = inject_correction(mean_long, el.nc, moon.ketu_deg);

    let apse = apse_position(el.apse_deg, el.apse_rate_arcsec, years);
    let anomaly = mean_anomaly(apse, mean_long);
    let mandaphalam = equation_of_center_arcsec(el.eccentricity, anomaly);
    let orbital = true_longitude(mean_long, mandaphalam);
    let helio_velocity = el.nc * velocity_factor(el.eccentricity, anomaly) / 60.0;
    let radius = radius_vector(apse, orbital, el.eccentricity, el.semi_major_axis);

    let node_motion = (el.node_rate_arcsec * years + 0.5).abs() / 3600.0;
    let node = diff_degrees(el.node_deg, node_motion);
    let node_distance = diff_degrees(orbital, node);
    let reduced = (el.inclination_deg.to_radians().cos() * node_distance.to_radians().tan())
        .atan()
        .to_degrees();
    let helio_long = sum_degrees(&[node, nearest_equivalent(node_distance, reduced)]);

    let geo = geocentric(
        &HelioState {
            longitude_deg: helio_long,
            velocity_deg: helio_velocity,
            radius,
        },
        &HelioState {
            longitude_deg: sun.true_longitude_deg,
            velocity_deg: sun.helio_velocity_deg,
            radius: sun.radius_vector,
        },
        el.inclination_deg,
        node_distance,
        planet.is_inferior(),
    );

    debug!(
        planet = planet.name(),
        heliocentric = helio_long,
        geocentric = geo.longitude_deg,
        latitude = geo.latitude_deg,
        "planet"
    );

    PlanetParams {
        planet,
        mean_longitude_deg: mean_long,
        apse_deg: apse,
        mean_anomaly_deg: anomaly,
        mandaphalam_arcsec: mandaphalam,
        helio_velocity_deg: helio_velocity,
        radius_vector: radius,
        node_distance_deg: node_distance,
        heliocentric_longitude_deg: helio_long,
        geo_velocity_deg: geo.velocity_deg,
        true_longitude_deg: geo.longitude_deg,
        latitude_deg: geo.latitude_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun_state() -> HelioState {
        HelioState {
            longitude_deg: 146.56,
            velocity_deg: 0.973,
            radius: 1.0,
        }
    }

    #[test]
    fn superior_at_opposition_matches_heliocentric() {
        // Earth between Sun and planet: geocentric = heliocentric
        let planet = HelioState {
            longitude_deg: 326.56,
            velocity_deg: 0.08,
            radius: 5.2,
        };
        let g = geocentric(&planet, &sun_state(), 0.0, 0.0, false);
        assert!((g.longitude_deg - 326.56).abs() < 1e-9, "{}", g.longitude_deg);
    }

    #[test]
    fn superior_at_conjunction_matches_heliocentric() {
        let planet = HelioState {
            longitude_deg: 146.56,
            velocity_deg: 0.08,
            radius: 5.2,
        };
        let g = geocentric(&planet, &sun_state(), 0.0, 0.0, false);
        assert!((g.longitude_deg - 146.56).abs() < 1e-9, "{}", g.longitude_deg);
    }

    #[test]
    fn zero_inclination_has_zero_latitude() {
        let planet = HelioState {
            longitude_deg: 40.0,
            velocity_deg: 0.5,
            radius: 1.5,
        };
        let g = geocentric(&planet, &sun_state(), 0.0, 73.0, false);
        assert!(g.latitude_deg.abs() < 1e-12);
    }

    #[test]
    fn secular_terms_are_small() {
        for t in [0.0, 100.0, 341.0, 456.7, 600.0] {
            assert!(jupiter_term_deg(t).abs() < 0.5, "t = {t}");
            assert!(saturn_term_deg(t).abs() < 1.2, "t = {t}");
        }
    }

    fn at(longitude_deg: f64, radius: f64) -> HelioState {
        HelioState {
            longitude_deg,
            velocity_deg: 1.6,
            radius,
        }
    }

    fn sun_at(longitude_deg: f64) -> HelioState {
        HelioState {
            longitude_deg,
            velocity_deg: 0.9856,
            radius: 1.0,
        }
    }

    #[test]
    fn inferior_conjunction_places_planet_with_sun() {
        let inferior = geocentric(&at(100.0, 0.72), &sun_at(280.0), 0.0, 0.0, true);
        let superior = geocentric(&at(100.0, 0.72), &sun_at(280.0), 0.0, 0.0, false);
        assert!((inferior.longitude_deg - 280.0).abs() < 1e-9, "{}", inferior.longitude_deg);
        assert!((superior.longitude_deg - 100.0).abs() < 1e-9);
    }

    #[test]
    fn inferior_branch_reflects_elongation() {
        let inferior = geocentric(&at(10.0, 0.39), &sun_at(200.0), 0.0, 0.0, true);
        let superior = geocentric(&at(10.0, 0.39), &sun_at(200.0), 0.0, 0.0, false);
        assert!((inferior.longitude_deg - 206.27463688364247).abs() < 1e-9);
        assert!((superior.longitude_deg - 353.7253631163575).abs() < 1e-9);
    }

    #[test]
    fn branches_agree_when_triangle_closes() {
        let inferior = geocentric(&at(150.0, 0.72), &sun_at(100.0), 0.0, 0.0, true);
        let superior = geocentric(&at(150.0, 0.72), &sun_at(100.0), 0.0, 0.0, false);
        assert!((inferior.longitude_deg - 120.65897141154122).abs() < 1e-9);
        assert!((inferior.longitude_deg - superior.longitude_deg).abs() < 1e-12);
        assert!((inferior.velocity_deg - 1.2656957807790281).abs() < 1e-9);
    }
}
