//! One full evaluation: positions, houses, almanac elements and dates.

use jyoti_core::{Ephemeris, MoonParams, Observation, Planet, PlanetPositions, SunParams};
use jyoti_vedic_base::{
    BhavaSandhi, HouseCusps, LagnaParams, NakshatraInfo, Panchanga, RashiInfo, bhava_of,
    bhava_sandhis, compute_lagna, house_cusps, nakshatra_from_longitude, navamsa_index, panchanga,
    rashi_from_longitude,
};
use tracing::debug;

use crate::error::SearchError;
use crate::saka::{SakaDate, saka_date};
use crate::tamil_calendar::tamil_date;
use crate::tamil_calendar_types::{TamilCalendarConfig, TamilDate};

/// Everything derived for one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Almanac {
    pub observation: Observation,
    pub sun: SunParams,
    pub moon: MoonParams,
    pub lagna: LagnaParams,
    pub houses: HouseCusps,
    pub sandhis: [BhavaSandhi; 12],
    pub planets: PlanetPositions,
    pub panchanga: Panchanga,
    pub tamil_date: TamilDate,
    pub saka_date: SakaDate,
    pub kali_year: i32,
}

impl Almanac {
    pub fn compute(
        eph: &Ephemeris,
        obs: &Observation,
        calendar: &TamilCalendarConfig,
    ) -> Result<Self, SearchError> {
        let sun = eph.sun(obs)?;
        let moon = eph.moon(&sun);
        let planets = eph.planets(&sun, &moon);
        let lagna = compute_lagna(eph.config(), obs, &sun)?;
        let houses = house_cusps(
            &lagna,
            obs.latitude_deg,
            eph.config().obliquity_rad(),
            sun.precession_deg,
        );
        let sandhis = bhava_sandhis(&houses);
        let elements = panchanga(sun.true_longitude_deg, moon.true_longitude_deg);
        let tamil = tamil_date(eph, obs, calendar)?;
        let saka = saka_date(obs.civil.date());
        debug!(tamil = %tamil, saka = %saka, "almanac");

        Ok(Self {
            observation: *obs,
            sun,
            moon,
            lagna,
            houses,
            sandhis,
            planets,
            panchanga: elements,
            tamil_date: tamil,
            saka_date: saka,
            kali_year: saka.kali_year(),
        })
    }

    pub fn sun_rashi(&self) -> RashiInfo {
        rashi_from_longitude(self.sun.true_longitude_deg)
    }

    pub fn moon_rashi(&self) -> RashiInfo {
        rashi_from_longitude(self.moon.true_longitude_deg)
    }

    pub fn moon_nakshatra(&self) -> NakshatraInfo {
        nakshatra_from_longitude(self.moon.true_longitude_deg)
    }

    pub fn planet_rashi(&self, planet: Planet) -> RashiInfo {
        rashi_from_longitude(self.planets.get(planet).true_longitude_deg)
    }

    /// 0-based bhava of a longitude under this almanac's houses.
    pub fn bhava_of(&self, longitude_deg: f64) -> Option<u8> {
        bhava_of(longitude_deg, &self.sandhis)
    }

    /// Navamsa sign index of a planet.
    pub fn planet_navamsa(&self, planet: Planet) -> u8 {
        navamsa_index(self.planets.get(planet).true_longitude_deg)
    }
}
