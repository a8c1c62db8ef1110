//! Full evaluation for the 2014-09-12 example.

use chrono::NaiveDate;
use jyoti_core::{ALL_PLANETS, EastWest, Ephemeris, NorthSouth, Observation, Planet};
use jyoti_search::{Almanac, SakaMonth, TamilCalendarConfig};
use jyoti_vedic_base::{Karanam, Nakshatra, Paksha, Rashi, TamilMonth, Yogam};

fn almanac() -> Almanac {
    let civil = NaiveDate::from_ymd_opt(2014, 9, 12)
        .and_then(|d| d.and_hms_opt(17, 30, 0))
        .expect("valid date");
    let obs = Observation::new(civil, 19_800.0, 78.2, EastWest::East, 11.66, NorthSouth::North);
    Almanac::compute(&Ephemeris::default(), &obs, &TamilCalendarConfig::default())
        .expect("almanac")
}

#[test]
fn positions_match_engine() {
    let a = almanac();
    assert!((a.sun.true_longitude_deg - 146.560_429_222_968_48).abs() < 1e-9);
    assert!((a.moon.true_longitude_deg - 25.710_187_525_354_016).abs() < 1e-9);
    assert!((a.houses.lagna() - 297.764_726_963_818_9).abs() < 1e-8);
    assert_eq!(a.planets.iter().count(), ALL_PLANETS.len());
}

#[test]
fn signs_and_mansion() {
    let a = almanac();
    assert_eq!(a.sun_rashi().rashi, Rashi::Simha);
    assert_eq!(a.moon_rashi().rashi, Rashi::Mesha);
    assert_eq!(a.moon_nakshatra().nakshatra, Nakshatra::Bharani);
    assert_eq!(a.planet_rashi(Planet::Jupiter).rashi, Rashi::Karka);
    assert_eq!(a.planet_rashi(Planet::Saturn).rashi, Rashi::Makara);
}

#[test]
fn panchanga_elements() {
    let a = almanac();
    assert_eq!(a.panchanga.thithi.index, 19);
    assert_eq!(a.panchanga.thithi.paksha, Paksha::Krishna);
    assert_eq!(a.panchanga.yogam, Yogam::Vyaghata);
    assert_eq!(a.panchanga.karanam, Karanam::Taitila);
}

#[test]
fn calendar_dates() {
    let a = almanac();
    assert_eq!(a.tamil_date.month, TamilMonth::Avani);
    assert_eq!(a.tamil_date.day, 28);
    assert_eq!(a.saka_date.month, SakaMonth::Bhadra);
    assert_eq!(a.saka_date.day, 21);
    assert_eq!(a.saka_date.year, 1936);
    assert_eq!(a.kali_year, 5116);
}

#[test]
fn lagna_sits_in_first_bhava() {
    let a = almanac();
    assert_eq!(a.bhava_of(a.houses.lagna()), Some(0));
    assert_eq!(a.bhava_of(a.houses.culmination()), Some(9));
    for planet in ALL_PLANETS {
        assert!(a.bhava_of(a.planets.get(planet).true_longitude_deg).is_some());
        assert!(a.planet_navamsa(planet) < 12);
    }
}
