//! Tamil calendar dates at 78.2°E 11.66°N, zone +05:30.
//!
//! Ingresses in 2014 under this model: Thai Jan 13 12:37, Maasi Feb 12
//! 01:34, Panguni Mar 13 22:38, Chithirai Apr 13 07:11, Avani Aug 16 05:59,
//! Margazhi Dec 15 08:18.

use chrono::{NaiveDate, NaiveDateTime};
use jyoti_core::{EastWest, Ephemeris, NorthSouth, Observation};
use jyoti_search::{
    DayAdjustment, SearchError, SearchStage, TamilCalendarConfig, TamilDate, tamil_date,
};
use jyoti_vedic_base::{Samvatsara, TamilMonth};

fn civil(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, 0))
        .expect("valid date")
}

fn observe(t: NaiveDateTime) -> Observation {
    Observation::new(t, 19_800.0, 78.2, EastWest::East, 11.66, NorthSouth::North)
}

fn date_at(t: NaiveDateTime) -> TamilDate {
    tamil_date(
        &Ephemeris::default(),
        &observe(t),
        &TamilCalendarConfig::default(),
    )
    .expect("tamil date")
}

fn check(t: NaiveDateTime, day: u32, month: TamilMonth, year: Samvatsara) {
    let d = date_at(t);
    assert_eq!((d.day, d.month, d.year), (day, month, year), "{t}");
}

#[test]
fn example_evening() {
    let d = date_at(civil(2014, 9, 12, 17, 30));
    assert_eq!(d.day, 28);
    assert_eq!(d.month, TamilMonth::Avani);
    assert_eq!(d.year, Samvatsara::Jaya);
    assert_eq!(d.year_index(), 27);
    assert_eq!(d.crossing, civil(2014, 8, 16, 5, 59));
    assert_eq!(d.adjustment, DayAdjustment::None);
}

#[test]
fn month_boundary_is_day_one() {
    check(civil(2014, 8, 16, 12, 0), 1, TamilMonth::Avani, Samvatsara::Jaya);
    check(civil(2014, 8, 16, 6, 30), 1, TamilMonth::Avani, Samvatsara::Jaya);
    check(civil(2014, 8, 17, 3, 0), 1, TamilMonth::Avani, Samvatsara::Jaya);
    check(civil(2014, 3, 14, 9, 0), 1, TamilMonth::Panguni, Samvatsara::Vijaya);
}

#[test]
fn last_day_of_previous_month() {
    check(civil(2014, 8, 15, 12, 0), 31, TamilMonth::Aadi, Samvatsara::Jaya);
}

#[test]
fn year_starts_with_chithirai() {
    check(civil(2014, 4, 14, 12, 0), 2, TamilMonth::Chithirai, Samvatsara::Jaya);
    check(civil(2014, 4, 20, 10, 0), 8, TamilMonth::Chithirai, Samvatsara::Jaya);
}

#[test]
fn thai_keeps_previous_cycle_year() {
    check(civil(2015, 1, 10, 10, 0), 27, TamilMonth::Margazhi, Samvatsara::Jaya);
    check(civil(2015, 1, 15, 12, 0), 2, TamilMonth::Thai, Samvatsara::Jaya);
}

#[test]
fn before_sunrise_on_first_day_takes_previous_date() {
    let d = date_at(civil(2014, 2, 12, 3, 0));
    assert_eq!((d.day, d.month, d.year), (30, TamilMonth::Thai, Samvatsara::Vijaya));
    assert_eq!(d.adjustment, DayAdjustment::SunriseRetry);
    check(civil(2014, 2, 11, 3, 0), 29, TamilMonth::Thai, Samvatsara::Vijaya);

    let d = date_at(civil(2014, 3, 14, 3, 0));
    assert_eq!((d.day, d.month), (30, TamilMonth::Maasi));
    assert_eq!(d.adjustment, DayAdjustment::SunriseRetry);
}

#[test]
fn ingress_after_sunset_starts_next_day() {
    let d = date_at(civil(2014, 3, 13, 23, 0));
    assert_eq!((d.day, d.month, d.year), (30, TamilMonth::Maasi, Samvatsara::Vijaya));
    assert_eq!(d.adjustment, DayAdjustment::SunsetRetry);
    check(civil(2014, 3, 12, 23, 0), 29, TamilMonth::Maasi, Samvatsara::Vijaya);
}

#[test]
fn day_search_is_bounded() {
    let config = TamilCalendarConfig {
        max_day_steps: 5,
        ..TamilCalendarConfig::default()
    };
    let err = tamil_date(
        &Ephemeris::default(),
        &observe(civil(2014, 9, 12, 17, 30)),
        &config,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SearchError::BoundaryNotFound {
            stage: SearchStage::DayStep,
            steps: 5
        }
    ));
    assert!(err.to_string().contains("calendar boundary not found"));
}

#[test]
fn minute_search_is_bounded() {
    let config = TamilCalendarConfig {
        max_minute_steps: 10,
        ..TamilCalendarConfig::default()
    };
    let err = tamil_date(
        &Ephemeris::default(),
        &observe(civil(2014, 9, 12, 17, 30)),
        &config,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SearchError::BoundaryNotFound {
            stage: SearchStage::MinuteStep,
            steps: 10
        }
    ));
}

#[test]
fn config_from_partial_json() {
    let config: TamilCalendarConfig =
        serde_json::from_str(r#"{ "fine_tuning": false }"#).expect("json");
    assert!(!config.fine_tuning);
    assert_eq!(config.max_day_steps, 366);
    assert_eq!(config.max_minute_steps, 1440);
}

#[test]
fn sunset_rule_holds_without_fine_tuning() {
    let config = TamilCalendarConfig {
        fine_tuning: false,
        ..TamilCalendarConfig::default()
    };
    let d = tamil_date(
        &Ephemeris::default(),
        &observe(civil(2014, 3, 13, 23, 0)),
        &config,
    )
    .expect("tamil date");
    assert_eq!(
        (d.day, d.month, d.year, d.adjustment),
        (30, TamilMonth::Maasi, Samvatsara::Vijaya, DayAdjustment::SunsetRetry)
    );
}

#[test]
fn untuned_dates_start_from_one() {
    let config = TamilCalendarConfig {
        fine_tuning: false,
        ..TamilCalendarConfig::default()
    };
    let eph = Ephemeris::default();
    for (d, h) in [(12, 23), (13, 3), (13, 21), (13, 23), (14, 3), (14, 9)] {
        let date = tamil_date(&eph, &observe(civil(2014, 3, d, h, 0)), &config)
            .expect("tamil date");
        assert!(date.day >= 1, "2014-03-{d} {h}:00 gave day {}", date.day);
    }
}
