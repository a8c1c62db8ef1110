//! Tamil solar-calendar date by searching for the Sun's sign ingress.
//!
//! The month is the Sun's current sign. The search walks back whole days
//! until the Sun is behind the sign boundary, counting days, then walks
//! forward a minute at a time until it reaches the boundary, uncounting
//! each midnight passed. An ingress after sunset starts the month on the
//! next day. With fine tuning, a day also starts at sunrise. When either
//! rule leaves the count at zero the date is taken from the previous civil
//! day in one extra pass without fine tuning.

use chrono::{Datelike, Duration, NaiveDateTime};
use jyoti_core::{Ephemeris, Observation, SunParams};
use jyoti_math::diff_degrees;
use jyoti_vedic_base::{RASHI_SPAN_DEG, TamilMonth, rasi_index, samvatsara_from_year};
use tracing::{debug, trace, warn};

use crate::error::SearchError;
use crate::tamil_calendar_types::{DayAdjustment, SearchStage, TamilCalendarConfig, TamilDate};

/// Offset applied to a daytime instant before reading the month.
const DAYTIME_NUDGE_MINUTES: i64 = 5;

/// Gap beyond which the Sun is taken to be just behind the boundary.
const WRAP_LIMIT_DEG: f64 = 330.0;

/// Sun's angular lead over `target`, in (−30, 330].
fn signed_gap(sun_deg: f64, target_deg: f64) -> f64 {
    let d = diff_degrees(sun_deg, target_deg);
    if d > WRAP_LIMIT_DEG { d - 360.0 } else { d }
}

fn step(t: NaiveDateTime, by: Duration) -> Result<NaiveDateTime, SearchError> {
    t.checked_add_signed(by)
        .ok_or(SearchError::Time(jyoti_time::TimeError::OutOfRange(
            "calendar search left the supported range",
        )))
}

/// Day count and ingress instant from one pass of the two loops.
struct Pass {
    month: u8,
    day: i64,
    crossing: NaiveDateTime,
}

fn search_pass(
    eph: &Ephemeris,
    obs: &Observation,
    at_orig: &SunParams,
    config: &TamilCalendarConfig,
) -> Result<Pass, SearchError> {
    let mut cursor = obs.civil;
    let mut sun = *at_orig;
    if sun.is_daytime(cursor) {
        cursor = step(cursor, Duration::minutes(DAYTIME_NUDGE_MINUTES))?;
        sun = eph.sun(&obs.at(cursor))?;
    }

    let month = rasi_index(sun.true_longitude_deg);
    let target = f64::from(month) * RASHI_SPAN_DEG;
    let mut day: i64 = 1;

    let mut steps = 0;
    while signed_gap(sun.true_longitude_deg, target) > 0.0 {
        if steps == config.max_day_steps {
            warn!(%cursor, target, steps, "day-step search exhausted");
            return Err(SearchError::BoundaryNotFound {
                stage: SearchStage::DayStep,
                steps,
            });
        }
        cursor = step(cursor, -Duration::days(1))?;
        day += 1;
        steps += 1;
        sun = eph.sun(&obs.at(cursor))?;
        trace!(%cursor, sun = sun.true_longitude_deg, day, "day step");
    }

    let mut steps = 0;
    while signed_gap(sun.true_longitude_deg, target) < 0.0 {
        if steps == config.max_minute_steps {
            warn!(%cursor, target, steps, "minute-step search exhausted");
            return Err(SearchError::BoundaryNotFound {
                stage: SearchStage::MinuteStep,
                steps,
            });
        }
        let previous = cursor;
        cursor = step(cursor, Duration::minutes(1))?;
        steps += 1;
        if previous.date() != cursor.date() {
            day -= 1;
        }
        sun = eph.sun(&obs.at(cursor))?;
    }

    if cursor > sun.sunset {
        day -= 1;
    }
    debug!(month, day, crossing = %cursor, "ingress found");
    Ok(Pass {
        month,
        day,
        crossing: cursor,
    })
}

fn cycle_year(civil: NaiveDateTime, month: u8) -> jyoti_vedic_base::Samvatsara {
    // Thai to Panguni fall in the previous cycle year until mid-April.
    let before_new_year = civil.month() <= 4 && month >= 8;
    samvatsara_from_year(civil.year() - i32::from(before_new_year))
}

fn date_without_retry(
    eph: &Ephemeris,
    obs: &Observation,
    config: &TamilCalendarConfig,
) -> Result<(Pass, SunParams), SearchError> {
    let at_orig = eph.sun(obs)?;
    let pass = search_pass(eph, obs, &at_orig, config)?;
    Ok((pass, at_orig))
}

fn finish(obs: &Observation, pass: &Pass, day: i64, adjustment: DayAdjustment) -> TamilDate {
    TamilDate {
        day: day.max(0) as u32,
        month: TamilMonth::from_index(pass.month),
        year: cycle_year(obs.civil, pass.month),
        crossing: pass.crossing,
        adjustment,
    }
}

/// Tamil date of an observation.
pub fn tamil_date(
    eph: &Ephemeris,
    obs: &Observation,
    config: &TamilCalendarConfig,
) -> Result<TamilDate, SearchError> {
    let (pass, at_orig) = date_without_retry(eph, obs, config)?;

    let retry = |adjustment: DayAdjustment| -> Result<TamilDate, SearchError> {
        warn!(civil = %obs.civil, ?adjustment, "day count reached zero, retrying on previous day");
        let previous = obs.at(step(obs.civil, -Duration::days(1))?);
        let single = TamilCalendarConfig {
            fine_tuning: false,
            ..*config
        };
        let (again, _) = date_without_retry(eph, &previous, &single)?;
        Ok(finish(&previous, &again, again.day, adjustment))
    };

    if pass.day == 0 {
        let mut date = retry(DayAdjustment::SunsetRetry)?;
        date.day += 1;
        return Ok(date);
    }
    if config.fine_tuning && obs.civil < at_orig.sunrise {
        let day = pass.day - 1;
        if day == 0 {
            return retry(DayAdjustment::SunriseRetry);
        }
        return Ok(finish(obs, &pass, day, DayAdjustment::None));
    }
    Ok(finish(obs, &pass, pass.day, DayAdjustment::None))
}
