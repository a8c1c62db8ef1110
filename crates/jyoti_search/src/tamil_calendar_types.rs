//! Types for the Tamil solar-calendar search.

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use jyoti_vedic_base::{Samvatsara, TamilMonth};
use serde::{Deserialize, Serialize};

/// Which loop of the root-finder is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStage {
    /// Whole-day steps backwards until the Sun is behind the boundary.
    DayStep,
    /// One-minute steps forwards until the Sun reaches the boundary.
    MinuteStep,
}

impl SearchStage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DayStep => "day-step",
            Self::MinuteStep => "minute-step",
        }
    }
}

impl Display for SearchStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Root-finder limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TamilCalendarConfig {
    /// Maximum whole-day steps backwards.
    pub max_day_steps: u32,
    /// Maximum one-minute steps forwards.
    pub max_minute_steps: u32,
    /// Start the day at sunrise, retrying once on the previous day when the
    /// count reaches zero.
    pub fine_tuning: bool,
}

impl Default for TamilCalendarConfig {
    fn default() -> Self {
        Self {
            max_day_steps: 366,
            max_minute_steps: 1440,
            fine_tuning: true,
        }
    }
}

/// How the day count was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayAdjustment {
    /// Single pass.
    None,
    /// The month began after sunset; counted from the previous day.
    SunsetRetry,
    /// The instant precedes sunrise on day 1; the previous day's date holds.
    SunriseRetry,
}

/// A date in the Tamil solar calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TamilDate {
    /// Day of the month, from 1.
    pub day: u32,
    pub month: TamilMonth,
    /// Year within the 60-year cycle.
    pub year: Samvatsara,
    /// Civil instant the Sun crossed into the month, to the minute.
    pub crossing: NaiveDateTime,
    pub adjustment: DayAdjustment,
}

impl TamilDate {
    /// 0-based cycle position of the year.
    pub fn year_index(&self) -> u8 {
        self.year.index()
    }
}

impl Display for TamilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}, {}", self.month.name(), self.day, self.year.name())
    }
}
