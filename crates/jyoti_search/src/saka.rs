//! Saka-era civil date and Kali year.
//!
//! Each Gregorian month is split at a fixed day: on or after it the Saka
//! month is two behind the Gregorian one (counting Chaitra as 0 and March
//! as 2), before it three behind with a fixed day offset. Leap years start
//! Chaitra a day early and give it 31 days.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

/// Gregorian day on which each Saka month starts, by Gregorian month.
const SAKA_MONTH_START: [u32; 12] = [21, 20, 22, 21, 22, 22, 23, 23, 23, 23, 22, 22];

/// Days of the Saka month already elapsed on the 1st of each Gregorian month.
const SAKA_DAY_OFFSET: [u32; 12] = [11, 9, 10, 10, 10, 9, 9, 9, 8, 9, 9, 10];

/// Years between the Gregorian and Saka eras.
const SAKA_ERA_OFFSET: i32 = 78;

/// Years between the Saka and Kali eras.
const KALI_ERA_OFFSET: i32 = 3180;

/// The 12 Saka months, Chaitra first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SakaMonth {
    Chaitra,
    Vaisakha,
    Jyaishtha,
    Ashadha,
    Shravana,
    Bhadra,
    Ashvina,
    Kartika,
    Agrahayana,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_SAKA_MONTHS: [SakaMonth; 12] = [
    SakaMonth::Chaitra,
    SakaMonth::Vaisakha,
    SakaMonth::Jyaishtha,
    SakaMonth::Ashadha,
    SakaMonth::Shravana,
    SakaMonth::Bhadra,
    SakaMonth::Ashvina,
    SakaMonth::Kartika,
    SakaMonth::Agrahayana,
    SakaMonth::Pausha,
    SakaMonth::Magha,
    SakaMonth::Phalguna,
];

impl SakaMonth {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaisakha => "Vaisakha",
            Self::Jyaishtha => "Jyaishtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadra => "Bhadra",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Agrahayana => "Agrahayana",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A Saka-era date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SakaDate {
    pub day: u32,
    pub month: SakaMonth,
    pub year: i32,
}

impl SakaDate {
    pub fn kali_year(&self) -> i32 {
        kali_year(self.year)
    }
}

impl Display for SakaDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}, {}", self.month.name(), self.day, self.year)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Kali year for a Saka year.
pub fn kali_year(saka_year: i32) -> i32 {
    saka_year + KALI_ERA_OFFSET
}

/// Saka date of a Gregorian date.
pub fn saka_date(date: NaiveDate) -> SakaDate {
    let (year, month, day) = (date.year(), date.month(), date.day());
    let m = month as usize - 1;
    let leap = is_leap_year(year);

    let (mut saka_month, mut saka_day) = if day >= SAKA_MONTH_START[m] {
        ((m + 10) % 12, day - SAKA_MONTH_START[m] + 1)
    } else {
        ((m + 9) % 12, day + SAKA_DAY_OFFSET[(m + 11) % 12])
    };

    if leap {
        match month {
            3 if day == 21 => {
                saka_month = 0;
                saka_day = 1;
            }
            3 => saka_day += 1,
            4 if day < SAKA_MONTH_START[3] => saka_day += 1,
            _ => {}
        }
    }

    let chaitra_start = if leap { 21 } else { 22 };
    let before_new_year = month < 3 || (month == 3 && day < chaitra_start);
    SakaDate {
        day: saka_day,
        month: ALL_SAKA_MONTHS[saka_month],
        year: year - SAKA_ERA_OFFSET - i32::from(before_new_year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn check(d: NaiveDate, day: u32, month: SakaMonth, year: i32) {
        let s = saka_date(d);
        assert_eq!((s.day, s.month, s.year), (day, month, year), "{d}");
    }

    #[test]
    fn example_date() {
        let s = saka_date(date(2014, 9, 12));
        assert_eq!((s.day, s.month, s.year), (21, SakaMonth::Bhadra, 1936));
        assert_eq!(s.kali_year(), 5116);
        assert_eq!(s.to_string(), "Bhadra 21, 1936");
    }

    #[test]
    fn common_year_new_year() {
        check(date(2014, 3, 21), 30, SakaMonth::Phalguna, 1935);
        check(date(2014, 3, 22), 1, SakaMonth::Chaitra, 1936);
        check(date(2014, 4, 20), 30, SakaMonth::Chaitra, 1936);
        check(date(2014, 4, 21), 1, SakaMonth::Vaisakha, 1936);
    }

    #[test]
    fn leap_year_new_year() {
        check(date(2016, 2, 29), 10, SakaMonth::Phalguna, 1937);
        check(date(2016, 3, 1), 11, SakaMonth::Phalguna, 1937);
        check(date(2016, 3, 20), 30, SakaMonth::Phalguna, 1937);
        check(date(2016, 3, 21), 1, SakaMonth::Chaitra, 1938);
        check(date(2016, 3, 22), 2, SakaMonth::Chaitra, 1938);
        check(date(2016, 4, 20), 31, SakaMonth::Chaitra, 1938);
        check(date(2016, 4, 21), 1, SakaMonth::Vaisakha, 1938);
    }

    #[test]
    fn year_end() {
        check(date(2014, 1, 1), 11, SakaMonth::Pausha, 1935);
        check(date(2014, 12, 21), 30, SakaMonth::Agrahayana, 1936);
        check(date(2014, 12, 22), 1, SakaMonth::Pausha, 1936);
    }

    #[test]
    fn leap_rule() {
        assert!(is_leap_year(2016));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2014));
    }
}
