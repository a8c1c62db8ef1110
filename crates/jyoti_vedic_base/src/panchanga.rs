//! Thithi, yogam and karanam from the Sun and Moon longitudes.

use jyoti_math::{diff_degrees, sum_degrees};

/// Elongation per thithi.
pub const THITHI_SPAN_DEG: f64 = 12.0;

/// Sun+Moon arc per yogam.
pub const YOGAM_SPAN_DEG: f64 = 360.0 / 27.0;

/// Elongation per karanam (half a thithi).
pub const KARANAM_SPAN_DEG: f64 = 6.0;

/// Thithi names, index 0..29. Waxing half first.
pub const THITHI_NAMES: [&str; 30] = [
    "Prathamai",
    "Dvitiyai",
    "Tritiyai",
    "Chathurthi",
    "Panchami",
    "Sashti",
    "Sapthami",
    "Ashtami",
    "Navami",
    "Dasami",
    "Ekadasi",
    "Dvadasi",
    "Thrayodasi",
    "Chathurdasi",
    "Pournami",
    "Prathamai",
    "Dvitiyai",
    "Tritiyai",
    "Chathurthi",
    "Panchami",
    "Sashti",
    "Sapthami",
    "Ashtami",
    "Navami",
    "Dasami",
    "Ekadasi",
    "Dvadasi",
    "Thrayodasi",
    "Chathurdasi",
    "Amavasai",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing.
    Shukla,
    /// Waning.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 27 yogams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yogam {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAMS: [Yogam; 27] = [
    Yogam::Vishkambha,
    Yogam::Priti,
    Yogam::Ayushman,
    Yogam::Saubhagya,
    Yogam::Shobhana,
    Yogam::Atiganda,
    Yogam::Sukarma,
    Yogam::Dhriti,
    Yogam::Shula,
    Yogam::Ganda,
    Yogam::Vriddhi,
    Yogam::Dhruva,
    Yogam::Vyaghata,
    Yogam::Harshana,
    Yogam::Vajra,
    Yogam::Siddhi,
    Yogam::Vyatipata,
    Yogam::Variyan,
    Yogam::Parigha,
    Yogam::Shiva,
    Yogam::Siddha,
    Yogam::Sadhya,
    Yogam::Shubha,
    Yogam::Shukla,
    Yogam::Brahma,
    Yogam::Indra,
    Yogam::Vaidhriti,
];

impl Yogam {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// The 11 karanams: seven movable, then four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karanam {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

pub const ALL_KARANAMS: [Karanam; 11] = [
    Karanam::Bava,
    Karanam::Balava,
    Karanam::Kaulava,
    Karanam::Taitila,
    Karanam::Gara,
    Karanam::Vanija,
    Karanam::Vishti,
    Karanam::Shakuni,
    Karanam::Chatushpada,
    Karanam::Naga,
    Karanam::Kimstughna,
];

impl Karanam {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_fixed(self) -> bool {
        (self as u8) >= 7
    }
}

/// Thithi position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThithiInfo {
    /// 0-based thithi index (0..29).
    pub index: u8,
    pub paksha: Paksha,
    /// 1-based number within the paksha (1..15).
    pub in_paksha: u8,
}

impl ThithiInfo {
    pub fn name(&self) -> &'static str {
        THITHI_NAMES[self.index as usize]
    }
}

/// Almanac elements at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panchanga {
    /// Moon minus Sun, [0, 360).
    pub elongation_deg: f64,
    pub thithi: ThithiInfo,
    pub yogam: Yogam,
    pub karanam: Karanam,
}

/// Moon's elongation east of the Sun.
pub fn elongation_deg(sun_deg: f64, moon_deg: f64) -> f64 {
    diff_degrees(moon_deg, sun_deg)
}

pub fn thithi_from_elongation(elongation_deg: f64) -> ThithiInfo {
    let index = ((elongation_deg / THITHI_SPAN_DEG).floor() as u8).min(29);
    let (paksha, in_paksha) = if index < 15 {
        (Paksha::Shukla, index + 1)
    } else {
        (Paksha::Krishna, index - 14)
    };
    ThithiInfo {
        index,
        paksha,
        in_paksha,
    }
}

pub fn yogam_from_sum(sun_deg: f64, moon_deg: f64) -> Yogam {
    let sum = sum_degrees(&[sun_deg, moon_deg]);
    let index = ((sum / YOGAM_SPAN_DEG).floor() as usize).min(26);
    ALL_YOGAMS[index]
}

/// Karanam index for an elongation.
///
/// Movable karanams cycle from the second half of the first thithi; the
/// first half-thithi is Kimstughna and the last three are Shakuni,
/// Chatushpada and Naga.
pub fn karanam_from_elongation(elongation_deg: f64) -> Karanam {
    let half = (elongation_deg / KARANAM_SPAN_DEG).floor() as i64;
    let mut index = (half - 1).rem_euclid(7);
    if elongation_deg < KARANAM_SPAN_DEG {
        index += 4;
    }
    if elongation_deg >= 342.0 {
        index += 7;
    }
    ALL_KARANAMS[(index as usize).min(10)]
}

pub fn panchanga(sun_deg: f64, moon_deg: f64) -> Panchanga {
    let elongation = elongation_deg(sun_deg, moon_deg);
    Panchanga {
        elongation_deg: elongation,
        thithi: thithi_from_elongation(elongation),
        yogam: yogam_from_sum(sun_deg, moon_deg),
        karanam: karanam_from_elongation(elongation),
    }
}
