//! Nakshatra (lunar mansion) of a sidereal longitude.
//!
//! 27 equal mansions of 13°20′, each split into 4 padas of 3°20′.

use jyoti_math::normalize_360;

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Tamil name.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Ashwini => "Aswini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Karthigai",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mirugaseerisham",
            Self::Ardra => "Thiruvathirai",
            Self::Punarvasu => "Punarpoosam",
            Self::Pushya => "Poosam",
            Self::Ashlesha => "Ayilyam",
            Self::Magha => "Magam",
            Self::PurvaPhalguni => "Pooram",
            Self::UttaraPhalguni => "Uthiram",
            Self::Hasta => "Hastham",
            Self::Chitra => "Chithirai",
            Self::Swati => "Swathi",
            Self::Vishakha => "Visakam",
            Self::Anuradha => "Anusham",
            Self::Jyeshtha => "Kettai",
            Self::Mula => "Moolam",
            Self::PurvaAshadha => "Pooradam",
            Self::UttaraAshadha => "Uthiradam",
            Self::Shravana => "Thiruvonam",
            Self::Dhanishtha => "Avittam",
            Self::Shatabhisha => "Sadhayam",
            Self::PurvaBhadrapada => "Poorattathi",
            Self::UttaraBhadrapada => "Uthirattathi",
            Self::Revati => "Revathi",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Nakshatra position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// Pada (quarter), 1..=4.
    pub pada: u8,
    /// Degrees elapsed within the nakshatra, [0, 13.333…).
    pub degrees_in_nakshatra: f64,
}

/// Determine the nakshatra and pada of a sidereal longitude.
pub fn nakshatra_from_longitude(longitude_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(longitude_deg);
    let idx = ((lon / NAKSHATRA_SPAN_DEG).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - f64::from(idx) * NAKSHATRA_SPAN_DEG;
    let pada = ((degrees_in_nakshatra / PADA_SPAN_DEG).floor() as u8).min(3) + 1;
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        nakshatra_index: idx,
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert!(!n.name().is_empty());
            assert!(!n.tamil_name().is_empty());
        }
    }

    #[test]
    fn first_and_last() {
        let a = nakshatra_from_longitude(0.0);
        assert_eq!(a.nakshatra, Nakshatra::Ashwini);
        assert_eq!(a.pada, 1);
        let r = nakshatra_from_longitude(359.9);
        assert_eq!(r.nakshatra, Nakshatra::Revati);
        assert_eq!(r.pada, 4);
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(nakshatra_from_longitude(PADA_SPAN_DEG + 0.01).pada, 2);
        assert_eq!(nakshatra_from_longitude(NAKSHATRA_SPAN_DEG + 0.01).pada, 1);
        assert_eq!(
            nakshatra_from_longitude(NAKSHATRA_SPAN_DEG + 0.01).nakshatra,
            Nakshatra::Bharani
        );
    }

    #[test]
    fn example_moon() {
        // 25.71° lies in Bharani, pada 4
        let info = nakshatra_from_longitude(25.710_187_525);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert_eq!(info.pada, 4);
    }
}
