//! The 60-year cycle of Tamil years.
//!
//! The cycle repeats continuously. CE 1987 (from mid-April) is Prabhava.

/// First civil year of the cycle anchor.
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

/// Years in one cycle.
pub const SAMVATSARA_CYCLE: i32 = 60;

/// The 60 years of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Samvatsara {
    Prabhava,
    Vibhava,
    Sukla,
    Pramodhootha,
    Prajorpathi,
    Aangirasa,
    Srimukha,
    Bhava,
    Yuva,
    Dhaathu,
    Eesvara,
    Vehudhanya,
    Pramaathi,
    Vikrama,
    Vishu,
    Chitrabhanu,
    Subhanu,
    Thaarana,
    Paarthiba,
    Viya,
    Sarvajith,
    Sarvadhari,
    Virodhi,
    Vikruthi,
    Kara,
    Nandhana,
    Vijaya,
    Jaya,
    Manmatha,
    Dhunmuki,
    Hevilambi,
    Vilambi,
    Vikaari,
    Saarvari,
    Plava,
    Subakruthu,
    Sobakruthu,
    Krodhi,
    Visuvaavasu,
    Paraabhava,
    Plavanga,
    Keelaka,
    Saumya,
    Saadhaarana,
    Virodhikruthu,
    Paridhaabi,
    Pramaadhisa,
    Aanandha,
    Raakshasa,
    Nala,
    Pingala,
    Kaalayukthi,
    Siddharthi,
    Raudhri,
    Dhunmathi,
    Dhundhubhi,
    Rudhirodhgaari,
    Rakthaakshi,
    Krodhana,
    Akshaya,
}

/// All 60 years in order (index 0 = Prabhava).
pub const ALL_SAMVATSARAS: [Samvatsara; 60] = [
    Samvatsara::Prabhava,
    Samvatsara::Vibhava,
    Samvatsara::Sukla,
    Samvatsara::Pramodhootha,
    Samvatsara::Prajorpathi,
    Samvatsara::Aangirasa,
    Samvatsara::Srimukha,
    Samvatsara::Bhava,
    Samvatsara::Yuva,
    Samvatsara::Dhaathu,
    Samvatsara::Eesvara,
    Samvatsara::Vehudhanya,
    Samvatsara::Pramaathi,
    Samvatsara::Vikrama,
    Samvatsara::Vishu,
    Samvatsara::Chitrabhanu,
    Samvatsara::Subhanu,
    Samvatsara::Thaarana,
    Samvatsara::Paarthiba,
    Samvatsara::Viya,
    Samvatsara::Sarvajith,
    Samvatsara::Sarvadhari,
    Samvatsara::Virodhi,
    Samvatsara::Vikruthi,
    Samvatsara::Kara,
    Samvatsara::Nandhana,
    Samvatsara::Vijaya,
    Samvatsara::Jaya,
    Samvatsara::Manmatha,
    Samvatsara::Dhunmuki,
    Samvatsara::Hevilambi,
    Samvatsara::Vilambi,
    Samvatsara::Vikaari,
    Samvatsara::Saarvari,
    Samvatsara::Plava,
    Samvatsara::Subakruthu,
    Samvatsara::Sobakruthu,
    Samvatsara::Krodhi,
    Samvatsara::Visuvaavasu,
    Samvatsara::Paraabhava,
    Samvatsara::Plavanga,
    Samvatsara::Keelaka,
    Samvatsara::Saumya,
    Samvatsara::Saadhaarana,
    Samvatsara::Virodhikruthu,
    Samvatsara::Paridhaabi,
    Samvatsara::Pramaadhisa,
    Samvatsara::Aanandha,
    Samvatsara::Raakshasa,
    Samvatsara::Nala,
    Samvatsara::Pingala,
    Samvatsara::Kaalayukthi,
    Samvatsara::Siddharthi,
    Samvatsara::Raudhri,
    Samvatsara::Dhunmathi,
    Samvatsara::Dhundhubhi,
    Samvatsara::Rudhirodhgaari,
    Samvatsara::Rakthaakshi,
    Samvatsara::Krodhana,
    Samvatsara::Akshaya,
];

impl Samvatsara {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prabhava => "Prabhava",
            Self::Vibhava => "Vibhava",
            Self::Sukla => "Sukla",
            Self::Pramodhootha => "Pramodhootha",
            Self::Prajorpathi => "Prajorpathi",
            Self::Aangirasa => "Aangirasa",
            Self::Srimukha => "Srimukha",
            Self::Bhava => "Bhava",
            Self::Yuva => "Yuva",
            Self::Dhaathu => "Dhaathu",
            Self::Eesvara => "Eesvara",
            Self::Vehudhanya => "Vehudhanya",
            Self::Pramaathi => "Pramaathi",
            Self::Vikrama => "Vikrama",
            Self::Vishu => "Vishu",
            Self::Chitrabhanu => "Chitrabhanu",
            Self::Subhanu => "Subhanu",
            Self::Thaarana => "Thaarana",
            Self::Paarthiba => "Paarthiba",
            Self::Viya => "Viya",
            Self::Sarvajith => "Sarvajith",
            Self::Sarvadhari => "Sarvadhari",
            Self::Virodhi => "Virodhi",
            Self::Vikruthi => "Vikruthi",
            Self::Kara => "Kara",
            Self::Nandhana => "Nandhana",
            Self::Vijaya => "Vijaya",
            Self::Jaya => "Jaya",
            Self::Manmatha => "Manmatha",
            Self::Dhunmuki => "Dhunmuki",
            Self::Hevilambi => "Hevilambi",
            Self::Vilambi => "Vilambi",
            Self::Vikaari => "Vikaari",
            Self::Saarvari => "Saarvari",
            Self::Plava => "Plava",
            Self::Subakruthu => "Subakruthu",
            Self::Sobakruthu => "Sobakruthu",
            Self::Krodhi => "Krodhi",
            Self::Visuvaavasu => "Visuvaavasu",
            Self::Paraabhava => "Paraabhava",
            Self::Plavanga => "Plavanga",
            Self::Keelaka => "Keelaka",
            Self::Saumya => "Saumya",
            Self::Saadhaarana => "Saadhaarana",
            Self::Virodhikruthu => "Virodhikruthu",
            Self::Paridhaabi => "Paridhaabi",
            Self::Pramaadhisa => "Pramaadhisa",
            Self::Aanandha => "Aanandha",
            Self::Raakshasa => "Raakshasa",
            Self::Nala => "Nala",
            Self::Pingala => "Pingala",
            Self::Kaalayukthi => "Kaalayukthi",
            Self::Siddharthi => "Siddharthi",
            Self::Raudhri => "Raudhri",
            Self::Dhunmathi => "Dhunmathi",
            Self::Dhundhubhi => "Dhundhubhi",
            Self::Rudhirodhgaari => "Rudhirodhgaari",
            Self::Rakthaakshi => "Rakthaakshi",
            Self::Krodhana => "Krodhana",
            Self::Akshaya => "Akshaya",
        }
    }

    /// 0-based position in the cycle.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Samvatsara; 60] {
        &ALL_SAMVATSARAS
    }

    /// Year for a 0-based cycle position, wrapping modulo 60.
    pub const fn from_index(index: u8) -> Self {
        ALL_SAMVATSARAS[(index % 60) as usize]
    }
}

/// Cycle year whose April start falls in `ce_year`.
pub fn samvatsara_from_year(ce_year: i32) -> Samvatsara {
    let offset = (ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(SAMVATSARA_CYCLE);
    ALL_SAMVATSARAS[offset as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        assert_eq!(ALL_SAMVATSARAS.len(), 60);
        for (i, s) in ALL_SAMVATSARAS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert!(!s.name().is_empty());
        }
    }

    #[test]
    fn anchor_and_wrap() {
        assert_eq!(samvatsara_from_year(1987), Samvatsara::Prabhava);
        assert_eq!(samvatsara_from_year(2014), Samvatsara::Jaya);
        assert_eq!(samvatsara_from_year(2047), Samvatsara::Prabhava);
        assert_eq!(samvatsara_from_year(1986), Samvatsara::Akshaya);
        assert_eq!(Samvatsara::from_index(87), Samvatsara::Jaya);
    }
}
