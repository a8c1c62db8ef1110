//! Tamil solar months, one per sidereal sign of the Sun.

use crate::rashi::Rashi;

/// The 12 Tamil months. Chithirai begins when the Sun enters Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TamilMonth {
    Chithirai,
    Vaikasi,
    Aani,
    Aadi,
    Avani,
    Purattasi,
    Aippasi,
    Karthigai,
    Margazhi,
    Thai,
    Maasi,
    Panguni,
}

pub const ALL_TAMIL_MONTHS: [TamilMonth; 12] = [
    TamilMonth::Chithirai,
    TamilMonth::Vaikasi,
    TamilMonth::Aani,
    TamilMonth::Aadi,
    TamilMonth::Avani,
    TamilMonth::Purattasi,
    TamilMonth::Aippasi,
    TamilMonth::Karthigai,
    TamilMonth::Margazhi,
    TamilMonth::Thai,
    TamilMonth::Maasi,
    TamilMonth::Panguni,
];

impl TamilMonth {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chithirai => "Chithirai",
            Self::Vaikasi => "Vaikasi",
            Self::Aani => "Aani",
            Self::Aadi => "Aadi",
            Self::Avani => "Avani",
            Self::Purattasi => "Purattasi",
            Self::Aippasi => "Aippasi",
            Self::Karthigai => "Karthigai",
            Self::Margazhi => "Margazhi",
            Self::Thai => "Thai",
            Self::Maasi => "Maasi",
            Self::Panguni => "Panguni",
        }
    }

    /// 0-based index (Chithirai = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_TAMIL_MONTHS[(index % 12) as usize]
    }

    /// Sign the Sun occupies during this month.
    pub const fn rashi(self) -> Rashi {
        Rashi::from_index(self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_follow_signs() {
        for (i, m) in ALL_TAMIL_MONTHS.iter().enumerate() {
            assert_eq!(m.index() as usize, i);
            assert_eq!(m.rashi().index() as usize, i);
        }
        assert_eq!(TamilMonth::Avani.rashi(), Rashi::Simha);
        assert_eq!(TamilMonth::from_index(13), TamilMonth::Vaikasi);
    }
}
