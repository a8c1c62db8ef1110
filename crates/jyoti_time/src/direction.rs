//! Hemisphere flags for longitude and latitude.
//!
//! Magnitudes are always given as non-negative degrees; the hemisphere is a
//! separate flag, as in traditional almanac tables.

use serde::{Deserialize, Serialize};

/// Longitude hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EastWest {
    #[default]
    East,
    West,
}

impl EastWest {
    /// +1 for east, -1 for west.
    pub const fn sign(self) -> f64 {
        match self {
            Self::East => 1.0,
            Self::West => -1.0,
        }
    }

    /// Apply the hemisphere sign to a magnitude.
    pub fn signed(self, magnitude: f64) -> f64 {
        self.sign() * magnitude
    }

    /// Single-letter code.
    pub const fn code(self) -> char {
        match self {
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

/// Latitude hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NorthSouth {
    #[default]
    North,
    South,
}

impl NorthSouth {
    pub const fn is_south(self) -> bool {
        matches!(self, Self::South)
    }

    /// Single-letter code.
    pub const fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs() {
        assert_eq!(EastWest::East.signed(78.2), 78.2);
        assert_eq!(EastWest::West.signed(78.2), -78.2);
        assert!(NorthSouth::South.is_south());
        assert!(!NorthSouth::North.is_south());
    }

    #[test]
    fn codes() {
        assert_eq!(EastWest::West.code(), 'W');
        assert_eq!(NorthSouth::North.code(), 'N');
    }
}
