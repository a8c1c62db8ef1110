//! The seven heliocentric planets of the model.
//!
//! The Sun and Moon have dedicated models and the lunar nodes are derived
//! points, so none of them appear here.

use serde::{Deserialize, Serialize};

/// Planets with an orbital element set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Uranus,
    Neptune,
}

/// All planets in traditional weekday-lord order, followed by the outer two.
pub const ALL_PLANETS: [Planet; 7] = [
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
];

/// Long-period perturbation applied to the mean longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecularTerm {
    Jupiter,
    Saturn,
}

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    /// 0-based index into [`ALL_PLANETS`].
    pub const fn index(self) -> usize {
        match self {
            Self::Mars => 0,
            Self::Mercury => 1,
            Self::Jupiter => 2,
            Self::Venus => 3,
            Self::Saturn => 4,
            Self::Uranus => 5,
            Self::Neptune => 6,
        }
    }

    pub const fn all() -> &'static [Planet; 7] {
        &ALL_PLANETS
    }

    /// Orbit lies inside the Earth's (Mercury, Venus).
    ///
    /// Selects the secondary-triangle branch of the geocentric conversion.
    pub const fn is_inferior(self) -> bool {
        matches!(self, Self::Mercury | Self::Venus)
    }

    /// Whether the mean longitude carries the Jupiter/Saturn secular term.
    pub const fn has_jupiter_saturn_term(self) -> bool {
        self.secular_term().is_some()
    }

    pub const fn secular_term(self) -> Option<SecularTerm> {
        match self {
            Self::Jupiter => Some(SecularTerm::Jupiter),
            Self::Saturn => Some(SecularTerm::Saturn),
            _ => None,
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Planet {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or("unknown planet")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_order() {
        for (i, p) in ALL_PLANETS.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn inferior_planets() {
        let inferior: Vec<_> = ALL_PLANETS.iter().filter(|p| p.is_inferior()).collect();
        assert_eq!(inferior, [&Planet::Mercury, &Planet::Venus]);
    }

    #[test]
    fn secular_terms_only_for_jupiter_and_saturn() {
        for p in ALL_PLANETS {
            let expected = matches!(p, Planet::Jupiter | Planet::Saturn);
            assert_eq!(p.has_jupiter_saturn_term(), expected, "{p}");
        }
        assert_eq!(Planet::Saturn.secular_term(), Some(SecularTerm::Saturn));
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("venus".parse::<Planet>(), Ok(Planet::Venus));
        assert!("pluto".parse::<Planet>().is_err());
    }
}
