//! Types for house cusps and bhava spans.

/// The 12 house cusps, sidereal degrees, index 0 = 1st house (lagna).
///
/// Cusps 4–9 are always the exact opposites of cusps 10, 11, 12, 1, 2, 3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    pub cusps: [f64; 12],
    /// `tan(lat)·tan(obliquity) > 1`: intermediate cusps were interpolated.
    pub polar: bool,
}

impl HouseCusps {
    /// Cusp of a 1-based house number.
    pub fn cusp(&self, house: usize) -> Option<f64> {
        house.checked_sub(1).and_then(|i| self.cusps.get(i)).copied()
    }

    pub fn lagna(&self) -> f64 {
        self.cusps[0]
    }

    /// 10th cusp.
    pub fn culmination(&self) -> f64 {
        self.cusps[9]
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.cusps.iter()
    }
}

/// Start and end of one bhava (house sector).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BhavaSandhi {
    /// Midpoint between the previous cusp and this one.
    pub start_deg: f64,
    /// Midpoint between this cusp and the next.
    pub end_deg: f64,
}
