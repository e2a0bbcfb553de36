//! Portion of the opening mahadasha left at birth.

use crate::graha::Graha;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};

/// The Moon's progress through its nakshatra at birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// 0 = Ashwini .. 26 = Revati.
    pub nakshatra_index: u8,
    /// Nakshatra lord; opens the sequence.
    pub lord: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
}

impl BirthBalance {
    pub fn from_moon(moon_sidereal_lon: f64) -> Self {
        let NakshatraInfo {
            nakshatra_index,
            lord,
            elapsed_fraction,
            ..
        } = nakshatra_from_longitude(moon_sidereal_lon);
        Self {
            nakshatra_index,
            lord,
            elapsed_fraction,
        }
    }

    /// Days left of an opening period whose full length is `period_days`.
    pub fn remaining_days(&self, period_days: f64) -> f64 {
        period_days * (1.0 - self.elapsed_fraction)
    }
}
