//! Core types for dasha (planetary period) calculations.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DashaLevel {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    /// Ruling graha.
    pub lord: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(DashaLevel::Mahadasha.name(), "Mahadasha");
        assert_eq!(DashaLevel::Pranadasha.name(), "Pranadasha");
    }

    #[test]
    fn contains_is_half_open() {
        let p = DashaPeriod {
            lord: Graha::Ketu,
            start_jd: 10.0,
            end_jd: 20.0,
            level: DashaLevel::Mahadasha,
            order: 1,
        };
        assert!(p.contains(10.0));
        assert!(p.contains(19.999));
        assert!(!p.contains(20.0));
        assert!(!p.contains(9.999));
        assert!((p.duration_days() - 10.0).abs() < 1e-12);
    }
}
