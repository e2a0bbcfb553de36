//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg sidereal.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds [0, 60).
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds (absolute value).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:04.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = (lon - rashi_idx as f64 * 30.0).clamp(0.0, 30.0 - f64::EPSILON * 32.0);
    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}
