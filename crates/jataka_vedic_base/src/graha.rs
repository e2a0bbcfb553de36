//! Vedic planet (graha) enum and rashi lordship.
//!
//! Clean-room implementation from standard Vedic jyotish texts (BPHS).

use serde::{Deserialize, Serialize};

use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Graha at a 0-based ALL_GRAHAS index.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_GRAHAS.get(index as usize).copied()
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

/// Lord of a rashi by 0-based index. None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    ALL_RASHIS.get(rashi_index as usize).map(|&r| rashi_lord(r))
}
