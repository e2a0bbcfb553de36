//! Nakshatra (lunar mansion) and pada computation.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13°20′, each split
//! into 4 padas of 3°20′. Lordship cycles through the 9 Vimshottari lords,
//! so Ashwini, Magha and Mula share Ketu, and so on.

use serde::{Deserialize, Serialize};

use crate::dasha::VIMSHOTTARI_GRAHAS;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
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
    /// Display name of the nakshatra.
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

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling graha (Vimshottari lord).
    pub const fn lord(self) -> Graha {
        nakshatra_lord(self.index())
    }
}

/// Vimshottari lord of a nakshatra by index: `sequence[index mod 9]`.
pub const fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_GRAHAS[(nakshatra_index % 9) as usize]
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Ruling graha.
    pub lord: Graha,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Fraction of the nakshatra already traversed [0, 1).
    pub elapsed_fraction: f64,
}

/// Determine nakshatra, lord and pada from sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = (lon - nak_idx as f64 * NAKSHATRA_SPAN_27).max(0.0);
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    let elapsed_fraction = (degrees_in_nakshatra / NAKSHATRA_SPAN_27).min(1.0 - f64::EPSILON);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[nak_idx as usize],
        nakshatra_index: nak_idx,
        lord: nakshatra_lord(nak_idx),
        pada,
        degrees_in_nakshatra,
        elapsed_fraction,
    }
}
