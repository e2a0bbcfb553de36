//! Houses: whole-sign placement, Porphyry cusp degrees and offset groups.
//!
//! Planet-to-house assignment is whole-sign only: house N is the N-th sign
//! counted from the ascendant's sign. Cusp degrees are a separate, display-
//! only quantity from Porphyry trisection: cusps 1/4/7/10 are the four
//! angles and each quadrant between adjacent angles is split into equal
//! thirds. This is not Placidus and is never used for placement.

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;
use crate::util::normalize_360;

/// One whole-sign house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bhava {
    /// House number 1-12.
    pub number: u8,
    /// Sign occupying the house.
    pub rashi: Rashi,
    /// Porphyry cusp longitude (sidereal degrees), for display.
    pub cusp_deg: f64,
    /// Sign lord.
    pub lord: Graha,
}

/// Whole-sign house (1-12) of a planet: `((S − A + 12) mod 12) + 1`.
pub fn whole_sign_house(planet_rashi_index: u8, lagna_rashi_index: u8) -> u8 {
    house_offset(lagna_rashi_index, planet_rashi_index) + 1
}

/// Forward distance from one sign/house to another, 0-11.
pub fn house_offset(from: u8, to: u8) -> u8 {
    ((to % 12) + 12 - (from % 12)) % 12
}

/// Porphyry cusps from sidereal ascendant and midheaven.
///
/// Index 0 is cusp 1. Cusp 7 = Asc + 180°, cusp 4 = MC + 180° exactly.
/// Each quadrant is trisected between its two angles, so cusps 2 and 3
/// fall between the ascendant and the IC (cusp 4), never on the wider
/// ascendant-to-descendant arc.
pub fn porphyry_cusps(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let asc = normalize_360(asc_deg);
    let mc = normalize_360(mc_deg);
    let dsc = normalize_360(asc + 180.0);
    let ic = normalize_360(mc + 180.0);

    let mut cusps = [0.0; 12];
    // (angle index, start angle, end angle) for each quadrant
    let quadrants = [(0, asc, ic), (3, ic, dsc), (6, dsc, mc), (9, mc, asc)];
    for (start_idx, from, to) in quadrants {
        let arc = normalize_360(to - from);
        cusps[start_idx] = from;
        cusps[start_idx + 1] = normalize_360(from + arc / 3.0);
        cusps[start_idx + 2] = normalize_360(from + 2.0 * arc / 3.0);
    }
    cusps
}

/// The 12 whole-sign houses for an ascendant, carrying display cusps.
pub fn whole_sign_bhavas(lagna_rashi_index: u8, cusps: &[f64; 12]) -> [Bhava; 12] {
    std::array::from_fn(|i| {
        let rashi = Rashi::from_index(lagna_rashi_index + i as u8);
        Bhava {
            number: i as u8 + 1,
            rashi,
            cusp_deg: cusps[i],
            lord: rashi_lord(rashi),
        }
    })
}

/// Classical house-offset groupings (0-indexed distance from a reference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HouseGroup {
    /// Angular: 1st, 4th, 7th, 10th.
    Kendra,
    /// Trinal: 1st, 5th, 9th.
    Trikona,
    /// Malefic: 6th, 8th, 12th.
    Dusthana,
    /// Growth: 3rd, 6th, 10th, 11th.
    Upachaya,
}

impl HouseGroup {
    /// 0-indexed offsets belonging to the group.
    pub const fn offsets(self) -> &'static [u8] {
        match self {
            Self::Kendra => &[0, 3, 6, 9],
            Self::Trikona => &[0, 4, 8],
            Self::Dusthana => &[5, 7, 11],
            Self::Upachaya => &[2, 5, 9, 10],
        }
    }

    /// Whether a 0-indexed offset belongs to the group.
    pub fn contains_offset(self, offset: u8) -> bool {
        self.offsets().contains(&(offset % 12))
    }

    /// Whether a 1-based house number belongs to the group (counted from house 1).
    pub fn contains_house(self, house: u8) -> bool {
        house >= 1 && self.contains_offset(house - 1)
    }
}
