//! Whole-sign house aspects (graha drishti by house offset).
//!
//! Every graha aspects the 7th house from itself. Mangal additionally
//! aspects the 4th and 8th, Guru the 5th and 9th, Shani the 3rd and 10th.
//! Offsets are 0-indexed: the 7th house is offset 6.

use crate::graha::Graha;

/// 0-indexed house offsets aspected by a graha.
pub const fn aspect_offsets(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[3, 6, 7],
        Graha::Guru => &[4, 6, 8],
        Graha::Shani => &[2, 6, 9],
        _ => &[6],
    }
}

/// Houses (1-12) aspected by a graha sitting in `from_house`.
pub fn aspected_houses(graha: Graha, from_house: u8) -> Vec<u8> {
    aspect_offsets(graha)
        .iter()
        .map(|&off| ((from_house + 11 + off) % 12) + 1)
        .collect()
}

/// Whether a graha in `from_house` aspects `target_house` (both 1-12).
pub fn aspects_house(graha: Graha, from_house: u8, target_house: u8) -> bool {
    let offset = ((target_house % 12) + 12 - (from_house % 12)) % 12;
    aspect_offsets(graha).contains(&offset)
}
