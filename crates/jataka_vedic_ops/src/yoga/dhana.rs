//! Wealth yogas.

use jataka_search::D1Chart;
use jataka_vedic_base::{Graha, HouseGroup};

use crate::query::{
    conjunct, dignified, house_of, in_group_from, in_group_from_lagna, lord_of, sign_exchange,
};

fn in_kendra_or_trikona(chart: &D1Chart, graha: Graha) -> bool {
    in_group_from_lagna(chart, graha, HouseGroup::Kendra)
        || in_group_from_lagna(chart, graha, HouseGroup::Trikona)
}

/// Lords of the 2nd and 11th joined, exchanged, or each in the other's house.
pub(super) fn dhana(chart: &D1Chart) -> bool {
    let (Some(l2), Some(l11)) = (lord_of(chart, 2), lord_of(chart, 11)) else {
        return false;
    };
    conjunct(chart, l2, l11)
        || sign_exchange(chart, l2, l11)
        || house_of(chart, l2) == Some(11)
        || house_of(chart, l11) == Some(2)
}

/// Dignified 9th lord in a kendra or trikona, lagna lord likewise placed.
pub(super) fn lakshmi(chart: &D1Chart) -> bool {
    let (Some(l9), Some(l1)) = (lord_of(chart, 9), lord_of(chart, 1)) else {
        return false;
    };
    dignified(chart, l9) && in_kendra_or_trikona(chart, l9) && in_kendra_or_trikona(chart, l1)
}

/// Benefics all in upachaya, from the lagna or from the Moon.
pub(super) fn vasumati(chart: &D1Chart) -> bool {
    const GRAHAS: [Graha; 3] = [Graha::Guru, Graha::Shukra, Graha::Buddh];
    let from_lagna = GRAHAS
        .iter()
        .all(|&g| in_group_from_lagna(chart, g, HouseGroup::Upachaya));
    let from_moon = GRAHAS
        .iter()
        .all(|&g| in_group_from(chart, Graha::Chandra, g, HouseGroup::Upachaya));
    from_lagna || from_moon
}

pub(super) fn chandra_mangala(chart: &D1Chart) -> bool {
    conjunct(chart, Graha::Chandra, Graha::Mangal)
}
