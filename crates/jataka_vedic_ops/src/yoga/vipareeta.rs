//! Vipareeta Raja: a dusthana lord placed in a dusthana.

use jataka_search::D1Chart;
use jataka_vedic_base::HouseGroup;

use crate::query::{house_of, lord_of};

pub(super) fn lord_in_dusthana(chart: &D1Chart, house: u8) -> bool {
    lord_of(chart, house)
        .and_then(|lord| house_of(chart, lord))
        .is_some_and(|h| HouseGroup::Dusthana.contains_house(h))
}
