//! Pancha Mahapurusha: a tara graha dignified in a kendra from the lagna.

use jataka_search::D1Chart;
use jataka_vedic_base::{Graha, HouseGroup};

use super::YogaId;
use crate::query::{dignified, in_group_from_lagna};

const fn karaka(id: YogaId) -> Option<Graha> {
    match id {
        YogaId::Ruchaka => Some(Graha::Mangal),
        YogaId::Bhadra => Some(Graha::Buddh),
        YogaId::Hamsa => Some(Graha::Guru),
        YogaId::Malavya => Some(Graha::Shukra),
        YogaId::Sasa => Some(Graha::Shani),
        _ => None,
    }
}

pub(super) fn holds(id: YogaId, chart: &D1Chart) -> bool {
    let Some(graha) = karaka(id) else {
        return false;
    };
    dignified(chart, graha) && in_group_from_lagna(chart, graha, HouseGroup::Kendra)
}
