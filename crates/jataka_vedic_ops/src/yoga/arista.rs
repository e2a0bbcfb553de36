//! Affliction yogas.

use jataka_search::D1Chart;
use jataka_vedic_base::{Graha, HouseGroup};

use super::{TARA_GRAHAS, malefics};
use crate::query::{at_offset_from, conjunct, house_of, in_house, lord_of, offset_between, rashi_of};

/// No tara graha with the Moon or in the signs on either side of it.
pub(super) fn kemadruma(chart: &D1Chart) -> bool {
    rashi_of(chart, Graha::Chandra).is_some()
        && [0, 1, 11]
            .iter()
            .all(|&o| at_offset_from(chart, Graha::Chandra, o, &TARA_GRAHAS).is_empty())
}

/// A luminary joined by a node.
pub(super) fn grahana(chart: &D1Chart) -> bool {
    [Graha::Surya, Graha::Chandra].iter().any(|&light| {
        [Graha::Rahu, Graha::Ketu]
            .iter()
            .any(|&node| conjunct(chart, light, node))
    })
}

/// Moon in the 6th, 8th or 12th from Jupiter.
pub(super) fn shakata(chart: &D1Chart) -> bool {
    offset_between(chart, Graha::Guru, Graha::Chandra)
        .is_some_and(|o| HouseGroup::Dusthana.contains_offset(o))
}

/// Lord of the 11th in a dusthana.
pub(super) fn daridra(chart: &D1Chart) -> bool {
    lord_of(chart, 11)
        .and_then(|lord| house_of(chart, lord))
        .is_some_and(|h| HouseGroup::Dusthana.contains_house(h))
}

pub(super) fn guru_chandala(chart: &D1Chart) -> bool {
    conjunct(chart, Graha::Guru, Graha::Rahu)
}

/// Malefics hemming the lagna from the 2nd and 12th.
pub(super) fn papa_kartari(chart: &D1Chart) -> bool {
    !in_house(chart, 2, &malefics()).is_empty() && !in_house(chart, 12, &malefics()).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_chart::chart_with;

    #[test]
    fn kemadruma_isolated_moon() {
        assert!(!kemadruma(&chart_with(0, &[])));
        assert!(kemadruma(&chart_with(0, &[(Graha::Shani, 4)])));
    }

    #[test]
    fn kemadruma_ignores_sun_and_nodes() {
        let c = chart_with(
            0,
            &[(Graha::Shani, 4), (Graha::Surya, 1), (Graha::Rahu, 2), (Graha::Ketu, 8)],
        );
        assert!(kemadruma(&c));
    }

    #[test]
    fn grahana_luminary_with_node() {
        assert!(!grahana(&chart_with(0, &[])));
        assert!(grahana(&chart_with(0, &[(Graha::Surya, 11)])));
        assert!(grahana(&chart_with(0, &[(Graha::Chandra, 5)])));
    }

    #[test]
    fn shakata_moon_sixth_from_jupiter() {
        assert!(!shakata(&chart_with(0, &[])));
        assert!(shakata(&chart_with(0, &[(Graha::Chandra, 10)])));
    }

    #[test]
    fn daridra_eleventh_lord_in_sixth() {
        assert!(!daridra(&chart_with(0, &[])));
        assert!(daridra(&chart_with(0, &[(Graha::Shani, 5)])));
    }

    #[test]
    fn guru_chandala_needs_rahu() {
        // Default chart has Ketu with Jupiter.
        assert!(!guru_chandala(&chart_with(0, &[])));
        assert!(guru_chandala(&chart_with(0, &[(Graha::Guru, 11)])));
    }

    #[test]
    fn papa_kartari_both_sides() {
        assert!(!papa_kartari(&chart_with(0, &[])));
        assert!(papa_kartari(&chart_with(0, &[(Graha::Mangal, 1)])));
    }
}
