//! Raja yogas.

use jataka_search::{D1Chart, D9Chart};
use jataka_vedic_base::{
    Graha, HouseGroup, SAPTA_GRAHAS, is_debilitated, is_exalted, rashi_lord_by_index,
};

use crate::query::{
    conjunct, in_group_from, in_group_from_lagna, lord_of, mutual_aspect, rashi_of, related,
};

/// Jupiter in a kendra from the Moon.
pub(super) fn gajakesari(chart: &D1Chart) -> bool {
    in_group_from(chart, Graha::Chandra, Graha::Guru, HouseGroup::Kendra)
}

/// A kendra lord joins or mutually aspects a different trikona lord.
pub(super) fn kendra_trikona(chart: &D1Chart) -> bool {
    let kendra_lords: Vec<Graha> = [1, 4, 7, 10].iter().filter_map(|&h| lord_of(chart, h)).collect();
    let trikona_lords: Vec<Graha> = [1, 5, 9].iter().filter_map(|&h| lord_of(chart, h)).collect();
    kendra_lords.iter().any(|&k| {
        trikona_lords
            .iter()
            .any(|&t| k != t && (conjunct(chart, k, t) || mutual_aspect(chart, k, t)))
    })
}

/// Lords of the 9th and 10th related. One graha ruling both counts as joined.
pub(super) fn dharma_karmadhipati(chart: &D1Chart) -> bool {
    match (lord_of(chart, 9), lord_of(chart, 10)) {
        (Some(l9), Some(l10)) if l9 == l10 => rashi_of(chart, l9).is_some(),
        (Some(l9), Some(l10)) => related(chart, l9, l10),
        _ => false,
    }
}

/// A debilitated graha whose fall is cancelled: its dispositor stands in a
/// kendra from the lagna or the Moon, or the graha is exalted in navamsa.
pub(super) fn neecha_bhanga(chart: &D1Chart, d9: &D9Chart) -> bool {
    SAPTA_GRAHAS.iter().any(|&graha| {
        let Some(rashi) = rashi_of(chart, graha) else {
            return false;
        };
        if !is_debilitated(graha, rashi) {
            return false;
        }
        let dispositor_in_kendra = rashi_lord_by_index(rashi).is_some_and(|lord| {
            in_group_from_lagna(chart, lord, HouseGroup::Kendra)
                || in_group_from(chart, Graha::Chandra, lord, HouseGroup::Kendra)
        });
        let exalted_in_navamsa = d9
            .find(graha)
            .is_some_and(|p| is_exalted(graha, p.rashi.index()));
        dispositor_in_kendra || exalted_in_navamsa
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_chart::chart_with;
    use jataka_search::d9_chart;
    use jataka_vedic_base::Rashi;

    #[test]
    fn gajakesari_kendra_from_moon() {
        assert!(gajakesari(&chart_with(0, &[(Graha::Chandra, 1), (Graha::Guru, 4)])));
        assert!(gajakesari(&chart_with(0, &[(Graha::Chandra, 1), (Graha::Guru, 1)])));
        assert!(!gajakesari(&chart_with(0, &[(Graha::Chandra, 1), (Graha::Guru, 5)])));
    }

    #[test]
    fn kendra_trikona_conjunction() {
        // Mesha lagna: Moon lords the 4th, Jupiter the 9th.
        let c = chart_with(0, &[(Graha::Chandra, 3), (Graha::Guru, 3), (Graha::Surya, 6)]);
        assert!(kendra_trikona(&c));
    }

    #[test]
    fn kendra_trikona_absent() {
        let c = chart_with(0, &[(Graha::Surya, 6)]);
        assert!(!kendra_trikona(&c));
    }

    #[test]
    fn dharma_karmadhipati_exchange() {
        // Mesha lagna: Jupiter lords the 9th, Saturn the 10th.
        let c = chart_with(0, &[(Graha::Guru, 9), (Graha::Shani, 8)]);
        assert!(dharma_karmadhipati(&c));
        assert!(!dharma_karmadhipati(&chart_with(0, &[])));
    }

    #[test]
    fn dharma_karmadhipati_single_lord() {
        // Vrishabha lagna: Saturn rules both Makara and Kumbha.
        assert!(dharma_karmadhipati(&chart_with(1, &[])));
    }

    #[test]
    fn neecha_bhanga_dispositor_in_kendra() {
        // Sun falls in Tula; Venus in Tula is in the 7th.
        let fallen = chart_with(0, &[(Graha::Surya, 6), (Graha::Chandra, 2)]);
        assert!(!neecha_bhanga(&fallen, &d9_chart(&fallen)));

        let cancelled = chart_with(
            0,
            &[(Graha::Surya, 6), (Graha::Chandra, 2), (Graha::Shukra, 6)],
        );
        assert!(neecha_bhanga(&cancelled, &d9_chart(&cancelled)));
    }

    #[test]
    fn neecha_bhanga_exalted_in_navamsa() {
        let c = chart_with(0, &[(Graha::Surya, 6), (Graha::Chandra, 2)]);
        let mut d9 = d9_chart(&c);
        for p in d9.planets.iter_mut().filter(|p| p.graha == Graha::Surya) {
            p.rashi = Rashi::Mesha;
        }
        assert!(neecha_bhanga(&c, &d9));
    }
}
