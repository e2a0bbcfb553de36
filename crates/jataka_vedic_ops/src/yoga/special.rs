//! Lunar, solar and exchange yogas.

use jataka_search::D1Chart;
use jataka_vedic_base::{Graha, SAPTA_GRAHAS};

use super::{TARA_GRAHAS, benefics, malefics};
use crate::query::{at_offset_from, conjunct, house_of, in_house, offset_between, sign_exchange};

const WISE: [Graha; 3] = [Graha::Buddh, Graha::Guru, Graha::Shukra];

pub(super) fn budhaditya(chart: &D1Chart) -> bool {
    conjunct(chart, Graha::Surya, Graha::Buddh)
}

/// Only benefics in the 10th.
pub(super) fn amala(chart: &D1Chart) -> bool {
    !in_house(chart, 10, &benefics()).is_empty() && in_house(chart, 10, &malefics()).is_empty()
}

/// Mercury, Jupiter and Venus in the 6th, 7th or 8th from the Moon.
pub(super) fn adhi(chart: &D1Chart) -> bool {
    WISE.iter().all(|&g| {
        offset_between(chart, Graha::Chandra, g).is_some_and(|o| (5..=7).contains(&o))
    })
}

/// Mercury, Jupiter and Venus in kendras, trikonas or the 2nd.
pub(super) fn saraswati(chart: &D1Chart) -> bool {
    const HOUSES: [u8; 7] = [1, 2, 4, 5, 7, 9, 10];
    WISE.iter()
        .all(|&g| house_of(chart, g).is_some_and(|h| HOUSES.contains(&h)))
}

fn moon_flanks(chart: &D1Chart) -> (bool, bool) {
    let second = !at_offset_from(chart, Graha::Chandra, 1, &TARA_GRAHAS).is_empty();
    let twelfth = !at_offset_from(chart, Graha::Chandra, 11, &TARA_GRAHAS).is_empty();
    (second, twelfth)
}

/// Tara graha in the 2nd from the Moon, none in the 12th.
pub(super) fn sunapha(chart: &D1Chart) -> bool {
    matches!(moon_flanks(chart), (true, false))
}

/// Tara graha in the 12th from the Moon, none in the 2nd.
pub(super) fn anapha(chart: &D1Chart) -> bool {
    matches!(moon_flanks(chart), (false, true))
}

pub(super) fn durudhara(chart: &D1Chart) -> bool {
    matches!(moon_flanks(chart), (true, true))
}

/// Any two sapta grahas in each other's signs.
pub(super) fn parivartana(chart: &D1Chart) -> bool {
    SAPTA_GRAHAS.iter().enumerate().any(|(i, &a)| {
        SAPTA_GRAHAS[i + 1..]
            .iter()
            .any(|&b| sign_exchange(chart, a, b))
    })
}

/// Benefics hemming the lagna from the 2nd and 12th.
pub(super) fn shubha_kartari(chart: &D1Chart) -> bool {
    !in_house(chart, 2, &benefics()).is_empty() && !in_house(chart, 12, &benefics()).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_chart::chart_with;

    #[test]
    fn budhaditya_sun_with_mercury() {
        assert!(!budhaditya(&chart_with(0, &[])));
        assert!(budhaditya(&chart_with(0, &[(Graha::Buddh, 8)])));
    }

    #[test]
    fn amala_spoiled_by_malefic() {
        assert!(amala(&chart_with(0, &[])));
        assert!(!amala(&chart_with(0, &[(Graha::Shani, 9)])));
        assert!(!amala(&chart_with(0, &[(Graha::Buddh, 8)])));
    }

    #[test]
    fn adhi_from_moon() {
        assert!(!adhi(&chart_with(0, &[])));
        let c = chart_with(
            0,
            &[(Graha::Chandra, 0), (Graha::Buddh, 6), (Graha::Guru, 5), (Graha::Shukra, 7)],
        );
        assert!(adhi(&c));
    }

    #[test]
    fn saraswati_placements() {
        assert!(!saraswati(&chart_with(0, &[])));
        let c = chart_with(0, &[(Graha::Buddh, 0), (Graha::Guru, 3), (Graha::Shukra, 6)]);
        assert!(saraswati(&c));
    }

    #[test]
    fn lunar_flank_yogas_exclusive() {
        // Saturn in the 2nd from the Moon by default.
        let c = chart_with(0, &[]);
        assert!(sunapha(&c) && !anapha(&c) && !durudhara(&c));

        let c = chart_with(0, &[(Graha::Shani, 0)]);
        assert!(!sunapha(&c) && anapha(&c) && !durudhara(&c));

        let c = chart_with(0, &[(Graha::Mangal, 0)]);
        assert!(!sunapha(&c) && !anapha(&c) && durudhara(&c));
    }

    #[test]
    fn parivartana_mercury_saturn() {
        // Default chart: Mercury in Makara, Saturn in Mithuna.
        assert!(parivartana(&chart_with(0, &[])));
        assert!(!parivartana(&chart_with(0, &[(Graha::Shani, 4)])));
    }

    #[test]
    fn shubha_kartari_both_sides() {
        assert!(!shubha_kartari(&chart_with(0, &[])));
        assert!(shubha_kartari(&chart_with(0, &[(Graha::Shukra, 11)])));
    }
}
