//! Stateless chart queries shared by every rule.
//!
//! All helpers take the chart by reference and treat a missing graha as
//! "condition not met" rather than panicking.

use jataka_search::D1Chart;
use jataka_vedic_base::{
    Graha, HouseGroup, aspects_house, house_offset, is_exalted, is_own_sign, own_signs,
};

/// Rashi index of a graha.
pub fn rashi_of(chart: &D1Chart, graha: Graha) -> Option<u8> {
    chart.find(graha).map(|p| p.rashi_index())
}

/// Whole-sign house (1-12) of a graha.
pub fn house_of(chart: &D1Chart, graha: Graha) -> Option<u8> {
    chart.house_of(graha)
}

/// Sign lord of house `n` (1-12).
pub fn lord_of(chart: &D1Chart, house: u8) -> Option<Graha> {
    chart.house_lord(house)
}

/// 0-indexed sign distance from `from` to `to`.
pub fn offset_between(chart: &D1Chart, from: Graha, to: Graha) -> Option<u8> {
    Some(house_offset(rashi_of(chart, from)?, rashi_of(chart, to)?))
}

/// Whether `graha` sits in the given group counted from the lagna.
pub fn in_group_from_lagna(chart: &D1Chart, graha: Graha, group: HouseGroup) -> bool {
    house_of(chart, graha).is_some_and(|h| group.contains_house(h))
}

/// Whether `graha` sits in the given group counted from `reference`.
pub fn in_group_from(chart: &D1Chart, reference: Graha, graha: Graha, group: HouseGroup) -> bool {
    offset_between(chart, reference, graha).is_some_and(|o| group.contains_offset(o))
}

/// Same sign.
pub fn conjunct(chart: &D1Chart, a: Graha, b: Graha) -> bool {
    matches!((rashi_of(chart, a), rashi_of(chart, b)), (Some(x), Some(y)) if x == y)
}

/// Each graha aspects the other's house.
pub fn mutual_aspect(chart: &D1Chart, a: Graha, b: Graha) -> bool {
    match (house_of(chart, a), house_of(chart, b)) {
        (Some(ha), Some(hb)) => aspects_house(a, ha, hb) && aspects_house(b, hb, ha),
        _ => false,
    }
}

/// Each graha occupies a sign owned by the other.
pub fn sign_exchange(chart: &D1Chart, a: Graha, b: Graha) -> bool {
    if a == b {
        return false;
    }
    match (rashi_of(chart, a), rashi_of(chart, b)) {
        (Some(ra), Some(rb)) => own_signs(b).contains(&ra) && own_signs(a).contains(&rb),
        _ => false,
    }
}

/// Conjunct, in mutual aspect, or exchanging signs.
pub fn related(chart: &D1Chart, a: Graha, b: Graha) -> bool {
    conjunct(chart, a, b) || mutual_aspect(chart, a, b) || sign_exchange(chart, a, b)
}

/// In own sign or exaltation.
pub fn dignified(chart: &D1Chart, graha: Graha) -> bool {
    rashi_of(chart, graha).is_some_and(|r| is_own_sign(graha, r) || is_exalted(graha, r))
}

/// Grahas (from `candidates`) whose sign is `offset` signs from `reference`.
pub fn at_offset_from(
    chart: &D1Chart,
    reference: Graha,
    offset: u8,
    candidates: &[Graha],
) -> Vec<Graha> {
    candidates
        .iter()
        .copied()
        .filter(|&g| g != reference && offset_between(chart, reference, g) == Some(offset % 12))
        .collect()
}

/// Grahas (from `candidates`) occupying house `n`.
pub fn in_house(chart: &D1Chart, house: u8, candidates: &[Graha]) -> Vec<Graha> {
    candidates
        .iter()
        .copied()
        .filter(|&g| house_of(chart, g) == Some(house))
        .collect()
}
