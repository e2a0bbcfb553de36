//! Synthetic D1 charts for rule tests.

use jataka_search::{Ascendant, D1Chart, GrahaState, GrahaStates, assemble_d1};
use jataka_vedic_base::{ALL_GRAHAS, Graha, nakshatra_from_longitude, rashi_from_longitude};

/// Rashi of each graha when a test does not place it.
const DEFAULT_RASHI: [u8; 9] = [8, 1, 10, 9, 5, 7, 2, 11, 5];

/// Chart with the lagna at 15° of `lagna_rashi` and every graha at 15° of
/// its rashi. Unlisted grahas take `DEFAULT_RASHI`.
pub(crate) fn chart_with(lagna_rashi: u8, placements: &[(Graha, u8)]) -> D1Chart {
    chart_with_flags(lagna_rashi, placements, &[])
}

/// As [`chart_with`], marking the listed grahas retrograde.
pub(crate) fn chart_with_flags(
    lagna_rashi: u8,
    placements: &[(Graha, u8)],
    retrograde: &[Graha],
) -> D1Chart {
    let states = ALL_GRAHAS.map(|graha| {
        let rashi = placements
            .iter()
            .find(|(g, _)| *g == graha)
            .map_or(DEFAULT_RASHI[graha.index() as usize], |&(_, r)| r);
        let is_retro = retrograde.contains(&graha) || graha.is_node();
        GrahaState {
            graha,
            sidereal_longitude: rashi as f64 * 30.0 + 15.0,
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_deg_per_day: if is_retro { -0.05 } else { 0.5 },
            retrograde: is_retro,
        }
    });
    let asc_lon = lagna_rashi as f64 * 30.0 + 15.0;
    let r = rashi_from_longitude(asc_lon);
    let n = nakshatra_from_longitude(asc_lon);
    let ascendant = Ascendant {
        sidereal_longitude: asc_lon,
        rashi: r.rashi,
        degrees_in_rashi: r.degrees_in_rashi,
        nakshatra: n.nakshatra,
        pada: n.pada,
    };
    let mc = (asc_lon + 270.0) % 360.0;
    assemble_d1(
        ascendant,
        mc,
        &GrahaStates {
            states,
            ayanamsha_deg: 24.0,
        },
    )
}
