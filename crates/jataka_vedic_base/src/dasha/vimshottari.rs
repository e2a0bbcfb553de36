//! Vimshottari mahadasha sequence (120-year cycle).
//!
//! Provenance: BPHS, Vimshottari dasha chapter.

use crate::graha::Graha;
use super::balance::BirthBalance;
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};

/// Vimshottari lord sequence; nakshatra `i` is ruled by `VIMSHOTTARI_GRAHAS[i % 9]`.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha years, parallel to [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the full cycle in years.
pub const VIMSHOTTARI_CYCLE_YEARS: f64 = 120.0;

/// Mahadasha length of a graha in years.
pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_GRAHAS
        .iter()
        .position(|&g| g == graha)
        .map_or(0.0, |i| VIMSHOTTARI_YEARS[i])
}

/// Generate the 9 mahadashas starting at birth.
///
/// The first lord is the Moon's nakshatra lord; its length is reduced by the
/// fraction of the nakshatra already traversed. Periods are contiguous.
pub fn vimshottari_mahadashas(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let balance = BirthBalance::from_moon(moon_sidereal_lon);
    let start_seq = VIMSHOTTARI_GRAHAS
        .iter()
        .position(|&g| g == balance.lord)
        .unwrap_or(0);
    let balance_days = balance.remaining_days(VIMSHOTTARI_YEARS[start_seq] * DAYS_PER_YEAR);

    let n = VIMSHOTTARI_GRAHAS.len();
    let mut periods = Vec::with_capacity(n);
    let mut cursor = birth_jd;

    for offset in 0..n {
        let seq_idx = (start_seq + offset) % n;
        let duration = if offset == 0 {
            balance_days
        } else {
            VIMSHOTTARI_YEARS[seq_idx] * DAYS_PER_YEAR
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            lord: VIMSHOTTARI_GRAHAS[seq_idx],
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: offset as u16 + 1,
        });
        cursor = end;
    }

    periods
}

/// Index of the period whose `[start, end)` contains `jd`.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(jd))
}
