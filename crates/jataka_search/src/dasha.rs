//! Dasha orchestration: bridges an assembled chart with the pure-math
//! Vimshottari computation in jataka_vedic_base.

use chrono::{DateTime, Utc};
use serde::Serialize;

use jataka_time::jd_utc_to_datetime;
use jataka_vedic_base::{DashaLevel, DashaPeriod, Graha, vimshottari_mahadashas};

use crate::error::SearchError;
use crate::jyotish_types::D1Chart;

/// A dasha period on the UTC calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaEntry {
    pub lord: Graha,
    pub lord_name: &'static str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub level: DashaLevel,
    /// True iff the reference instant lies in `[start, end)`.
    pub is_current: bool,
}

/// Convert JD periods to UTC entries, flagging the one containing `as_of`.
pub fn dasha_entries(
    periods: &[DashaPeriod],
    as_of: DateTime<Utc>,
) -> Result<Vec<DashaEntry>, SearchError> {
    periods
        .iter()
        .map(|p| {
            let start = jd_utc_to_datetime(p.start_jd)?;
            let end = jd_utc_to_datetime(p.end_jd)?;
            Ok(DashaEntry {
                lord: p.lord,
                lord_name: p.lord.english_name(),
                start,
                end,
                level: p.level,
                is_current: as_of >= start && as_of < end,
            })
        })
        .collect()
}

/// Vimshottari mahadashas for a chart, seeded by its Moon.
pub fn vimshottari_for_chart(
    d1: &D1Chart,
    birth_jd_utc: f64,
    as_of: DateTime<Utc>,
) -> Result<Vec<DashaEntry>, SearchError> {
    let moon = d1.planet(Graha::Chandra);
    let periods = vimshottari_mahadashas(birth_jd_utc, moon.sidereal_longitude);
    if let Some(first) = periods.first() {
        log::debug!(
            "vimshottari starts with {} for {:.3} years",
            first.lord.english_name(),
            first.duration_days() / jataka_vedic_base::DAYS_PER_YEAR
        );
    }
    dasha_entries(&periods, as_of)
}
