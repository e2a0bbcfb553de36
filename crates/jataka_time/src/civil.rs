//! Civil birth time → UTC normalization.
//!
//! A birth record carries the wall-clock reading at the birthplace plus the
//! numeric UTC offset in force there. The fields are read as a UTC-labelled
//! instant and the offset is then subtracted; the caller's own time zone
//! never participates. No time-zone database is consulted, so historical
//! daylight-saving rules are the caller's responsibility.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

use crate::error::TimeError;

/// Julian Date of the Unix epoch, 1970-01-01 00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Largest accepted magnitude for a UTC offset, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Parse a local clock time in `HH:MM` form. `HH:MM:SS` is also accepted.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, TimeError> {
    let t = s.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .map_err(|_| TimeError::InvalidClockTime(s.to_string()))
}

/// Convert local wall-clock date/time at the birthplace to a UTC instant.
///
/// The offset is rounded to whole milliseconds before subtraction, so
/// fractional offsets such as +5.5 or +5.75 are exact.
pub fn local_to_utc(
    date: NaiveDate,
    time: NaiveTime,
    utc_offset_hours: f64,
) -> Result<DateTime<Utc>, TimeError> {
    if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(TimeError::InvalidUtcOffset(utc_offset_hours));
    }
    let wall = NaiveDateTime::new(date, time).and_utc();
    let offset_ms = (utc_offset_hours * 3_600_000.0).round() as i64;
    let utc = wall
        .checked_sub_signed(TimeDelta::milliseconds(offset_ms))
        .ok_or(TimeError::OutOfRange)?;
    log::debug!("normalized {date} {time} (UTC{utc_offset_hours:+}) to {utc}");
    Ok(utc)
}

/// Julian Date on the UTC scale for an instant (millisecond resolution).
pub fn datetime_to_jd_utc(dt: &DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + dt.timestamp_millis() as f64 / MS_PER_DAY
}

/// UTC instant for a Julian Date, rounded to the nearest millisecond.
pub fn jd_utc_to_datetime(jd_utc: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd_utc.is_finite() {
        return Err(TimeError::OutOfRange);
    }
    let ms = ((jd_utc - UNIX_EPOCH_JD) * MS_PER_DAY).round();
    if ms.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange);
    }
    DateTime::from_timestamp_millis(ms as i64).ok_or(TimeError::OutOfRange)
}
