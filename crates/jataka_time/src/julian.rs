//! Calendar → Julian Date conversion.
//!
//! Uses the proleptic Gregorian calendar (Meeus,
//! "Astronomical Algorithms" 2nd ed., Chapter 7). Birth charts never need
//! the Julian-calendar branch, so dates before 1582-10-15 are extrapolated.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT, used here on the UTC scale).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in one Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Convert a calendar date to a Julian Date.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. `1.5` = noon on the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
