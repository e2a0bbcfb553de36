//! Time handling for birth-chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - Greenwich mean and local sidereal time (UT1 approximated by UTC)
//! - The civil time normalizer: local wall-clock + UTC offset → UTC instant

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    MAX_UTC_OFFSET_HOURS, UNIX_EPOCH_JD, datetime_to_jd_utc, jd_utc_to_datetime, local_to_utc,
    parse_clock_time,
};
pub use error::TimeError;
pub use julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, calendar_to_jd, jd_to_centuries};
pub use sidereal::{
    earth_rotation_angle_rad, gmst_deg, gmst_rad, local_sidereal_time_deg, local_sidereal_time_rad,
};
