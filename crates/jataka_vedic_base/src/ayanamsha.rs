//! Linear ayanamsha model.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (tied to
//! the vernal equinox) and the sidereal zodiac (tied to the fixed stars).
//! Here it is a straight line through a J2000.0 reference value with a
//! constant precession rate:
//!
//! `aya(jd) = reference + rate/3600 · (jd − 2451545.0) / 365.25`
//!
//! The default constants (23.8541667°, 50.290966″/yr) are anchored to the
//! Lahiri (Chitrapaksha) value at J2000.0.

use serde::{Deserialize, Serialize};

use jataka_time::J2000_JD;

use crate::dasha::DAYS_PER_YEAR;
use crate::util::normalize_360;

/// Lahiri-anchored ayanamsha at J2000.0 in degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.854_166_7;

/// General precession rate in arcseconds per Julian year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.290_966;

/// A linear ayanamsha: reference value at J2000.0 plus a constant rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearAyanamsha {
    /// Ayanamsha at J2000.0 in degrees.
    pub reference_deg: f64,
    /// Precession rate in arcseconds per year.
    pub rate_arcsec_per_year: f64,
}

impl Default for LinearAyanamsha {
    fn default() -> Self {
        Self {
            reference_deg: LAHIRI_J2000_DEG,
            rate_arcsec_per_year: PRECESSION_ARCSEC_PER_YEAR,
        }
    }
}

impl LinearAyanamsha {
    /// Ayanamsha in degrees [0, 360) at a UTC Julian Date.
    pub fn at(&self, jd_utc: f64) -> f64 {
        let years = (jd_utc - J2000_JD) / DAYS_PER_YEAR;
        normalize_360(self.reference_deg + self.rate_arcsec_per_year / 3600.0 * years)
    }

    /// Sidereal longitude for a tropical longitude at `jd_utc`.
    pub fn to_sidereal(&self, tropical_lon_deg: f64, jd_utc: f64) -> f64 {
        normalize_360(tropical_lon_deg - self.at(jd_utc))
    }
}

/// Default (Lahiri-anchored) ayanamsha in degrees at a UTC Julian Date.
pub fn ayanamsha_deg(jd_utc: f64) -> f64 {
    LinearAyanamsha::default().at(jd_utc)
}
