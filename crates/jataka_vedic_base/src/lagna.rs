//! Lagna (Ascendant) and MC (Midheaven) from local sidereal time.
//!
//! Standard spherical astronomy (Meeus, "Astronomical Algorithms" 2nd ed.,
//! Chapter 13):
//!
//! - `Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`
//! - `MC  = atan2(sin θ, cos θ·cos ε)`
//!
//! with θ the local sidereal time (RAMC), ε the obliquity and φ the
//! geographic latitude. The sign pattern of the ascendant's atan2 matters:
//! negating the first argument yields the descendant instead.
//! Results are tropical; callers subtract the ayanamsha.

use jataka_frames::mean_obliquity_deg;

use crate::error::VedicError;
use crate::util::normalize_360;

/// Tropical angles of a chart plus the quantities they were derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagnaMc {
    /// Tropical ascendant in degrees [0, 360).
    pub lagna_deg: f64,
    /// Tropical midheaven in degrees [0, 360).
    pub mc_deg: f64,
    /// Local sidereal time in degrees [0, 360).
    pub lst_deg: f64,
    /// Mean obliquity of date in degrees.
    pub obliquity_deg: f64,
}

/// Tropical ascendant longitude in degrees [0, 360).
pub fn lagna_longitude_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let (sin_t, cos_t) = lst_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();
    let tan_phi = latitude_deg.to_radians().tan();
    let asc = f64::atan2(cos_t, -(sin_t * cos_e + tan_phi * sin_e));
    normalize_360(asc.to_degrees())
}

/// Tropical midheaven longitude in degrees [0, 360).
///
/// Equivalent to `atan(tan θ / cos ε)` moved into the half-circle of θ.
pub fn mc_longitude_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let (sin_t, cos_t) = lst_deg.to_radians().sin_cos();
    let mc = f64::atan2(sin_t, cos_t * obliquity_deg.to_radians().cos());
    normalize_360(mc.to_degrees())
}

/// Compute tropical Lagna and MC for a UTC Julian Date.
///
/// `gmst_deg` is the Greenwich sidereal time supplied by the position
/// provider; longitude is east positive.
pub fn lagna_and_mc_deg(
    jd_utc: f64,
    gmst_deg: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<LagnaMc, VedicError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0 {
        return Err(VedicError::InvalidLocation("latitude must be inside (-90, 90)"));
    }
    if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
        return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
    }
    if !gmst_deg.is_finite() || !jd_utc.is_finite() {
        return Err(VedicError::InvalidInput("sidereal time must be finite"));
    }
    let lst_deg = normalize_360(gmst_deg + longitude_deg);
    let obliquity_deg = mean_obliquity_deg(jd_utc);
    Ok(LagnaMc {
        lagna_deg: lagna_longitude_deg(lst_deg, obliquity_deg, latitude_deg),
        mc_deg: mc_longitude_deg(lst_deg, obliquity_deg),
        lst_deg,
        obliquity_deg,
    })
}
