//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! The chart pipeline has no Earth-orientation tables, so every function
//! here is fed a UTC Julian Date in place of UT1. |UT1 − UTC| < 0.9 s,
//! which moves the ascendant by well under 0.01°.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle, radians in [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD − 2451545.0.
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time, radians in [0, 2π).
///
/// GMST = ERA + polynomial(T) with the polynomial in arcseconds:
///   0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///   − 0.000029956·T⁴ − 0.0000000368·T⁵
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    gmst_rad(jd_ut).to_degrees()
}

/// Local Sidereal Time from GMST and east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

/// Local Sidereal Time in degrees [0, 360) for a UTC Julian Date.
///
/// Equivalent to GMST in hours plus `longitude / 15`, expressed in degrees.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta_deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((theta_deg - 280.46).abs() < 0.1, "ERA = {theta_deg}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-01-01 0h: GMST 6h 39m 51.17s ≈ 99.96°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.97).abs() < 0.1, "GMST = {g}");
    }

    #[test]
    fn gmst_advances_one_degree_per_solar_day() {
        let d = gmst_deg(2_451_546.0) - gmst_deg(2_451_545.0);
        assert!((d - 0.9856).abs() < 0.01, "daily drift = {d}");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_deg(jd, 77.209);
        let expected = (gmst_deg(jd) + 77.209).rem_euclid(360.0);
        assert!((lst - expected).abs() < 1e-12);
    }

    #[test]
    fn lst_west_longitude_wraps() {
        let lst = local_sidereal_time_rad(0.1, -0.5);
        assert!((0.0..TAU).contains(&lst));
        assert!((lst - (TAU - 0.4)).abs() < 1e-12);
    }

    #[test]
    fn ranges() {
        for &jd in &[2_451_545.0, 2_433_307.7, 2_447_893.2, 2_460_000.5] {
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&g), "GMST out of range: {g}");
            let e = earth_rotation_angle_rad(jd);
            assert!((0.0..TAU).contains(&e), "ERA out of range: {e}");
        }
    }
}
