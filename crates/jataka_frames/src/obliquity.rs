//! Mean obliquity of the ecliptic.
//!
//! IAU 1976 polynomial (Lieske et al. 1977; Meeus eq. 22.2):
//! ε = 23°26′21.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³,
//! T in Julian centuries from J2000.0.

use jataka_time::jd_to_centuries;

/// Mean obliquity at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111;

/// Mean obliquity of date in degrees.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    OBLIQUITY_J2000_DEG + t * (-0.013_004_166_7 + t * (-1.638_9e-7 + t * 5.036_1e-7))
}

/// Mean obliquity of date in radians.
pub fn mean_obliquity_rad(jd: f64) -> f64 {
    mean_obliquity_deg(jd).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_time::J2000_JD;

    #[test]
    fn value_at_j2000() {
        assert!((mean_obliquity_deg(J2000_JD) - OBLIQUITY_J2000_DEG).abs() < 1e-12);
    }

    #[test]
    fn decreases_over_last_century() {
        let e1900 = mean_obliquity_deg(J2000_JD - 36_525.0);
        // 23°27′08.26″ in 1900
        assert!((e1900 - 23.452_294).abs() < 1e-4, "ε1900 = {e1900}");
        assert!(e1900 > OBLIQUITY_J2000_DEG);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: ε0 = 23°26′27.407″
        let e = mean_obliquity_deg(2_446_895.5);
        assert!((e - 23.440_946).abs() < 1e-5, "ε = {e}");
    }
}
