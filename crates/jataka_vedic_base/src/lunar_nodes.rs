//! Mean lunar node (Rahu/Ketu) longitude.
//!
//! Rahu is the Moon's mean ascending node (Meeus, "Astronomical Algorithms"
//! 2nd ed., eq. 47.7):
//!
//! `Ω = 125.04455501 − 1934.136261·T + 0.0020754·T² + 0.0000009·T³`
//!
//! with T in Julian centuries since J2000.0. Ketu is defined as Rahu + 180°
//! exactly and is never resolved independently.

use crate::util::normalize_360;

/// Mean motion of the node in degrees per day (always retrograde).
pub const MEAN_NODE_SPEED_DEG_PER_DAY: f64 = -0.052_953_808_3;

/// Mean Rahu tropical longitude in degrees [0, 360).
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_360(125.044_555_01 + t * (-1_934.136_261 + t * (0.002_075_4 + t * 0.000_000_9)))
}

/// Mean Ketu tropical longitude in degrees [0, 360).
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::normalize_180;

    #[test]
    fn rahu_at_j2000() {
        assert!((mean_rahu_deg(0.0) - 125.044_555_01).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: T = -0.077221081451, Ω = 274.400656°
        let r = mean_rahu_deg(-0.077_221_081_451);
        assert!((r - 274.400_656).abs() < 1e-4, "Ω = {r}");
    }

    #[test]
    fn ketu_opposite() {
        for &t in &[-1.0, -0.5, 0.0, 0.3, 1.0] {
            let diff = normalize_360(mean_ketu_deg(t) - mean_rahu_deg(t));
            assert!((diff - 180.0).abs() < 1e-9, "t={t}: diff {diff}");
        }
    }

    #[test]
    fn node_regresses() {
        let d = normalize_180(mean_rahu_deg(1.0 / 36_525.0) - mean_rahu_deg(0.0));
        assert!((d - MEAN_NODE_SPEED_DEG_PER_DAY).abs() < 1e-4, "daily = {d}");
    }
}
