//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle difference to (-180, 180] degrees.
pub fn normalize_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}
