//! Amsha (divisional chart) calculations.
//!
//! Each amsha divides the 30-degree rashi span into N equal parts. The
//! parts are laid end to end around the zodiac starting from Mesha
//! (parivritti order), so part `k` of rashi `r` lands in rashi
//! `(r·N + k) mod 12`. For N = 9 this is the classical navamsa.

use serde::Serialize;

use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Amsha {
    /// Rashi chart (identity).
    D1,
    /// Navamsa.
    D9,
}

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D9 => 9,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D9 => "Navamsa",
        }
    }
}

/// A longitude after amsha transformation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmshaPosition {
    pub rashi: Rashi,
    /// 0-based rashi index in the divisional chart.
    pub rashi_index: u8,
    /// Degrees within the divisional rashi [0, 30).
    pub degrees_in_rashi: f64,
    /// Divisional longitude [0, 360).
    pub longitude: f64,
}

/// Transform a sidereal longitude through an amsha division.
pub fn amsha_position(sidereal_lon: f64, amsha: Amsha) -> AmshaPosition {
    let lon = normalize_360(sidereal_lon);
    let amsha_lon = if amsha == Amsha::D1 {
        lon
    } else {
        let rashi_idx = (lon / 30.0).floor().min(11.0) as u16;
        let pos_in_rashi = lon - rashi_idx as f64 * 30.0;
        let total_divisions = amsha.divisions();
        let deg_per_div = 30.0 / total_divisions as f64;
        let div_idx = ((pos_in_rashi / deg_per_div).floor() as u16).min(total_divisions - 1);
        let target = (rashi_idx * total_divisions + div_idx) % 12;
        let pos_in_div = (pos_in_rashi - div_idx as f64 * deg_per_div).max(0.0);
        normalize_360(target as f64 * 30.0 + pos_in_div * total_divisions as f64)
    };

    let info = rashi_from_longitude(amsha_lon);
    AmshaPosition {
        rashi: info.rashi,
        rashi_index: info.rashi_index,
        degrees_in_rashi: info.degrees_in_rashi,
        longitude: amsha_lon,
    }
}

/// Navamsa rashi index: `(rashi·9 + floor(deg_in_rashi / 3°20′)) mod 12`.
pub fn navamsa_rashi_index(sidereal_lon: f64) -> u8 {
    amsha_position(sidereal_lon, Amsha::D9).rashi_index
}
