//! Heuristic additive planetary strength.
//!
//! Score = base + positional + directional + motion + marana karaka, clamped
//! to [0, 100]. Every points value and lookup table comes from
//! [`StrengthTables`], so an alternate catalog can re-weight the score.

use serde::Serialize;

use jataka_search::{D1Chart, PlanetPosition};
use jataka_vedic_base::{ALL_GRAHAS, Dignity, Graha};

use crate::knowledge::StrengthTables;

/// Component points behind a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StrengthBreakdown {
    /// Exaltation, debilitation, own sign or sign-lord friendship.
    pub positional: i32,
    /// Dig bala.
    pub directional: i32,
    /// Retrograde bonus.
    pub motion: i32,
    /// Marana karaka sthana penalty.
    pub marana_karaka: i32,
}

impl StrengthBreakdown {
    pub fn total(&self) -> i32 {
        self.positional + self.directional + self.motion + self.marana_karaka
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthStatus {
    Exalted,
    Debilitated,
    Strong,
    Average,
    Weak,
}

impl StrengthStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::Strong => "Strong",
            Self::Average => "Average",
            Self::Weak => "Weak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryStrength {
    pub graha: Graha,
    /// 0-100.
    pub score: i32,
    pub status: StrengthStatus,
    pub breakdown: StrengthBreakdown,
}

fn positional_points(dignity: Dignity, tables: &StrengthTables) -> i32 {
    match dignity {
        Dignity::Exalted => tables.exalted,
        Dignity::Debilitated => tables.debilitated,
        Dignity::OwnSign => tables.own_sign,
        Dignity::Mitra => tables.friend_sign,
        Dignity::Shatru => tables.enemy_sign,
        Dignity::Sama => 0,
    }
}

fn score_planet(planet: &PlanetPosition, tables: &StrengthTables) -> PlanetaryStrength {
    let graha = planet.graha;
    let dignity = tables.dignity(graha, planet.rashi_index());
    let breakdown = StrengthBreakdown {
        positional: positional_points(dignity, tables),
        directional: if tables.directional_house(graha) == Some(planet.house) {
            tables.directional
        } else {
            0
        },
        motion: if planet.retrograde && !graha.is_node() {
            tables.retrograde
        } else {
            0
        },
        marana_karaka: if tables.marana_karaka_house(graha) == Some(planet.house) {
            tables.marana_karaka
        } else {
            0
        },
    };
    let score = (tables.base + breakdown.total()).clamp(0, 100);
    let status = match dignity {
        Dignity::Exalted => StrengthStatus::Exalted,
        Dignity::Debilitated => StrengthStatus::Debilitated,
        _ if score > tables.strong_above => StrengthStatus::Strong,
        _ if score < tables.weak_below => StrengthStatus::Weak,
        _ => StrengthStatus::Average,
    };
    log::trace!(
        "strength {}: {score} ({}) {breakdown:?}",
        graha.english_name(),
        status.label()
    );
    PlanetaryStrength {
        graha,
        score,
        status,
        breakdown,
    }
}

/// Scores every graha present in the chart, in graha order.
pub fn planetary_strengths(chart: &D1Chart, tables: &StrengthTables) -> Vec<PlanetaryStrength> {
    ALL_GRAHAS
        .iter()
        .filter_map(|&g| chart.find(g))
        .map(|p| score_planet(p, tables))
        .collect()
}
