//! Result types for sidereal positions and assembled charts.

use serde::{Deserialize, Serialize};

use jataka_core::Body;
use jataka_vedic_base::{
    Amsha, Bhava, Graha, LinearAyanamsha, MEAN_NODE_SPEED_DEG_PER_DAY, Nakshatra, Rashi,
};

/// Sidereal longitudes for all 9 grahas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaLongitudes {
    /// Sidereal longitudes indexed by `Graha::index()` (0-8).
    pub longitudes: [f64; 9],
}

impl GrahaLongitudes {
    /// Get the sidereal longitude for a specific graha.
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }

    /// Get the 0-based rashi index (0-11) for a specific graha.
    pub fn rashi_index(&self, graha: Graha) -> u8 {
        ((self.longitude(graha) / 30.0).floor() as u8).min(11)
    }
}

/// Configuration for graha position resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrahaPositionsConfig {
    /// Tropical → sidereal offset model.
    pub ayanamsha: LinearAyanamsha,
    /// Sampling step for speed and retrograde detection, in days.
    pub retrograde_step_days: f64,
    /// Fixed speed assigned to both mean nodes, degrees per day.
    pub node_speed_deg_per_day: f64,
}

impl Default for GrahaPositionsConfig {
    fn default() -> Self {
        Self {
            ayanamsha: LinearAyanamsha::default(),
            retrograde_step_days: 1.0,
            node_speed_deg_per_day: MEAN_NODE_SPEED_DEG_PER_DAY,
        }
    }
}

/// Resolved sidereal state of one graha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaState {
    pub graha: Graha,
    /// Sidereal longitude in degrees [0, 360).
    pub sidereal_longitude: f64,
    /// Ecliptic latitude in degrees (0 for nodes).
    pub latitude_deg: f64,
    /// Geocentric distance in AU (0 for nodes).
    pub distance_au: f64,
    /// Longitude rate in degrees per day.
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
}

/// All 9 graha states at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaStates {
    /// Indexed by `Graha::index()`.
    pub states: [GrahaState; 9],
    /// Ayanamsha applied, degrees.
    pub ayanamsha_deg: f64,
}

impl GrahaStates {
    pub fn get(&self, graha: Graha) -> &GrahaState {
        &self.states[graha.index() as usize]
    }

    pub fn longitudes(&self) -> GrahaLongitudes {
        GrahaLongitudes {
            longitudes: self.states.map(|s| s.sidereal_longitude),
        }
    }
}

/// A graha placed in the D1 chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    pub name: &'static str,
    pub english_name: &'static str,
    pub sidereal_longitude: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    pub speed_deg_per_day: f64,
    pub rashi: Rashi,
    /// Degrees within the rashi [0, 30).
    pub degrees_in_rashi: f64,
    /// Whole-sign house 1-12.
    pub house: u8,
    pub retrograde: bool,
    pub nakshatra: Nakshatra,
    pub nakshatra_lord: Graha,
    /// Pada 1-4.
    pub pada: u8,
}

impl PlanetPosition {
    pub fn rashi_index(&self) -> u8 {
        self.rashi.index()
    }
}

/// Sidereal ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ascendant {
    pub sidereal_longitude: f64,
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

/// Rashi chart with whole-sign houses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct D1Chart {
    pub ascendant: Ascendant,
    /// Sidereal midheaven in degrees.
    pub midheaven: f64,
    /// Ayanamsha applied, degrees.
    pub ayanamsha_deg: f64,
    /// The 9 grahas in `ALL_GRAHAS` order.
    pub planets: Vec<PlanetPosition>,
    /// Houses 1-12.
    pub houses: Vec<Bhava>,
}

impl D1Chart {
    /// Position of a graha, if present.
    pub fn find(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.graha == graha)
    }

    /// Position of a graha.
    ///
    /// # Panics
    /// If the chart lacks the graha. Assembled charts always carry all 9.
    pub fn planet(&self, graha: Graha) -> &PlanetPosition {
        self.find(graha)
            .unwrap_or_else(|| panic!("D1 chart is missing {}", graha.english_name()))
    }

    pub fn lagna_rashi_index(&self) -> u8 {
        self.ascendant.rashi.index()
    }

    /// House 1-12, if in range.
    pub fn house(&self, number: u8) -> Option<&Bhava> {
        self.houses.iter().find(|h| h.number == number)
    }

    /// Sign lord of a house.
    pub fn house_lord(&self, number: u8) -> Option<Graha> {
        self.house(number).map(|h| h.lord)
    }

    /// Whole-sign house of a graha.
    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.find(graha).map(|p| p.house)
    }
}

/// A graha in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VargaPosition {
    pub graha: Graha,
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
    /// Divisional longitude [0, 360).
    pub longitude: f64,
    pub retrograde: bool,
}

/// Navamsa chart. Carries no houses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct D9Chart {
    pub amsha: Amsha,
    pub ascendant_rashi: Rashi,
    pub ascendant_longitude: f64,
    pub planets: Vec<VargaPosition>,
}

impl D9Chart {
    pub fn find(&self, graha: Graha) -> Option<&VargaPosition> {
        self.planets.iter().find(|p| p.graha == graha)
    }
}

/// Uranus/Neptune, resolved outside the 9-graha chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OuterPlanet {
    pub body: Body,
    pub sidereal_longitude: f64,
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
    pub retrograde: bool,
}
