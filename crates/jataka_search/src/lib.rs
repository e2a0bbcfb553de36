//! Chart orchestration against a position provider.
//!
//! This crate provides:
//! - Validated birth input and its UTC instant
//! - Sidereal graha positions with speed/retrograde and mean nodes
//! - Ascendant, D1 (whole-sign) and D9 chart assembly
//! - Vimshottari mahadasha timeline for a birth

pub mod birth;
pub mod dasha;
pub mod error;
pub mod jyotish;
pub mod jyotish_types;
pub mod kundali;

pub use birth::BirthDetails;
pub use dasha::{DashaEntry, dasha_entries, vimshottari_for_chart};
pub use error::SearchError;
pub use jyotish::{
    graha_sidereal_longitude, graha_sidereal_longitudes, graha_states, outer_planet_positions,
};
pub use jyotish_types::{
    Ascendant, D1Chart, D9Chart, GrahaLongitudes, GrahaPositionsConfig, GrahaState, GrahaStates,
    OuterPlanet, PlanetPosition, VargaPosition,
};
pub use kundali::{Kundali, ascendant_at, assemble_d1, d1_chart, d9_chart, kundali_for_birth};
