//! Rule inference over an assembled sidereal chart.
//!
//! This crate provides:
//! - An immutable [`KnowledgeBase`] of yoga metadata, dosha text and
//!   strength tables, with a built-in classical catalog
//! - Shared chart-query helpers (lordship, offsets, conjunction, aspect)
//! - The yoga rule engine keyed by [`YogaId`]
//! - Mangal, Kaal Sarp and Sade Sati dosha detectors
//! - A heuristic additive planetary strength score
//!
//! Every rule reads the chart by reference and returns fresh values;
//! nothing here mutates its inputs.

pub mod dosha;
pub mod knowledge;
pub mod query;
pub mod strength;
pub mod yoga;

#[cfg(test)]
pub(crate) mod test_chart;

pub use dosha::{
    Dosha, DoshaKind, SadeSatiPhase, Severity, detect_doshas, kaal_sarp_dosha, mangal_dosha,
    mangal_offset, sade_sati, sade_sati_from_saturn,
};
pub use knowledge::{
    DoshaText, GrahaHouse, KnowledgeBase, StrengthTables, YogaCategory, YogaDefinition,
    YogaStrength,
};
pub use strength::{PlanetaryStrength, StrengthBreakdown, StrengthStatus, planetary_strengths};
pub use yoga::{ALL_YOGA_IDS, Yoga, YogaId, evaluate, is_present};
