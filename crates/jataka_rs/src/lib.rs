//! One-call sidereal birth chart.
//!
//! [`compute_chart`] validates a [`BirthDetails`], resolves positions through
//! any [`PositionProvider`], assembles the D1 and D9 charts, and runs the
//! dasha, yoga, dosha and strength layers over them.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chrono::{NaiveDate, Utc};
//! use jataka_rs::*;
//!
//! let birth = BirthDetails {
//!     name: "New York".into(),
//!     date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
//!     time: "12:00".into(),
//!     latitude: 40.7128,
//!     longitude: -74.0060,
//!     utc_offset_hours: -5.0,
//! };
//! let chart = compute_chart(
//!     &birth,
//!     &AnalyticEphemeris::new(),
//!     &KnowledgeBase::classical(),
//!     &ChartConfig::default(),
//!     Utc::now(),
//! )
//! .unwrap();
//! println!("{}", chart.to_json().unwrap());
//! ```

pub mod chart;
pub mod config;
pub mod error;

pub use chart::{Chart, compute_chart, load_knowledge};
pub use config::ChartConfig;
pub use error::JatakaError;

// Re-export the types callers need to build inputs and read results.
pub use jataka_core::{AnalyticEphemeris, Body, EclipticPosition, GeoLocation, PositionProvider};
pub use jataka_search::{
    Ascendant, BirthDetails, D1Chart, D9Chart, DashaEntry, OuterPlanet, PlanetPosition,
    SearchError, VargaPosition,
};
pub use jataka_vedic_base::{
    DashaLevel, Graha, LinearAyanamsha, Nakshatra, NakshatraInfo, Rashi, RashiInfo, ayanamsha_deg,
    nakshatra_from_longitude, rashi_from_longitude,
};
pub use jataka_vedic_ops::{
    Dosha, DoshaKind, KnowledgeBase, PlanetaryStrength, SadeSatiPhase, Severity, StrengthStatus,
    Yoga, YogaCategory, YogaId,
};
