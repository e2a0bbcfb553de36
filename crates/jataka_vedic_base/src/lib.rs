//! Sidereal chart primitives built on tropical positions.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra tables with lordship
//! - Linear ayanamsha and mean lunar nodes
//! - Lagna/MC from local sidereal time, Porphyry cusps, whole-sign bhavas
//! - Navamsa (D9) mapping
//! - Dignity, natural friendship, benefic classification and house aspects
//! - Vimshottari mahadasha generation
//!
//! Everything here is pure math over longitudes; no ephemeris access.
//! Clean-room implementation from BPHS and standard spherical astronomy.

pub mod amsha;
pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod graha_relationships;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use amsha::{Amsha, AmshaPosition, amsha_position, navamsa_rashi_index};
pub use ayanamsha::{LinearAyanamsha, ayanamsha_deg};
pub use bhava::{
    Bhava, HouseGroup, house_offset, porphyry_cusps, whole_sign_bhavas, whole_sign_house,
};
pub use dasha::{
    BirthBalance, DAYS_PER_YEAR, DashaLevel, DashaPeriod, VIMSHOTTARI_CYCLE_YEARS,
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, find_active_period, vimshottari_mahadashas,
    vimshottari_years,
};
pub use drishti::{aspect_offsets, aspected_houses, aspects_house};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord, rashi_lord_by_index};
pub use graha_relationships::{
    BeneficNature, Dignity, NaisargikaMaitri, debilitation_rashi,
    exaltation_rashi, is_debilitated, is_exalted, is_natural_benefic, is_own_sign,
    naisargika_maitri, natural_benefic_malefic, own_signs,
};
pub use lagna::{LagnaMc, lagna_and_mc_deg, lagna_longitude_deg, mc_longitude_deg};
pub use lunar_nodes::{MEAN_NODE_SPEED_DEG_PER_DAY, mean_ketu_deg, mean_rahu_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_lord,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use util::{normalize_180, normalize_360};
