//! Vimshottari dasha (planetary period) calculation.
//!
//! Only the mahadasha level is generated. The level enum still names the
//! deeper levels so serialized timelines stay compatible with tools that
//! carry sub-periods.

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::BirthBalance;
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
pub use vimshottari::{
    VIMSHOTTARI_CYCLE_YEARS, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, find_active_period,
    vimshottari_mahadashas, vimshottari_years,
};
