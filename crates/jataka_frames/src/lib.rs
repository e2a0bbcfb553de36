//! Frame helpers for chart computation.
//!
//! Provides the mean obliquity of the ecliptic of date and
//! Cartesian ↔ spherical conversions used by the analytic ephemeris.

pub mod obliquity;
pub mod spherical;

pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, mean_obliquity_rad};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
