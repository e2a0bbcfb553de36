//! Position-provider contract for chart computation.
//!
//! Chart assembly never computes planetary positions itself: it asks a
//! [`PositionProvider`] for tropical geocentric ecliptic coordinates of date.
//! [`AnalyticEphemeris`] is the bundled low-precision implementation; any
//! higher-precision backend can be plugged in by implementing the trait.
//!
//! Lunar nodes are computed points, not bodies, and are derived downstream
//! in `jataka_vedic_base::lunar_nodes`.

pub mod analytic;

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use analytic::AnalyticEphemeris;

/// Physical bodies a provider can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Outer planets: resolvable, but not part of the sidereal chart.
pub const OUTER_BODIES: [Body; 2] = [Body::Uranus, Body::Neptune];

impl Body {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }
}

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }
}

/// Tropical ecliptic coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees [-90, 90].
    pub latitude_deg: f64,
    /// Distance from the Earth's center in AU.
    pub distance_au: f64,
}

/// Core provider errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidQuery(&'static str),
    UnsupportedBody(Body),
    EpochOutOfRange { jd_utc: f64 },
    Provider(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery(msg) => write!(f, "invalid query: {msg}"),
            Self::UnsupportedBody(b) => write!(f, "unsupported body: {}", b.name()),
            Self::EpochOutOfRange { jd_utc } => write!(f, "epoch out of range: JD {jd_utc}"),
            Self::Provider(msg) => write!(f, "position provider error: {msg}"),
        }
    }
}

impl Error for EngineError {}

/// Source of geocentric tropical positions.
///
/// Implementations must be [`Send`] + [`Sync`] so a single provider can be
/// shared across threads computing independent charts.
pub trait PositionProvider: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Geocentric ecliptic position of `body` (equinox of date) at a UTC Julian Date.
    fn ecliptic_position(
        &self,
        body: Body,
        jd_utc: f64,
        observer: &GeoLocation,
    ) -> Result<EclipticPosition, EngineError>;

    /// Greenwich sidereal time in degrees [0, 360).
    fn sidereal_time_deg(&self, jd_utc: f64) -> f64 {
        jataka_time::gmst_deg(jd_utc)
    }
}
