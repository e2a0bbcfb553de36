//! Error types for time normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil time parsing and UTC normalization.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Clock time string is not `HH:MM` (or `HH:MM:SS`).
    InvalidClockTime(String),
    /// UTC offset is non-finite or outside [-14, +14] hours.
    InvalidUtcOffset(f64),
    /// Instant cannot be represented.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClockTime(s) => write!(f, "invalid clock time: {s:?} (expected HH:MM)"),
            Self::InvalidUtcOffset(h) => write!(f, "invalid UTC offset: {h} hours"),
            Self::OutOfRange => write!(f, "instant out of representable range"),
        }
    }
}

impl Error for TimeError {}
