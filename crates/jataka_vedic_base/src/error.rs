//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from pure-math chart primitives.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Non-finite or otherwise unusable numeric input.
    InvalidInput(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for VedicError {}
