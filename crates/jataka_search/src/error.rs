//! Error types for chart orchestration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_core::EngineError;
use jataka_time::TimeError;
use jataka_vedic_base::VedicError;

/// Errors from resolving and assembling a chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Birth input rejected before any computation.
    InvalidInput(String),
    /// Position provider failure.
    Engine(EngineError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Engine(e) => write!(f, "engine error: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<EngineError> for SearchError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_errors_are_input_errors() {
        let e: SearchError = TimeError::InvalidUtcOffset(20.0).into();
        assert_eq!(
            e,
            SearchError::InvalidInput("invalid UTC offset: 20 hours".to_string())
        );
    }

    #[test]
    fn engine_error_is_source() {
        let e: SearchError = EngineError::Provider("down".into()).into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "engine error: position provider error: down");
    }
}
