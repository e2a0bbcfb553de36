//! Error type for the one-call chart API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_search::SearchError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum JatakaError {
    /// Input validation or provider failure while building the chart.
    Search(SearchError),
    /// Unreadable or invalid configuration / knowledge file.
    Config(String),
    /// Output serialization failed.
    Serialize(String),
}

impl Display for JatakaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "{e}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl Error for JatakaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Config(_) | Self::Serialize(_) => None,
        }
    }
}

impl From<SearchError> for JatakaError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_core::EngineError;

    #[test]
    fn search_error_keeps_source() {
        let err = JatakaError::from(SearchError::Engine(EngineError::InvalidQuery("x")));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("engine error"));
    }

    #[test]
    fn config_display() {
        let err = JatakaError::Config("bad step".into());
        assert_eq!(err.to_string(), "config error: bad step");
        assert!(err.source().is_none());
    }
}
