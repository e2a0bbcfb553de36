//! Chart computation settings, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use jataka_search::GrahaPositionsConfig;
use jataka_vedic_base::{LinearAyanamsha, MEAN_NODE_SPEED_DEG_PER_DAY};

use crate::error::JatakaError;

/// Settings for [`compute_chart`](crate::compute_chart).
///
/// Every field is optional in TOML; missing fields keep their defaults.
///
/// ```toml
/// retrograde_step_days = 0.5
/// include_outer_planets = true
///
/// [ayanamsha]
/// reference_deg = 23.85
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub ayanamsha: LinearAyanamsha,
    /// Sampling step for speed and retrograde detection, in days.
    pub retrograde_step_days: f64,
    /// Speed assigned to both mean nodes, degrees per day.
    pub node_speed_deg_per_day: f64,
    /// Also resolve Uranus and Neptune.
    pub include_outer_planets: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsha: LinearAyanamsha::default(),
            retrograde_step_days: 1.0,
            node_speed_deg_per_day: MEAN_NODE_SPEED_DEG_PER_DAY,
            include_outer_planets: false,
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, JatakaError> {
        let config: Self = toml::from_str(s).map_err(|e| JatakaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, JatakaError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| JatakaError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), JatakaError> {
        if !(self.retrograde_step_days.is_finite() && self.retrograde_step_days > 0.0) {
            return Err(JatakaError::Config(format!(
                "retrograde_step_days must be positive, got {}",
                self.retrograde_step_days
            )));
        }
        if !self.node_speed_deg_per_day.is_finite() {
            return Err(JatakaError::Config("node_speed_deg_per_day must be finite".into()));
        }
        if !(self.ayanamsha.reference_deg.is_finite()
            && self.ayanamsha.rate_arcsec_per_year.is_finite())
        {
            return Err(JatakaError::Config("ayanamsha must be finite".into()));
        }
        Ok(())
    }

    /// Position-resolution subset.
    pub fn positions(&self) -> GrahaPositionsConfig {
        GrahaPositionsConfig {
            ayanamsha: self.ayanamsha,
            retrograde_step_days: self.retrograde_step_days,
            node_speed_deg_per_day: self.node_speed_deg_per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_positions_default() {
        assert_eq!(ChartConfig::default().positions(), GrahaPositionsConfig::default());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let c = ChartConfig::from_toml_str(
            "retrograde_step_days = 0.5\ninclude_outer_planets = true\n\n[ayanamsha]\nreference_deg = 23.85\n",
        )
        .unwrap();
        assert_eq!(c.retrograde_step_days, 0.5);
        assert!(c.include_outer_planets);
        assert_eq!(c.ayanamsha.reference_deg, 23.85);
        assert_eq!(
            c.ayanamsha.rate_arcsec_per_year,
            LinearAyanamsha::default().rate_arcsec_per_year
        );
    }

    #[test]
    fn rejects_non_positive_step() {
        let err = ChartConfig::from_toml_str("retrograde_step_days = 0.0").unwrap_err();
        assert!(matches!(err, JatakaError::Config(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ChartConfig::from_toml_str("retrograde_step_days = \"soon\"").unwrap_err();
        assert!(matches!(err, JatakaError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = ChartConfig::from_file(Path::new("/nonexistent/jataka.toml")).unwrap_err();
        assert!(matches!(err, JatakaError::Config(_)));
    }
}
