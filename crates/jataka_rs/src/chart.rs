//! Full chart pipeline.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use jataka_core::PositionProvider;
use jataka_search::{
    BirthDetails, D1Chart, D9Chart, DashaEntry, OuterPlanet, kundali_for_birth,
    outer_planet_positions, vimshottari_for_chart,
};
use jataka_vedic_ops::{
    Dosha, KnowledgeBase, PlanetaryStrength, Yoga, detect_doshas, evaluate, planetary_strengths,
};

use crate::config::ChartConfig;
use crate::error::JatakaError;

/// Everything computed for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub birth: BirthDetails,
    pub utc: DateTime<Utc>,
    pub jd_utc: f64,
    /// Reference instant for the current dasha and Sade Sati.
    pub as_of: DateTime<Utc>,
    pub d1: D1Chart,
    pub d9: D9Chart,
    pub dashas: Vec<DashaEntry>,
    pub yogas: Vec<Yoga>,
    pub doshas: Vec<Dosha>,
    pub strengths: Vec<PlanetaryStrength>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outer_planets: Vec<OuterPlanet>,
}

impl Chart {
    pub fn to_json(&self) -> Result<String, JatakaError> {
        serde_json::to_string_pretty(self).map_err(|e| JatakaError::Serialize(e.to_string()))
    }
}

/// Compute a complete chart.
///
/// `as_of` fixes the instant used for the current dasha and for transiting
/// Saturn, so the result depends only on its arguments.
pub fn compute_chart(
    birth: &BirthDetails,
    provider: &dyn PositionProvider,
    knowledge: &KnowledgeBase,
    config: &ChartConfig,
    as_of: DateTime<Utc>,
) -> Result<Chart, JatakaError> {
    config.validate()?;
    let positions = config.positions();
    let kundali = kundali_for_birth(birth, provider, &positions)?;
    log::debug!(
        "{}: {} (jd {:.5}), lagna {:.3}°, ayanamsha {:.4}°",
        birth.name,
        kundali.utc,
        kundali.jd_utc,
        kundali.d1.ascendant.sidereal_longitude,
        kundali.d1.ayanamsha_deg
    );

    let dashas = vimshottari_for_chart(&kundali.d1, kundali.jd_utc, as_of)?;
    let yogas = evaluate(&kundali.d1, &kundali.d9, knowledge);
    let observer = birth.location();
    let doshas = detect_doshas(
        &kundali.d1,
        provider,
        as_of,
        &observer,
        &config.ayanamsha,
        knowledge,
    )?;
    let strengths = planetary_strengths(&kundali.d1, &knowledge.strength);
    let outer_planets = if config.include_outer_planets {
        outer_planet_positions(provider, kundali.jd_utc, &observer, &positions)?
    } else {
        Vec::new()
    };
    log::debug!(
        "{} yogas, {} doshas present",
        yogas.len(),
        doshas.iter().filter(|d| d.present).count()
    );

    Ok(Chart {
        birth: birth.clone(),
        utc: kundali.utc,
        jd_utc: kundali.jd_utc,
        as_of,
        d1: kundali.d1,
        d9: kundali.d9,
        dashas,
        yogas,
        doshas,
        strengths,
        outer_planets,
    })
}

/// Load an alternate knowledge base from a JSON file.
pub fn load_knowledge(path: &Path) -> Result<KnowledgeBase, JatakaError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| JatakaError::Config(format!("{}: {e}", path.display())))?;
    let knowledge: KnowledgeBase = serde_json::from_str(&text)
        .map_err(|e| JatakaError::Config(format!("{}: {e}", path.display())))?;
    let missing = knowledge.missing_yogas();
    if !missing.is_empty() {
        log::warn!("{}: no text for {} yoga(s): {missing:?}", path.display(), missing.len());
    }
    Ok(knowledge)
}
