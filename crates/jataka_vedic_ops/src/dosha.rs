//! Mangal, Kaal Sarp and Sade Sati detectors.
//!
//! Each detector returns a [`Dosha`] carrying presence, severity, a short
//! explanation and the static remedy list from the [`KnowledgeBase`]. A chart
//! missing a required graha yields an explicit "not present" rather than an
//! error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jataka_core::{GeoLocation, PositionProvider};
use jataka_search::{D1Chart, SearchError, graha_sidereal_longitude};
use jataka_time::datetime_to_jd_utc;
use jataka_vedic_base::{Graha, LinearAyanamsha, SAPTA_GRAHAS, house_offset, rashi_from_longitude};

use crate::knowledge::KnowledgeBase;
use crate::query::{house_of, rashi_of};

/// Dosha identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoshaKind {
    Mangal,
    KaalSarp,
    SadeSati,
}

impl DoshaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mangal => "Mangal Dosha",
            Self::KaalSarp => "Kaal Sarp Dosha",
            Self::SadeSati => "Sade Sati",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

/// Saturn's position in the 7½-year transit over the natal Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SadeSatiPhase {
    /// Saturn in the 12th from the Moon.
    Rising,
    /// Saturn over the Moon.
    Peak,
    /// Saturn in the 2nd from the Moon.
    Setting,
}

/// Detector output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dosha {
    pub kind: DoshaKind,
    pub name: String,
    pub present: bool,
    pub severity: Severity,
    /// Why the detector fired (or did not), in terms of this chart.
    pub explanation: String,
    /// Static text from the knowledge base.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<SadeSatiPhase>,
    /// Empty when the dosha is absent.
    pub remedies: Vec<String>,
}

impl Dosha {
    fn new(
        kind: DoshaKind,
        knowledge: &KnowledgeBase,
        severity: Severity,
        explanation: String,
    ) -> Self {
        let present = severity != Severity::None;
        let text = knowledge.dosha(kind);
        Self {
            kind,
            name: text.map_or_else(|| kind.name().to_string(), |t| t.name.clone()),
            present,
            severity,
            explanation,
            description: text.map(|t| t.description.clone()).unwrap_or_default(),
            phase: None,
            remedies: match text {
                Some(t) if present => t.remedies.clone(),
                _ => Vec::new(),
            },
        }
    }

    fn missing(kind: DoshaKind, knowledge: &KnowledgeBase, graha: Graha) -> Self {
        Self::new(
            kind,
            knowledge,
            Severity::None,
            format!("{} not found in chart", graha.english_name()),
        )
    }
}

/// Houses counted from `ref_house` to `mars_house`, 1-12, with a zero
/// distance reported as 12.
pub fn mangal_offset(mars_house: u8, ref_house: u8) -> u8 {
    match (mars_house % 12 + 12 - ref_house % 12) % 12 {
        0 => 12,
        n => n,
    }
}

const MANGAL_OFFSETS: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Mars counted from the lagna, the Moon and Venus.
pub fn mangal_dosha(chart: &D1Chart, knowledge: &KnowledgeBase) -> Dosha {
    let kind = DoshaKind::Mangal;
    let Some(mars) = house_of(chart, Graha::Mangal) else {
        return Dosha::missing(kind, knowledge, Graha::Mangal);
    };
    let Some(moon) = house_of(chart, Graha::Chandra) else {
        return Dosha::missing(kind, knowledge, Graha::Chandra);
    };
    let Some(venus) = house_of(chart, Graha::Shukra) else {
        return Dosha::missing(kind, knowledge, Graha::Shukra);
    };

    let refs = [("lagna", 1), ("Moon", moon), ("Venus", venus)];
    let triggered: Vec<&str> = refs
        .iter()
        .filter(|&&(_, r)| MANGAL_OFFSETS.contains(&mangal_offset(mars, r)))
        .map(|&(label, _)| label)
        .collect();

    let severity = match triggered.as_slice() {
        [] => Severity::None,
        [_, _, ..] => Severity::High,
        ["lagna"] => Severity::Medium,
        [_] => Severity::Low,
    };
    log::trace!("mangal dosha: mars house {mars}, triggered {triggered:?}");
    let explanation = if triggered.is_empty() {
        format!("Mars in house {mars} is clear of the lagna, Moon and Venus")
    } else {
        format!("Mars in house {mars} afflicts from the {}", triggered.join(", "))
    };
    Dosha::new(kind, knowledge, severity, explanation)
}

/// Whether `rashi` lies on the forward arc `start..=end`.
fn on_arc(start: u8, end: u8, rashi: u8) -> bool {
    house_offset(start, rashi) <= house_offset(start, end)
}

/// All seven sapta grahas on one side of the Rahu-Ketu axis.
pub fn kaal_sarp_dosha(chart: &D1Chart, knowledge: &KnowledgeBase) -> Dosha {
    let kind = DoshaKind::KaalSarp;
    let Some(rahu) = rashi_of(chart, Graha::Rahu) else {
        return Dosha::missing(kind, knowledge, Graha::Rahu);
    };
    let Some(ketu) = rashi_of(chart, Graha::Ketu) else {
        return Dosha::missing(kind, knowledge, Graha::Ketu);
    };
    let mut rashis = Vec::with_capacity(SAPTA_GRAHAS.len());
    for graha in SAPTA_GRAHAS {
        match rashi_of(chart, graha) {
            Some(r) => rashis.push(r),
            None => return Dosha::missing(kind, knowledge, graha),
        }
    }

    let rahu_side = rashis.iter().all(|&r| on_arc(rahu, ketu, r));
    let ketu_side = rashis.iter().all(|&r| on_arc(ketu, rahu, r));
    let (severity, explanation) = if rahu_side {
        (Severity::High, "All planets lie on the arc from Rahu to Ketu".to_string())
    } else if ketu_side {
        (Severity::High, "All planets lie on the arc from Ketu to Rahu".to_string())
    } else {
        (Severity::None, "Planets fall on both sides of the nodal axis".to_string())
    };
    Dosha::new(kind, knowledge, severity, explanation)
}

/// Sade Sati for a known transiting Saturn rashi.
pub fn sade_sati_from_saturn(
    chart: &D1Chart,
    saturn_rashi: u8,
    knowledge: &KnowledgeBase,
) -> Dosha {
    let kind = DoshaKind::SadeSati;
    let Some(moon) = rashi_of(chart, Graha::Chandra) else {
        return Dosha::missing(kind, knowledge, Graha::Chandra);
    };
    let distance = house_offset(moon, saturn_rashi);
    let phase = match distance {
        11 => Some(SadeSatiPhase::Rising),
        0 => Some(SadeSatiPhase::Peak),
        1 => Some(SadeSatiPhase::Setting),
        _ => None,
    };
    let severity = match phase {
        Some(SadeSatiPhase::Peak) => Severity::High,
        Some(_) => Severity::Medium,
        None => Severity::None,
    };
    let explanation = format!(
        "Transiting Saturn occupies house {} counted from the natal Moon",
        distance + 1
    );
    let mut dosha = Dosha::new(kind, knowledge, severity, explanation);
    dosha.phase = phase;
    dosha
}

/// Sade Sati with Saturn resolved from `provider` at `as_of`.
pub fn sade_sati(
    chart: &D1Chart,
    provider: &dyn PositionProvider,
    as_of: DateTime<Utc>,
    observer: &GeoLocation,
    ayanamsha: &LinearAyanamsha,
    knowledge: &KnowledgeBase,
) -> Result<Dosha, SearchError> {
    let jd = datetime_to_jd_utc(&as_of);
    let saturn = graha_sidereal_longitude(provider, Graha::Shani, jd, observer, ayanamsha)?;
    let rashi = rashi_from_longitude(saturn).rashi.index();
    log::debug!("sade sati: transiting saturn {saturn:.3}° (rashi {rashi}) at {as_of}");
    Ok(sade_sati_from_saturn(chart, rashi, knowledge))
}

/// Every detector, in [`DoshaKind`] order.
pub fn detect_doshas(
    chart: &D1Chart,
    provider: &dyn PositionProvider,
    as_of: DateTime<Utc>,
    observer: &GeoLocation,
    ayanamsha: &LinearAyanamsha,
    knowledge: &KnowledgeBase,
) -> Result<Vec<Dosha>, SearchError> {
    Ok(vec![
        mangal_dosha(chart, knowledge),
        kaal_sarp_dosha(chart, knowledge),
        sade_sati(chart, provider, as_of, observer, ayanamsha, knowledge)?,
    ])
}
