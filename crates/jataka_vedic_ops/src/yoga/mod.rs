//! Yoga rule engine.
//!
//! Each rule is tagged by a stable [`YogaId`]; [`is_present`] maps the id to
//! its predicate over the D1 (and, where needed, D9) chart. Display text is
//! looked up separately in the [`KnowledgeBase`] and never influences
//! matching.

mod arista;
mod dhana;
mod mahapurusha;
mod raja;
mod special;
mod vipareeta;

use serde::{Deserialize, Serialize};

use jataka_search::{D1Chart, D9Chart};

use jataka_vedic_base::{ALL_GRAHAS, Graha, is_natural_benefic};

use crate::knowledge::{KnowledgeBase, YogaCategory, YogaDefinition, YogaStrength};

fn natural(benefic: bool) -> Vec<Graha> {
    ALL_GRAHAS
        .into_iter()
        .filter(|&g| is_natural_benefic(g) == benefic)
        .collect()
}

fn benefics() -> Vec<Graha> {
    natural(true)
}

fn malefics() -> Vec<Graha> {
    natural(false)
}

/// Grahas other than the luminaries and nodes.
const TARA_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Stable identifiers for every rule in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YogaId {
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Sasa,
    Gajakesari,
    KendraTrikonaRaja,
    DharmaKarmadhipati,
    NeechaBhangaRaja,
    Dhana,
    Lakshmi,
    Vasumati,
    ChandraMangala,
    Harsha,
    Sarala,
    Vimala,
    Kemadruma,
    Grahana,
    Shakata,
    Daridra,
    GuruChandala,
    PapaKartari,
    Budhaditya,
    Amala,
    Adhi,
    Saraswati,
    Sunapha,
    Anapha,
    Durudhara,
    Parivartana,
    ShubhaKartari,
}

/// Every rule in catalog order.
pub const ALL_YOGA_IDS: [YogaId; 31] = [
    YogaId::Ruchaka,
    YogaId::Bhadra,
    YogaId::Hamsa,
    YogaId::Malavya,
    YogaId::Sasa,
    YogaId::Gajakesari,
    YogaId::KendraTrikonaRaja,
    YogaId::DharmaKarmadhipati,
    YogaId::NeechaBhangaRaja,
    YogaId::Dhana,
    YogaId::Lakshmi,
    YogaId::Vasumati,
    YogaId::ChandraMangala,
    YogaId::Harsha,
    YogaId::Sarala,
    YogaId::Vimala,
    YogaId::Kemadruma,
    YogaId::Grahana,
    YogaId::Shakata,
    YogaId::Daridra,
    YogaId::GuruChandala,
    YogaId::PapaKartari,
    YogaId::Budhaditya,
    YogaId::Amala,
    YogaId::Adhi,
    YogaId::Saraswati,
    YogaId::Sunapha,
    YogaId::Anapha,
    YogaId::Durudhara,
    YogaId::Parivartana,
    YogaId::ShubhaKartari,
];

impl YogaId {
    /// Short identifier, used when a catalog lacks text for the rule.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ruchaka => "Ruchaka",
            Self::Bhadra => "Bhadra",
            Self::Hamsa => "Hamsa",
            Self::Malavya => "Malavya",
            Self::Sasa => "Sasa",
            Self::Gajakesari => "Gajakesari",
            Self::KendraTrikonaRaja => "Kendra-Trikona Raja",
            Self::DharmaKarmadhipati => "Dharma-Karmadhipati",
            Self::NeechaBhangaRaja => "Neecha Bhanga Raja",
            Self::Dhana => "Dhana",
            Self::Lakshmi => "Lakshmi",
            Self::Vasumati => "Vasumati",
            Self::ChandraMangala => "Chandra-Mangala",
            Self::Harsha => "Harsha",
            Self::Sarala => "Sarala",
            Self::Vimala => "Vimala",
            Self::Kemadruma => "Kemadruma",
            Self::Grahana => "Grahana",
            Self::Shakata => "Shakata",
            Self::Daridra => "Daridra",
            Self::GuruChandala => "Guru-Chandala",
            Self::PapaKartari => "Papa Kartari",
            Self::Budhaditya => "Budhaditya",
            Self::Amala => "Amala",
            Self::Adhi => "Adhi",
            Self::Saraswati => "Saraswati",
            Self::Sunapha => "Sunapha",
            Self::Anapha => "Anapha",
            Self::Durudhara => "Durudhara",
            Self::Parivartana => "Parivartana",
            Self::ShubhaKartari => "Shubha Kartari",
        }
    }

    /// Family the rule belongs to.
    pub const fn category(self) -> YogaCategory {
        use YogaId::*;
        match self {
            Ruchaka | Bhadra | Hamsa | Malavya | Sasa => YogaCategory::PanchaMahapurusha,
            Gajakesari | KendraTrikonaRaja | DharmaKarmadhipati | NeechaBhangaRaja => {
                YogaCategory::Raja
            }
            Dhana | Lakshmi | Vasumati | ChandraMangala => YogaCategory::Dhana,
            Harsha | Sarala | Vimala => YogaCategory::Vipareeta,
            Kemadruma | Grahana | Shakata | Daridra | GuruChandala | PapaKartari => {
                YogaCategory::Arista
            }
            Budhaditya | Amala | Adhi | Saraswati | Sunapha | Anapha | Durudhara
            | Parivartana | ShubhaKartari => YogaCategory::Special,
        }
    }
}

/// A satisfied yoga with its static text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Yoga {
    pub id: YogaId,
    pub name: String,
    pub category: YogaCategory,
    pub strength: YogaStrength,
    pub description: String,
    pub formation: String,
    pub result: String,
    pub life_areas: Vec<String>,
}

impl Yoga {
    fn from_definition(def: &YogaDefinition) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            category: def.category,
            strength: def.strength,
            description: def.description.clone(),
            formation: def.formation.clone(),
            result: def.result.clone(),
            life_areas: def.life_areas.clone(),
        }
    }

    fn untitled(id: YogaId) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            category: id.category(),
            strength: YogaStrength::Moderate,
            description: String::new(),
            formation: String::new(),
            result: String::new(),
            life_areas: Vec::new(),
        }
    }
}

/// Whether a single rule holds for the chart.
pub fn is_present(id: YogaId, d1: &D1Chart, d9: &D9Chart) -> bool {
    use YogaId::*;
    match id {
        Ruchaka | Bhadra | Hamsa | Malavya | Sasa => mahapurusha::holds(id, d1),
        Gajakesari => raja::gajakesari(d1),
        KendraTrikonaRaja => raja::kendra_trikona(d1),
        DharmaKarmadhipati => raja::dharma_karmadhipati(d1),
        NeechaBhangaRaja => raja::neecha_bhanga(d1, d9),
        Dhana => dhana::dhana(d1),
        Lakshmi => dhana::lakshmi(d1),
        Vasumati => dhana::vasumati(d1),
        ChandraMangala => dhana::chandra_mangala(d1),
        Harsha => vipareeta::lord_in_dusthana(d1, 6),
        Sarala => vipareeta::lord_in_dusthana(d1, 8),
        Vimala => vipareeta::lord_in_dusthana(d1, 12),
        Kemadruma => arista::kemadruma(d1),
        Grahana => arista::grahana(d1),
        Shakata => arista::shakata(d1),
        Daridra => arista::daridra(d1),
        GuruChandala => arista::guru_chandala(d1),
        PapaKartari => arista::papa_kartari(d1),
        Budhaditya => special::budhaditya(d1),
        Amala => special::amala(d1),
        Adhi => special::adhi(d1),
        Saraswati => special::saraswati(d1),
        Sunapha => special::sunapha(d1),
        Anapha => special::anapha(d1),
        Durudhara => special::durudhara(d1),
        Parivartana => special::parivartana(d1),
        ShubhaKartari => special::shubha_kartari(d1),
    }
}

/// All satisfied yogas in catalog order.
pub fn evaluate(d1: &D1Chart, d9: &D9Chart, knowledge: &KnowledgeBase) -> Vec<Yoga> {
    ALL_YOGA_IDS
        .iter()
        .copied()
        .filter(|&id| {
            let present = is_present(id, d1, d9);
            log::trace!("yoga {}: {present}", id.name());
            present
        })
        .map(|id| match knowledge.yoga(id) {
            Some(def) => Yoga::from_definition(def),
            None => Yoga::untitled(id),
        })
        .collect()
}
