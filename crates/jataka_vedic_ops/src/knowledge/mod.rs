//! Static knowledge base: yoga metadata, dosha text and strength tables.
//!
//! The knowledge base is plain data. Rule predicates never read it to decide
//! presence; it only supplies display text and scoring constants. The
//! built-in catalog is [`KnowledgeBase::classical`]; an alternate or
//! localized catalog can be deserialized from JSON or TOML.

mod classical;

use serde::{Deserialize, Serialize};

use jataka_vedic_base::{Dignity, Graha, NaisargikaMaitri, rashi_lord_by_index};

use crate::dosha::DoshaKind;
use crate::yoga::YogaId;

/// Yoga family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YogaCategory {
    PanchaMahapurusha,
    Raja,
    Dhana,
    Vipareeta,
    Arista,
    Special,
}

/// Nominal strength tier of a yoga. Static, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YogaStrength {
    Mild,
    Moderate,
    Strong,
}

/// Display metadata for one yoga.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YogaDefinition {
    pub id: YogaId,
    pub name: String,
    pub category: YogaCategory,
    pub strength: YogaStrength,
    pub description: String,
    pub formation: String,
    pub result: String,
    pub life_areas: Vec<String>,
}

/// Display text and remedies for one dosha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoshaText {
    pub kind: DoshaKind,
    pub name: String,
    pub description: String,
    pub remedies: Vec<String>,
}

/// A graha paired with a house number (1-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrahaHouse {
    pub graha: Graha,
    pub house: u8,
}

/// Exaltation and own signs of one graha. Debilitation is the sign
/// opposite exaltation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrahaDignity {
    pub graha: Graha,
    pub exaltation: Option<u8>,
    pub own_signs: Vec<u8>,
}

/// Natural friends and enemies of one graha. Anyone unlisted is neutral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrahaFriendship {
    pub graha: Graha,
    pub friends: Vec<Graha>,
    pub enemies: Vec<Graha>,
}

/// Points and lookup tables for the additive strength score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthTables {
    pub base: i32,
    pub exalted: i32,
    pub debilitated: i32,
    pub own_sign: i32,
    pub friend_sign: i32,
    pub enemy_sign: i32,
    pub directional: i32,
    pub retrograde: i32,
    pub marana_karaka: i32,
    /// Scores strictly above this are Strong.
    pub strong_above: i32,
    /// Scores strictly below this are Weak.
    pub weak_below: i32,
    /// House of directional strength (dig bala).
    pub directional_houses: Vec<GrahaHouse>,
    /// House of marana karaka sthana.
    pub marana_karaka_houses: Vec<GrahaHouse>,
    pub dignities: Vec<GrahaDignity>,
    /// Naisargika maitri, read against the sign lord.
    pub friendships: Vec<GrahaFriendship>,
}

impl StrengthTables {
    pub fn directional_house(&self, graha: Graha) -> Option<u8> {
        lookup(&self.directional_houses, graha)
    }

    pub fn marana_karaka_house(&self, graha: Graha) -> Option<u8> {
        lookup(&self.marana_karaka_houses, graha)
    }

    /// Natural relationship of `graha` towards `other`. Nodes are neutral.
    pub fn relationship(&self, graha: Graha, other: Graha) -> NaisargikaMaitri {
        if graha.is_node() || other.is_node() {
            return NaisargikaMaitri::Neutral;
        }
        match self.friendships.iter().find(|f| f.graha == graha) {
            Some(f) if f.friends.contains(&other) => NaisargikaMaitri::Friend,
            Some(f) if f.enemies.contains(&other) => NaisargikaMaitri::Enemy,
            _ => NaisargikaMaitri::Neutral,
        }
    }

    /// Sign-level dignity: exalted, debilitated, own sign, then the
    /// relationship with the sign lord.
    pub fn dignity(&self, graha: Graha, rashi_index: u8) -> Dignity {
        let rashi = rashi_index % 12;
        if graha.is_node() {
            return Dignity::Sama;
        }
        if let Some(d) = self.dignities.iter().find(|d| d.graha == graha) {
            if let Some(exalted) = d.exaltation {
                if exalted == rashi {
                    return Dignity::Exalted;
                }
                if (exalted + 6) % 12 == rashi {
                    return Dignity::Debilitated;
                }
            }
            if d.own_signs.contains(&rashi) {
                return Dignity::OwnSign;
            }
        }
        let Some(lord) = rashi_lord_by_index(rashi) else {
            return Dignity::Sama;
        };
        match self.relationship(graha, lord) {
            NaisargikaMaitri::Friend => Dignity::Mitra,
            NaisargikaMaitri::Enemy => Dignity::Shatru,
            NaisargikaMaitri::Neutral => Dignity::Sama,
        }
    }
}

fn lookup(table: &[GrahaHouse], graha: Graha) -> Option<u8> {
    table.iter().find(|e| e.graha == graha).map(|e| e.house)
}

impl Default for StrengthTables {
    fn default() -> Self {
        classical::strength_tables()
    }
}

/// Immutable rule catalog, shared by reference across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub yogas: Vec<YogaDefinition>,
    pub doshas: Vec<DoshaText>,
    #[serde(default)]
    pub strength: StrengthTables,
}

impl KnowledgeBase {
    /// The built-in classical catalog.
    pub fn classical() -> Self {
        Self {
            yogas: classical::yoga_definitions(),
            doshas: classical::dosha_texts(),
            strength: classical::strength_tables(),
        }
    }

    pub fn yoga(&self, id: YogaId) -> Option<&YogaDefinition> {
        self.yogas.iter().find(|y| y.id == id)
    }

    pub fn dosha(&self, kind: DoshaKind) -> Option<&DoshaText> {
        self.doshas.iter().find(|d| d.kind == kind)
    }

    /// Yoga ids the catalog has no text for.
    pub fn missing_yogas(&self) -> Vec<YogaId> {
        crate::yoga::ALL_YOGA_IDS
            .iter()
            .copied()
            .filter(|&id| self.yoga(id).is_none())
            .collect()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::classical()
    }
}
