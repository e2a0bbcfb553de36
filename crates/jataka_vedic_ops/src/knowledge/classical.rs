//! Built-in classical catalog (BPHS, Phaladeepika, Saravali).

use jataka_vedic_base::{
    Graha, NaisargikaMaitri, SAPTA_GRAHAS, exaltation_rashi, naisargika_maitri, own_signs,
};

use super::{
    DoshaText, GrahaDignity, GrahaFriendship, GrahaHouse, StrengthTables, YogaCategory,
    YogaDefinition, YogaStrength,
};
use crate::dosha::DoshaKind;
use crate::yoga::YogaId;

struct YogaText {
    id: YogaId,
    name: &'static str,
    category: YogaCategory,
    strength: YogaStrength,
    description: &'static str,
    formation: &'static str,
    result: &'static str,
    life_areas: &'static [&'static str],
}

use YogaCategory::*;
use YogaStrength::*;

const YOGAS: [YogaText; 31] = [
    YogaText {
        id: YogaId::Ruchaka,
        name: "Ruchaka Yoga",
        category: PanchaMahapurusha,
        strength: Strong,
        description: "Mahapurusha yoga of Mars.",
        formation: "Mars in its own sign or exaltation, in a kendra from the lagna.",
        result: "Courage, physical vigour, command and success in competitive fields.",
        life_areas: &["career", "health", "leadership"],
    },
    YogaText {
        id: YogaId::Bhadra,
        name: "Bhadra Yoga",
        category: PanchaMahapurusha,
        strength: Strong,
        description: "Mahapurusha yoga of Mercury.",
        formation: "Mercury in its own sign or exaltation, in a kendra from the lagna.",
        result: "Sharp intellect, eloquence, skill in trade and learning.",
        life_areas: &["intellect", "communication", "business"],
    },
    YogaText {
        id: YogaId::Hamsa,
        name: "Hamsa Yoga",
        category: PanchaMahapurusha,
        strength: Strong,
        description: "Mahapurusha yoga of Jupiter.",
        formation: "Jupiter in its own sign or exaltation, in a kendra from the lagna.",
        result: "Wisdom, righteousness, respect from the learned and spiritual inclination.",
        life_areas: &["wisdom", "spirituality", "reputation"],
    },
    YogaText {
        id: YogaId::Malavya,
        name: "Malavya Yoga",
        category: PanchaMahapurusha,
        strength: Strong,
        description: "Mahapurusha yoga of Venus.",
        formation: "Venus in its own sign or exaltation, in a kendra from the lagna.",
        result: "Comfort, refinement, artistic talent and a happy married life.",
        life_areas: &["relationships", "arts", "comfort"],
    },
    YogaText {
        id: YogaId::Sasa,
        name: "Sasa Yoga",
        category: PanchaMahapurusha,
        strength: Strong,
        description: "Mahapurusha yoga of Saturn.",
        formation: "Saturn in its own sign or exaltation, in a kendra from the lagna.",
        result: "Authority over people, endurance and success through discipline.",
        life_areas: &["career", "authority", "longevity"],
    },
    YogaText {
        id: YogaId::Gajakesari,
        name: "Gajakesari Yoga",
        category: Raja,
        strength: Strong,
        description: "Jupiter supporting the Moon from an angle.",
        formation: "Jupiter in a kendra (1st, 4th, 7th or 10th) from the Moon.",
        result: "Lasting fame, intelligence and the ability to overcome opponents.",
        life_areas: &["reputation", "wealth", "intellect"],
    },
    YogaText {
        id: YogaId::KendraTrikonaRaja,
        name: "Kendra-Trikona Raja Yoga",
        category: Raja,
        strength: Strong,
        description: "Union of an angular lord with a trinal lord.",
        formation: "A kendra lord and a different trikona lord conjunct or in mutual aspect.",
        result: "Rise in status, power and prosperity during the lords' periods.",
        life_areas: &["career", "status", "wealth"],
    },
    YogaText {
        id: YogaId::DharmaKarmadhipati,
        name: "Dharma-Karmadhipati Yoga",
        category: Raja,
        strength: Strong,
        description: "Union of the lords of dharma (9th) and karma (10th).",
        formation: "Lords of the 9th and 10th conjunct, in mutual aspect or exchanging signs.",
        result: "Fortunate and purposeful career, recognition for right action.",
        life_areas: &["career", "fortune", "dharma"],
    },
    YogaText {
        id: YogaId::NeechaBhangaRaja,
        name: "Neecha Bhanga Raja Yoga",
        category: Raja,
        strength: Moderate,
        description: "Cancellation of a planet's debilitation.",
        formation: "A debilitated planet whose dispositor is in a kendra from the lagna or Moon, or which is exalted in the navamsa.",
        result: "Early struggle turning into marked success and authority.",
        life_areas: &["career", "resilience"],
    },
    YogaText {
        id: YogaId::Dhana,
        name: "Dhana Yoga",
        category: Dhana,
        strength: Moderate,
        description: "Link between the houses of wealth and gains.",
        formation: "Lords of the 2nd and 11th conjunct or exchanged, or the 2nd lord in the 11th, or the 11th lord in the 2nd.",
        result: "Accumulation of wealth and steady income.",
        life_areas: &["wealth", "income"],
    },
    YogaText {
        id: YogaId::Lakshmi,
        name: "Lakshmi Yoga",
        category: Dhana,
        strength: Strong,
        description: "A dignified 9th lord with a well-placed lagna lord.",
        formation: "9th lord in own sign or exaltation in a kendra or trikona, and the lagna lord in a kendra or trikona.",
        result: "Wealth, nobility, generosity and good fortune.",
        life_areas: &["wealth", "fortune", "family"],
    },
    YogaText {
        id: YogaId::Vasumati,
        name: "Vasumati Yoga",
        category: Dhana,
        strength: Moderate,
        description: "Benefics in the houses of growth.",
        formation: "Jupiter, Venus and Mercury all in upachaya houses (3, 6, 10, 11) from the lagna or from the Moon.",
        result: "Growing prosperity and independence through one's own effort.",
        life_areas: &["wealth", "growth"],
    },
    YogaText {
        id: YogaId::ChandraMangala,
        name: "Chandra-Mangala Yoga",
        category: Dhana,
        strength: Mild,
        description: "Moon and Mars together.",
        formation: "Moon and Mars in the same sign.",
        result: "Earnings through enterprise and trade, sometimes by unconventional means.",
        life_areas: &["wealth", "enterprise"],
    },
    YogaText {
        id: YogaId::Harsha,
        name: "Harsha Yoga",
        category: Vipareeta,
        strength: Moderate,
        description: "Vipareeta Raja yoga of the 6th lord.",
        formation: "Lord of the 6th in the 6th, 8th or 12th house.",
        result: "Victory over enemies, good health and happiness.",
        life_areas: &["health", "competition"],
    },
    YogaText {
        id: YogaId::Sarala,
        name: "Sarala Yoga",
        category: Vipareeta,
        strength: Moderate,
        description: "Vipareeta Raja yoga of the 8th lord.",
        formation: "Lord of the 8th in the 6th, 8th or 12th house.",
        result: "Longevity, fearlessness and gains through adversity.",
        life_areas: &["longevity", "resilience"],
    },
    YogaText {
        id: YogaId::Vimala,
        name: "Vimala Yoga",
        category: Vipareeta,
        strength: Moderate,
        description: "Vipareeta Raja yoga of the 12th lord.",
        formation: "Lord of the 12th in the 6th, 8th or 12th house.",
        result: "Frugality, independence and a virtuous disposition.",
        life_areas: &["finance", "character"],
    },
    YogaText {
        id: YogaId::Kemadruma,
        name: "Kemadruma Yoga",
        category: Arista,
        strength: Moderate,
        description: "An isolated Moon.",
        formation: "No planet other than the Sun, Rahu or Ketu with the Moon or in the 2nd or 12th from it.",
        result: "Periods of loneliness, want or instability of mind.",
        life_areas: &["mind", "finance"],
    },
    YogaText {
        id: YogaId::Grahana,
        name: "Grahana Yoga",
        category: Arista,
        strength: Moderate,
        description: "A luminary eclipsed by a node.",
        formation: "Sun or Moon in the same sign as Rahu or Ketu.",
        result: "Confusion, anxiety or obstacles linked to the afflicted luminary.",
        life_areas: &["mind", "health"],
    },
    YogaText {
        id: YogaId::Shakata,
        name: "Shakata Yoga",
        category: Arista,
        strength: Mild,
        description: "The Moon hidden from Jupiter.",
        formation: "Moon in the 6th, 8th or 12th from Jupiter.",
        result: "Fluctuating fortune, rising and falling like a cart wheel.",
        life_areas: &["fortune", "finance"],
    },
    YogaText {
        id: YogaId::Daridra,
        name: "Daridra Yoga",
        category: Arista,
        strength: Moderate,
        description: "The lord of gains in a house of loss.",
        formation: "Lord of the 11th in the 6th, 8th or 12th house.",
        result: "Difficulty retaining wealth and irregular income.",
        life_areas: &["finance", "income"],
    },
    YogaText {
        id: YogaId::GuruChandala,
        name: "Guru-Chandala Yoga",
        category: Arista,
        strength: Moderate,
        description: "Jupiter joined by Rahu.",
        formation: "Jupiter and Rahu in the same sign.",
        result: "Unorthodox beliefs, conflicts with teachers or misjudged counsel.",
        life_areas: &["wisdom", "ethics"],
    },
    YogaText {
        id: YogaId::PapaKartari,
        name: "Papa Kartari Yoga",
        category: Arista,
        strength: Moderate,
        description: "The lagna hemmed in by malefics.",
        formation: "Malefics in both the 2nd and the 12th houses.",
        result: "Feeling constrained, obstacles to self-expression and health.",
        life_areas: &["health", "self"],
    },
    YogaText {
        id: YogaId::Budhaditya,
        name: "Budhaditya Yoga",
        category: Special,
        strength: Mild,
        description: "Sun and Mercury together.",
        formation: "Sun and Mercury in the same sign.",
        result: "Intelligence, analytical skill and good reputation.",
        life_areas: &["intellect", "communication"],
    },
    YogaText {
        id: YogaId::Amala,
        name: "Amala Yoga",
        category: Special,
        strength: Moderate,
        description: "A spotless 10th house.",
        formation: "A natural benefic in the 10th house with no malefic there.",
        result: "Lasting good name, ethical conduct and prosperity.",
        life_areas: &["career", "reputation"],
    },
    YogaText {
        id: YogaId::Adhi,
        name: "Adhi Yoga",
        category: Special,
        strength: Strong,
        description: "Benefics surrounding the 7th from the Moon.",
        formation: "Mercury, Jupiter and Venus each in the 6th, 7th or 8th from the Moon.",
        result: "Leadership, comfort and victory over adversaries.",
        life_areas: &["leadership", "wealth"],
    },
    YogaText {
        id: YogaId::Saraswati,
        name: "Saraswati Yoga",
        category: Special,
        strength: Strong,
        description: "Benefics of learning well placed.",
        formation: "Mercury, Jupiter and Venus each in a kendra, a trikona or the 2nd house.",
        result: "Learning, poetic and artistic gifts, eloquence.",
        life_areas: &["education", "arts", "speech"],
    },
    YogaText {
        id: YogaId::Sunapha,
        name: "Sunapha Yoga",
        category: Special,
        strength: Mild,
        description: "Planets ahead of the Moon.",
        formation: "A planet other than the Sun or nodes in the 2nd from the Moon, none in the 12th.",
        result: "Self-earned wealth and good intellect.",
        life_areas: &["wealth", "intellect"],
    },
    YogaText {
        id: YogaId::Anapha,
        name: "Anapha Yoga",
        category: Special,
        strength: Mild,
        description: "Planets behind the Moon.",
        formation: "A planet other than the Sun or nodes in the 12th from the Moon, none in the 2nd.",
        result: "Good health, pleasant manners and renown.",
        life_areas: &["health", "character"],
    },
    YogaText {
        id: YogaId::Durudhara,
        name: "Durudhara Yoga",
        category: Special,
        strength: Moderate,
        description: "The Moon flanked by planets.",
        formation: "Planets other than the Sun or nodes in both the 2nd and 12th from the Moon.",
        result: "Wealth, vehicles, generosity and comfort.",
        life_areas: &["wealth", "comfort"],
    },
    YogaText {
        id: YogaId::Parivartana,
        name: "Parivartana Yoga",
        category: Special,
        strength: Moderate,
        description: "Mutual exchange of signs.",
        formation: "Two of the seven classical planets each occupying a sign owned by the other.",
        result: "The two houses involved reinforce each other.",
        life_areas: &["varies"],
    },
    YogaText {
        id: YogaId::ShubhaKartari,
        name: "Shubha Kartari Yoga",
        category: Special,
        strength: Moderate,
        description: "The lagna hemmed in by benefics.",
        formation: "Natural benefics in both the 2nd and the 12th houses.",
        result: "Protection, good health and a pleasant life.",
        life_areas: &["health", "self"],
    },
];

pub(super) fn yoga_definitions() -> Vec<YogaDefinition> {
    YOGAS
        .iter()
        .map(|y| YogaDefinition {
            id: y.id,
            name: y.name.to_string(),
            category: y.category,
            strength: y.strength,
            description: y.description.to_string(),
            formation: y.formation.to_string(),
            result: y.result.to_string(),
            life_areas: y.life_areas.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn dosha_texts() -> Vec<DoshaText> {
    vec![
        DoshaText {
            kind: DoshaKind::Mangal,
            name: "Mangal Dosha".to_string(),
            description: "Mars placed in a sensitive house from the lagna, Moon or Venus; \
                traditionally examined for marriage compatibility."
                .to_string(),
            remedies: strings(&[
                "Recite the Hanuman Chalisa on Tuesdays",
                "Match with a partner who also has Mangal Dosha",
                "Perform Kumbh Vivah before marriage",
                "Wear red coral after consultation",
            ]),
        },
        DoshaText {
            kind: DoshaKind::KaalSarp,
            name: "Kaal Sarp Dosha".to_string(),
            description: "All seven planets hemmed between Rahu and Ketu.".to_string(),
            remedies: strings(&[
                "Perform Kaal Sarp puja at Trimbakeshwar",
                "Recite the Maha Mrityunjaya mantra",
                "Offer milk to a Shiva lingam on Mondays",
            ]),
        },
        DoshaText {
            kind: DoshaKind::SadeSati,
            name: "Sade Sati".to_string(),
            description: "Saturn transiting the 12th, 1st or 2nd sign from the natal Moon."
                .to_string(),
            remedies: strings(&[
                "Recite the Shani mantra on Saturdays",
                "Donate black sesame and mustard oil",
                "Recite the Hanuman Chalisa",
                "Serve the elderly and labourers",
            ]),
        },
    ]
}

fn graha_houses(pairs: &[(Graha, u8)]) -> Vec<GrahaHouse> {
    pairs
        .iter()
        .map(|&(graha, house)| GrahaHouse { graha, house })
        .collect()
}

pub(super) fn strength_tables() -> StrengthTables {
    StrengthTables {
        base: 50,
        exalted: 30,
        debilitated: -30,
        own_sign: 20,
        friend_sign: 10,
        enemy_sign: -10,
        directional: 15,
        retrograde: 20,
        marana_karaka: -20,
        strong_above: 75,
        weak_below: 35,
        directional_houses: graha_houses(&[
            (Graha::Guru, 1),
            (Graha::Buddh, 1),
            (Graha::Surya, 10),
            (Graha::Mangal, 10),
            (Graha::Shani, 7),
            (Graha::Chandra, 4),
            (Graha::Shukra, 4),
        ]),
        marana_karaka_houses: graha_houses(&[
            (Graha::Surya, 12),
            (Graha::Chandra, 8),
            (Graha::Mangal, 7),
            (Graha::Buddh, 7),
            (Graha::Guru, 3),
            (Graha::Shukra, 6),
            (Graha::Shani, 1),
            (Graha::Rahu, 9),
            (Graha::Ketu, 4),
        ]),
        dignities: SAPTA_GRAHAS
            .iter()
            .map(|&graha| GrahaDignity {
                graha,
                exaltation: exaltation_rashi(graha),
                own_signs: own_signs(graha).to_vec(),
            })
            .collect(),
        friendships: SAPTA_GRAHAS
            .iter()
            .map(|&graha| GrahaFriendship {
                graha,
                friends: related_as(graha, NaisargikaMaitri::Friend),
                enemies: related_as(graha, NaisargikaMaitri::Enemy),
            })
            .collect(),
    }
}

fn related_as(graha: Graha, relation: NaisargikaMaitri) -> Vec<Graha> {
    SAPTA_GRAHAS
        .iter()
        .copied()
        .filter(|&other| naisargika_maitri(graha, other) == relation)
        .collect()
}
