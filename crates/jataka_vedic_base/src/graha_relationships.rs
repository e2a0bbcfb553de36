//! Graha dignity, natural friendship and benefic classification.
//!
//! Dignity here is sign-level: a graha is exalted anywhere in its
//! exaltation rashi, debilitated anywhere in the opposite rashi.
//!
//! Clean-room implementation from BPHS (Brihat Parashara Hora Shastra).

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

// ---------------------------------------------------------------------------
// Exaltation & Debilitation
// ---------------------------------------------------------------------------

/// Exaltation rashi index for sapta grahas. None for Rahu/Ketu.
///
/// Sun Mesha, Moon Vrishabha, Mars Makara, Mercury Kanya,
/// Jupiter Karka, Venus Meena, Saturn Tula.
pub const fn exaltation_rashi(graha: Graha) -> Option<u8> {
    match graha {
        Graha::Surya => Some(0),
        Graha::Chandra => Some(1),
        Graha::Mangal => Some(9),
        Graha::Buddh => Some(5),
        Graha::Guru => Some(3),
        Graha::Shukra => Some(11),
        Graha::Shani => Some(6),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation rashi index: the sign opposite exaltation. None for Rahu/Ketu.
pub const fn debilitation_rashi(graha: Graha) -> Option<u8> {
    match exaltation_rashi(graha) {
        Some(e) => Some((e + 6) % 12),
        None => None,
    }
}

/// Own-sign rashis for sapta grahas. Empty for Rahu/Ketu.
///
/// Sun [4], Moon [3], Mars [0,7], Mercury [2,5],
/// Jupiter [8,11], Venus [1,6], Saturn [9,10].
pub fn own_signs(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya => &[4],     // Simha
        Graha::Chandra => &[3],   // Karka
        Graha::Mangal => &[0, 7], // Mesha, Vrischika
        Graha::Buddh => &[2, 5],  // Mithuna, Kanya
        Graha::Guru => &[8, 11],  // Dhanu, Meena
        Graha::Shukra => &[1, 6], // Vrishabha, Tula
        Graha::Shani => &[9, 10], // Makara, Kumbha
        Graha::Rahu | Graha::Ketu => &[],
    }
}

pub fn is_exalted(graha: Graha, rashi_index: u8) -> bool {
    exaltation_rashi(graha) == Some(rashi_index % 12)
}

pub fn is_debilitated(graha: Graha, rashi_index: u8) -> bool {
    debilitation_rashi(graha) == Some(rashi_index % 12)
}

pub fn is_own_sign(graha: Graha, rashi_index: u8) -> bool {
    own_signs(graha).contains(&(rashi_index % 12))
}

// ---------------------------------------------------------------------------
// Natural Friendship (Naisargika Maitri)
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural (naisargika) friendship between two sapta grahas (BPHS table).
/// Returns Neutral for any pairing involving Rahu/Ketu.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Friend,

        // Mars: friends=Sun,Moon,Jupiter; enemies=Mercury
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        // Mercury: friends=Sun,Venus; enemies=Moon
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Sign-level dignity of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    OwnSign,
    Mitra,
    Sama,
    Shatru,
    Debilitated,
}

// ---------------------------------------------------------------------------
// Benefic / Malefic
// ---------------------------------------------------------------------------

/// Natural benefic/malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Natural benefic/malefic for each graha. Moon is always Benefic.
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
    }
}

pub const fn is_natural_benefic(graha: Graha) -> bool {
    matches!(natural_benefic_malefic(graha), BeneficNature::Benefic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::{ALL_GRAHAS, SAPTA_GRAHAS};

    #[test]
    fn debilitation_opposes_exaltation() {
        for g in SAPTA_GRAHAS {
            let e = exaltation_rashi(g).unwrap();
            let d = debilitation_rashi(g).unwrap();
            assert_eq!((e + 6) % 12, d);
        }
        assert_eq!(exaltation_rashi(Graha::Rahu), None);
        assert_eq!(debilitation_rashi(Graha::Ketu), None);
    }

    #[test]
    fn known_dignities() {
        assert!(is_exalted(Graha::Surya, 0));
        assert!(is_debilitated(Graha::Surya, 6));
        assert!(is_exalted(Graha::Mangal, 9));
        assert!(is_debilitated(Graha::Guru, 9));
        assert!(is_own_sign(Graha::Shani, 10));
        assert!(!is_own_sign(Graha::Rahu, 10));
    }

    #[test]
    fn node_relations_neutral() {
        for g in ALL_GRAHAS {
            assert_eq!(naisargika_maitri(Graha::Rahu, g), NaisargikaMaitri::Neutral);
            assert_eq!(naisargika_maitri(g, Graha::Ketu), NaisargikaMaitri::Neutral);
        }
    }

    #[test]
    fn self_relation_neutral() {
        for g in SAPTA_GRAHAS {
            assert_eq!(naisargika_maitri(g, g), NaisargikaMaitri::Neutral);
        }
    }

    #[test]
    fn benefics() {
        let benefics: Vec<Graha> = ALL_GRAHAS
            .into_iter()
            .filter(|&g| is_natural_benefic(g))
            .collect();
        assert_eq!(
            benefics,
            vec![Graha::Chandra, Graha::Buddh, Graha::Guru, Graha::Shukra]
        );
    }
}
