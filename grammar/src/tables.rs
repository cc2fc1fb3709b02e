//! Static rule tables.
//!
//! Allowed tag vocabularies per grammar position and the canonical structure
//! sequences per part of speech. All tables are immutable constants.

use crate::PartOfSpeech;

/// Degrees an adjective's second grammar tag may name.
pub const ADJECTIVE_DEGREES: &[&str] = &["Positive", "Comparative", "Superlative"];

/// Adjective structure without definite forms.
pub const ADJECTIVE_STRUCTURE: &[&str] = &[
    "Singular, Predicative, Feminine",
    "Singular, Predicative, Masculine",
    "Singular, Predicative, Neuter",
    "Plural, Predicative, Common",
    "Singular, Indefinite, Feminine",
    "Singular, Indefinite, Masculine",
    "Singular, Indefinite, Neuter",
    "Plural, Indefinite, Common",
];

/// Adjective structure with the four definite forms appended.
pub const ADJECTIVE_STRUCTURE_DEFINITE: &[&str] = &[
    "Singular, Predicative, Feminine",
    "Singular, Predicative, Masculine",
    "Singular, Predicative, Neuter",
    "Plural, Predicative, Common",
    "Singular, Indefinite, Feminine",
    "Singular, Indefinite, Masculine",
    "Singular, Indefinite, Neuter",
    "Plural, Indefinite, Common",
    "Singular, Definite, Feminine",
    "Singular, Definite, Masculine",
    "Singular, Definite, Neuter",
    "Plural, Definite, Common",
];

/// Kinds a determiner's second grammar tag may name.
pub const DETERMINER_KINDS: &[&str] = &[
    "Indefinite",
    "Definite",
    "First Person",
    "Second Person",
    "Third Person",
];

/// Numbers a determiner's third grammar tag may name.
pub const DETERMINER_NUMBERS: &[&str] = &["Indefinite", "Singular", "Plural"];

/// Genders a determiner's third or fourth grammar tag may name.
pub const GENDERS: &[&str] = &["Common", "Feminine", "Masculine", "Neuter"];

pub const DETERMINER_STRUCTURE: &[&str] = &[
    "Singular, Feminine",
    "Singular, Masculine",
    "Singular, Neuter",
    "Plural, Common",
];

pub const NOUN_STRUCTURE: &[&str] = &[
    "Singular, Indefinite",
    "Singular, Definite",
    "Plural, Indefinite",
    "Plural, Definite",
];

/// Pronoun structures vary too much to enumerate; only the slot count is fixed.
pub const PRONOUN_STRUCTURE_LEN: usize = 4;

/// Tenses a verb's second grammar tag may name.
pub const VERB_TENSES: &[&str] = &[
    "Infinitive",
    "Present",
    "Past",
    "Future",
    "Present Perfect",
    "Past Perfect",
    "Future Perfect",
];

pub const VERB_STRUCTURE: &[&str] = &[
    "Singular, First Person",
    "Singular, Second Person",
    "Singular, Third Person",
    "Plural, First Person",
    "Plural, Second Person",
    "Plural, Third Person",
];

/// All canonical structure tables for a part of speech, shortest first.
///
/// Empty for classes whose structure content is not fixed.
pub fn canonical_structures(pos: PartOfSpeech) -> &'static [&'static [&'static str]] {
    match pos {
        PartOfSpeech::Adjective => &[ADJECTIVE_STRUCTURE, ADJECTIVE_STRUCTURE_DEFINITE],
        PartOfSpeech::Determiner => &[DETERMINER_STRUCTURE],
        PartOfSpeech::Noun => &[NOUN_STRUCTURE],
        PartOfSpeech::Verb => &[VERB_STRUCTURE],
        PartOfSpeech::Particle | PartOfSpeech::Phrase | PartOfSpeech::Pronoun => &[],
    }
}

/// The canonical structure table of `pos` with exactly `len` slots.
pub fn canonical_structure(pos: PartOfSpeech, len: usize) -> Option<&'static [&'static str]> {
    canonical_structures(pos)
        .iter()
        .copied()
        .find(|table| table.len() == len)
}
