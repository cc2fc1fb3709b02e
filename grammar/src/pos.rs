//! Parts of speech.

use std::fmt;
use std::str::FromStr;

use crate::GrammarError;

/// The word classes an entry's first grammar tag may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    Adjective,
    Determiner,
    Noun,
    Particle,
    Phrase,
    Pronoun,
    Verb,
}

impl PartOfSpeech {
    /// Every supported part of speech.
    pub const ALL: [PartOfSpeech; 7] = [
        PartOfSpeech::Adjective,
        PartOfSpeech::Determiner,
        PartOfSpeech::Noun,
        PartOfSpeech::Particle,
        PartOfSpeech::Phrase,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Verb,
    ];

    /// The grammar tag naming this part of speech.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Determiner => "Determiner",
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Particle => "Particle",
            PartOfSpeech::Phrase => "Phrase",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::Verb => "Verb",
        }
    }

    /// Parse a grammar tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pos| pos.as_str() == tag)
    }
}

impl FromStr for PartOfSpeech {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| GrammarError::unknown_pos(s))
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
