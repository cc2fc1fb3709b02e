//! Grammar validation error types.

use std::fmt;

use crate::PartOfSpeech;
use thiserror::Error;

/// Separator used when echoing an offending sequence in a diagnostic.
pub const SEQUENCE_SEPARATOR: &str = " ; ";

/// The Meta field a rule violation was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Grammar,
    Structure,
}

impl Field {
    /// Field name as spelled in the Meta section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Grammar => "Grammar",
            Field::Structure => "Structure",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while validating a Meta section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// The page has no Meta section.
    #[error("No meta headline found")]
    MissingMeta,

    /// The Meta section has no grammar tags.
    #[error("No meta grammar found")]
    EmptyGrammar,

    /// The first grammar tag is not a known part of speech.
    #[error("Unexpected meta grammar type: {tag}")]
    UnknownPos { tag: String },

    /// The grammar tags do not form a legal shape for the part of speech.
    #[error("{pos} grammar is invalid ({reason}): {grammar}")]
    InvalidGrammar {
        pos: PartOfSpeech,
        reason: String,
        grammar: String,
    },

    /// The structure labels do not form a legal shape for the part of speech.
    #[error("{pos} structure is invalid ({reason}): {structure}")]
    InvalidStructure {
        pos: PartOfSpeech,
        reason: String,
        structure: String,
    },

    /// A field outside Grammar, Relation and Structure appears under Meta.
    #[error("Unexpected meta section found: {section}")]
    UnexpectedSection { section: String },
}

impl GrammarError {
    pub fn unknown_pos(tag: impl Into<String>) -> Self {
        Self::UnknownPos { tag: tag.into() }
    }

    pub fn invalid_grammar(pos: PartOfSpeech, reason: impl Into<String>, grammar: &[String]) -> Self {
        Self::InvalidGrammar {
            pos,
            reason: reason.into(),
            grammar: grammar.join(SEQUENCE_SEPARATOR),
        }
    }

    pub fn invalid_structure(
        pos: PartOfSpeech,
        reason: impl Into<String>,
        structure: &[String],
    ) -> Self {
        Self::InvalidStructure {
            pos,
            reason: reason.into(),
            structure: structure.join(SEQUENCE_SEPARATOR),
        }
    }

    pub fn unexpected_section(section: impl Into<String>) -> Self {
        Self::UnexpectedSection {
            section: section.into(),
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> GrammarErrorKind {
        match self {
            Self::MissingMeta => GrammarErrorKind::MissingMeta,
            Self::EmptyGrammar => GrammarErrorKind::EmptyGrammar,
            Self::UnknownPos { .. } => GrammarErrorKind::UnknownPos,
            Self::InvalidGrammar { .. } => GrammarErrorKind::InvalidGrammar,
            Self::InvalidStructure { .. } => GrammarErrorKind::InvalidStructure,
            Self::UnexpectedSection { .. } => GrammarErrorKind::UnexpectedSection,
        }
    }

    /// The Meta field the violation was found in, where one applies.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::EmptyGrammar | Self::UnknownPos { .. } | Self::InvalidGrammar { .. } => {
                Some(Field::Grammar)
            }
            Self::InvalidStructure { .. } => Some(Field::Structure),
            Self::MissingMeta | Self::UnexpectedSection { .. } => None,
        }
    }

    /// The part of speech whose rules were violated, if dispatch got that far.
    pub fn pos(&self) -> Option<PartOfSpeech> {
        match self {
            Self::InvalidGrammar { pos, .. } | Self::InvalidStructure { pos, .. } => Some(*pos),
            _ => None,
        }
    }
}

/// The category of a [`GrammarError`], for inspection without matching fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarErrorKind {
    MissingMeta,
    EmptyGrammar,
    UnknownPos,
    InvalidGrammar,
    InvalidStructure,
    UnexpectedSection,
}

impl GrammarErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingMeta => "missing_meta",
            Self::EmptyGrammar => "empty_grammar",
            Self::UnknownPos => "unknown_pos",
            Self::InvalidGrammar => "invalid_grammar",
            Self::InvalidStructure => "invalid_structure",
            Self::UnexpectedSection => "unexpected_section",
        }
    }
}

impl fmt::Display for GrammarErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type for grammar validation.
pub type GrammarResult<T> = Result<T, GrammarError>;
