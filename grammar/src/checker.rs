//! Per-class grammar and structure rules.

use std::ops::RangeInclusive;

use crate::tables::{self, canonical_structure, canonical_structures};
use crate::{GrammarError, GrammarResult, PartOfSpeech};

/// Checks one entry's Grammar and Structure against the rules of its class.
///
/// Grammar rules run before structure rules, and every length rule runs
/// before the content rules that depend on it. The first violation is
/// returned.
pub struct PosChecker<'m> {
    pos: PartOfSpeech,
    grammar: &'m [String],
    structure: &'m [String],
}

impl<'m> PosChecker<'m> {
    /// Create a checker for an entry already classified as `pos`.
    pub fn new(pos: PartOfSpeech, grammar: &'m [String], structure: &'m [String]) -> Self {
        Self {
            pos,
            grammar,
            structure,
        }
    }

    /// Run every rule of the entry's class.
    pub fn check(&self) -> GrammarResult<()> {
        match self.pos {
            PartOfSpeech::Adjective => self.check_adjective(),
            PartOfSpeech::Determiner => self.check_determiner(),
            PartOfSpeech::Noun => self.check_noun(),
            PartOfSpeech::Particle | PartOfSpeech::Phrase => self.check_uninflected(),
            PartOfSpeech::Pronoun => self.check_pronoun(),
            PartOfSpeech::Verb => self.check_verb(),
        }
    }

    // ========== Class rules ==========

    fn check_adjective(&self) -> GrammarResult<()> {
        self.expect_grammar_len(2..=2)?;
        self.expect_tag(1, &[tables::ADJECTIVE_DEGREES])?;
        self.expect_canonical_structure()
    }

    fn check_determiner(&self) -> GrammarResult<()> {
        self.expect_grammar_len(2..=4)?;
        self.expect_tag(1, &[tables::DETERMINER_KINDS])?;

        // Position 2 is either a number or, when the number is implied, a gender.
        if self.grammar.len() > 2 {
            self.expect_tag(2, &[tables::DETERMINER_NUMBERS, tables::GENDERS])?;
        }
        if self.grammar.len() > 3 {
            self.expect_tag(3, &[tables::GENDERS])?;
        }

        self.expect_canonical_structure()
    }

    fn check_noun(&self) -> GrammarResult<()> {
        self.expect_grammar_len(1..=1)?;
        self.expect_canonical_structure()
    }

    fn check_pronoun(&self) -> GrammarResult<()> {
        // Position 1 is free-form for pronouns.
        self.expect_grammar_len(2..=3)?;
        self.expect_structure_len(tables::PRONOUN_STRUCTURE_LEN)
    }

    fn check_uninflected(&self) -> GrammarResult<()> {
        self.expect_grammar_len(1..=1)?;
        self.expect_structure_len(0)
    }

    fn check_verb(&self) -> GrammarResult<()> {
        self.expect_grammar_len(2..=2)?;
        self.expect_tag(1, &[tables::VERB_TENSES])?;
        self.expect_canonical_structure()
    }

    // ========== Rule primitives ==========

    fn expect_grammar_len(&self, allowed: RangeInclusive<usize>) -> GrammarResult<()> {
        let len = self.grammar.len();
        if allowed.contains(&len) {
            return Ok(());
        }

        let expected = if allowed.start() == allowed.end() {
            allowed.start().to_string()
        } else {
            format!("{} to {}", allowed.start(), allowed.end())
        };
        Err(self.grammar_error(format!("expected {} tags, found {}", expected, len)))
    }

    /// The tag at `position` must belong to one of `vocabularies`.
    fn expect_tag(&self, position: usize, vocabularies: &[&[&str]]) -> GrammarResult<()> {
        let tag = match self.grammar.get(position) {
            Some(tag) => tag.as_str(),
            None => return Err(self.grammar_error(format!("missing tag at position {}", position))),
        };

        if vocabularies.iter().any(|vocabulary| vocabulary.contains(&tag)) {
            return Ok(());
        }

        let allowed = vocabularies.concat().join(", ");
        Err(self.grammar_error(format!(
            "tag '{}' at position {} is not one of {}",
            tag, position, allowed
        )))
    }

    fn expect_structure_len(&self, expected: usize) -> GrammarResult<()> {
        let len = self.structure.len();
        if len == expected {
            Ok(())
        } else {
            Err(self.structure_error(format!("expected {} slots, found {}", expected, len)))
        }
    }

    /// The structure must equal, slot for slot, the canonical table of its length.
    fn expect_canonical_structure(&self) -> GrammarResult<()> {
        let len = self.structure.len();
        let table = match canonical_structure(self.pos, len) {
            Some(table) => table,
            None => {
                let expected = canonical_structures(self.pos)
                    .iter()
                    .map(|table| table.len().to_string())
                    .collect::<Vec<_>>()
                    .join(" or ");
                return Err(self.structure_error(format!(
                    "expected {} slots, found {}",
                    expected, len
                )));
            }
        };

        let mismatch = self
            .structure
            .iter()
            .zip(table.iter())
            .position(|(actual, expected)| actual.as_str() != *expected);

        match mismatch {
            None => Ok(()),
            Some(slot) => Err(self.structure_error(format!(
                "slot {} is '{}', expected '{}'",
                slot, self.structure[slot], table[slot]
            ))),
        }
    }

    fn grammar_error(&self, reason: String) -> GrammarError {
        GrammarError::invalid_grammar(self.pos, reason, self.grammar)
    }

    fn structure_error(&self, reason: String) -> GrammarError {
        GrammarError::invalid_structure(self.pos, reason, self.structure)
    }
}
