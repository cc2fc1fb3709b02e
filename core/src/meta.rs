//! The Meta record of a dictionary entry.
//!
//! [`MetaRecord`] narrows the loosely shaped Meta section into the three
//! fields validation cares about, with explicit defaults for absent ones.

use crate::{Section, GRAMMAR_FIELD, RELATION_FIELD, STRUCTURE_FIELD};

/// Typed view of a page's Meta section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaRecord {
    /// Grammar tags; position 0 is the part of speech. Empty if absent.
    pub grammar: Vec<String>,
    /// Inflection-slot labels in canonical order. Empty if absent.
    pub structure: Vec<String>,
    /// Relations to other entries, carried through untouched.
    pub relation: Option<Vec<String>>,
    /// Every field name that appeared under Meta, including unknown ones.
    fields: Vec<String>,
}

impl MetaRecord {
    /// Create a record holding only Grammar and Structure.
    pub fn new<G, S>(grammar: G, structure: S) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            grammar: grammar.into_iter().map(Into::into).collect(),
            structure: structure.into_iter().map(Into::into).collect(),
            relation: None,
            fields: vec![GRAMMAR_FIELD.to_string(), STRUCTURE_FIELD.to_string()],
        }
    }

    /// Narrow a parsed Meta section into a record.
    pub fn from_section(section: &Section) -> Self {
        let field = |name: &str| section.get(name).map(<[String]>::to_vec);

        Self {
            grammar: field(GRAMMAR_FIELD).unwrap_or_default(),
            structure: field(STRUCTURE_FIELD).unwrap_or_default(),
            relation: field(RELATION_FIELD),
            fields: section.names().map(str::to_string).collect(),
        }
    }

    /// Attach relation data.
    pub fn with_relation<I, S>(mut self, relation: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relation = Some(relation.into_iter().map(Into::into).collect());
        self.push_field(RELATION_FIELD);
        self
    }

    /// Record an extra field name as present under Meta.
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.push_field(name);
        self
    }

    /// Field names present under Meta, in section order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The part-of-speech tag, if the grammar is not empty.
    pub fn pos_tag(&self) -> Option<&str> {
        self.grammar.first().map(String::as_str)
    }

    fn push_field(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.fields.contains(&name) {
            self.fields.push(name);
        }
    }
}

impl From<&Section> for MetaRecord {
    fn from(section: &Section) -> Self {
        Self::from_section(section)
    }
}
