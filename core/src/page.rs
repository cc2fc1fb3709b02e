//! Page model for parsed dictionary entries.
//!
//! A page is what the markdown parser produces for one dictionary entry:
//! named sections (one per headline), each holding named fields whose
//! values are ordered lists of strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{PageResult, META_SECTION};

/// A named section of a page: field name to ordered values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    fields: BTreeMap<String, Vec<String>>,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field's values by name.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// Set a field's values, replacing any previous ones.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.fields.insert(name.into(), values)
    }

    /// Builder form of [`Section::insert`].
    pub fn with_field<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, values.into_iter().map(Into::into).collect());
        self
    }

    /// Remove a field.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.fields.remove(name)
    }

    /// Check whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over field names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the section has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A parsed dictionary page: section headline to section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkdownPage {
    sections: BTreeMap<String, Section>,
}

impl MarkdownPage {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a page from the JSON snapshot emitted by the markdown parser.
    ///
    /// The snapshot is an object of sections, each an object of string arrays:
    /// `{"Meta": {"Grammar": ["Noun"], "Structure": [...]}}`.
    pub fn from_json(source: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Get a section by headline.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Get the Meta section, if present.
    pub fn meta(&self) -> Option<&Section> {
        self.section(META_SECTION)
    }

    /// Add or replace a section.
    pub fn insert(&mut self, name: impl Into<String>, section: Section) -> Option<Section> {
        self.sections.insert(name.into(), section)
    }

    /// Builder form of [`MarkdownPage::insert`].
    pub fn with_section(mut self, name: impl Into<String>, section: Section) -> Self {
        self.insert(name, section);
        self
    }

    /// Iterate over section headlines.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the page has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Build a [`Section`] from `name => [values]` pairs.
///
/// ```
/// use ordbok_core::section;
///
/// let meta = section! { "Grammar" => ["Noun"] };
/// assert_eq!(meta.get("Grammar"), Some(&["Noun".to_string()][..]));
/// ```
#[macro_export]
macro_rules! section {
    () => {
        $crate::Section::new()
    };
    ($($name:expr => [$($value:expr),* $(,)?]),+ $(,)?) => {
        {
            let mut section = $crate::Section::new();
            $(
                section.insert($name, vec![$($value.to_string()),*]);
            )+
            section
        }
    };
}
