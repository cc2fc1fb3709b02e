//! Well-known section and field names of a dictionary page.
//!
//! These constants keep the markdown collaborator, the validator and the
//! batch harness spelling the same headlines.

/// Headline of the section holding grammar metadata.
pub const META_SECTION: &str = "Meta";

/// Meta field: ordered grammar tags, part of speech first.
pub const GRAMMAR_FIELD: &str = "Grammar";

/// Meta field: relations to other entries. Opaque to validation.
pub const RELATION_FIELD: &str = "Relation";

/// Meta field: ordered inflection-slot labels.
pub const STRUCTURE_FIELD: &str = "Structure";

/// Every field allowed under the Meta section.
pub const META_FIELDS: [&str; 3] = [GRAMMAR_FIELD, RELATION_FIELD, STRUCTURE_FIELD];

/// Returns true if `name` may appear under the Meta section.
pub fn is_meta_field(name: &str) -> bool {
    META_FIELDS.contains(&name)
}
