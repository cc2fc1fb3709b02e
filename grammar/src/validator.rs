//! Entry point of Meta validation.

use ordbok_core::{is_meta_field, MarkdownPage, MetaRecord};

use crate::{GrammarError, GrammarResult, PartOfSpeech, PosChecker};

/// Validate the Meta section of a parsed page.
///
/// # Returns
/// - `Ok(())` if the Meta section declares a legal Grammar/Structure shape.
/// - `Err(GrammarError)` for the first rule the page violates.
pub fn validate(page: &MarkdownPage) -> GrammarResult<()> {
    let meta = page.meta().ok_or(GrammarError::MissingMeta)?;
    validate_meta(&MetaRecord::from_section(meta))
}

/// Validate an already narrowed Meta record.
pub fn validate_meta(meta: &MetaRecord) -> GrammarResult<()> {
    let tag = meta.pos_tag().ok_or(GrammarError::EmptyGrammar)?;
    let pos: PartOfSpeech = tag.parse()?;

    PosChecker::new(pos, &meta.grammar, &meta.structure).check()?;

    match meta.fields().iter().find(|name| !is_meta_field(name)) {
        Some(name) => Err(GrammarError::unexpected_section(name.as_str())),
        None => Ok(()),
    }
}
