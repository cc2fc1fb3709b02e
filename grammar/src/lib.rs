//! ORDBOK Grammar Validator
//!
//! Checks the Meta section of a parsed dictionary page against the closed
//! set of legal Grammar/Structure shapes for each part of speech.
//!
//! ```
//! use ordbok_core::{section, MarkdownPage};
//! use ordbok_grammar::validate;
//!
//! let page = MarkdownPage::new().with_section(
//!     "Meta",
//!     section! {
//!         "Grammar" => ["Noun"],
//!         "Structure" => [
//!             "Singular, Indefinite",
//!             "Singular, Definite",
//!             "Plural, Indefinite",
//!             "Plural, Definite",
//!         ],
//!     },
//! );
//!
//! assert!(validate(&page).is_ok());
//! ```

mod checker;
mod error;
mod pos;
pub mod tables;
mod validator;

pub use checker::PosChecker;
pub use error::{Field, GrammarError, GrammarErrorKind, GrammarResult};
pub use pos::PartOfSpeech;
pub use validator::{validate, validate_meta};
