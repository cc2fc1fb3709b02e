//! ORDBOK Core Types
//!
//! This crate provides the types shared by the ORDBOK validation crates:
//! - The parsed page model (MarkdownPage, Section) handed over by the markdown parser
//! - The Meta record narrowed out of a page's Meta section
//! - Well-known section and field names
//! - Common error types

mod error;
mod meta;
mod names;
mod page;

pub use error::*;
pub use meta::*;
pub use names::*;
pub use page::*;
