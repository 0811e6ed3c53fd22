//! Markdown generation pipeline.
//!
//! # Responsibility
//! - Convert the document tree into the exported digest text: frontmatter
//!   block, table of contents, sectioned body.
//! - Keep every rendering function pure; the pipeline owns no state.
//!
//! # Invariants
//! - Absent optional fields render as omitted lines, never placeholders.
//! - Rendering the same document twice yields byte-identical output.

pub mod document;
pub mod entry;
pub mod frontmatter;
pub mod locations;
pub mod util;
