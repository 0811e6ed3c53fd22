//! Document model for the digest editor.
//!
//! # Responsibility
//! - Define the canonical state tree: document, sections, entries, overrides.
//! - Keep one serialized shape shared by persistence, import and export.
//!
//! # Invariants
//! - Every section and entry is identified by a stable `SectionId`/`EntryId`.
//! - Entry variants are a closed set; rendering dispatches exhaustively.
//! - Sequence order inside `sections` and `entries` is significant.

pub mod document;
pub mod entry;
pub mod section;
