//! Core domain logic for the digest editor.
//! This crate is the single source of truth for document state and
//! markdown generation.

pub mod interchange;
pub mod logging;
pub mod model;
pub mod render;
pub mod sort;
pub mod storage;
pub mod store;

pub use interchange::csl::{import_publications, parse_csl, CslRecord, ImportReport};
pub use interchange::state::{parse_document, serialize_document};
pub use interchange::InterchangeError;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{Document, Frontmatter, LocationOverride};
pub use model::entry::{Author, Entry, EntryId, EntryKind, EntryType, MediaType, PubType, Signal};
pub use model::section::{Section, SectionId, SectionType};
pub use render::document::{export_markdown, preview_markdown};
pub use sort::sort_entries;
pub use storage::{
    load_draft, load_draft_into, save_draft, DraftError, DraftStorage, StorageError,
    DRAFT_FILENAME,
};
pub use store::document_store::{
    AuthorField, DocumentStore, EntryUpdate, LocationField, SubscriptionId,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
