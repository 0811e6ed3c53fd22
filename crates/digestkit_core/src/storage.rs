//! Draft persistence boundary.
//!
//! # Responsibility
//! - Define the contract a draft backend must satisfy.
//! - Move serialized documents across that contract without touching
//!   editor state on failure.
//!
//! # Invariants
//! - One fixed blob key per editor: [`DRAFT_FILENAME`].
//! - A failed load leaves the caller's document untouched.

use crate::interchange::state::{parse_document, serialize_document};
use crate::interchange::InterchangeError;
use crate::model::document::Document;
use crate::store::document_store::DocumentStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed blob key for the single persisted draft.
pub const DRAFT_FILENAME: &str = "digest-draft.json";

/// Backend-side failures of the draft storage contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Backend requires credentials that were not supplied.
    MissingCredentials,
    /// Load was asked for a blob with no identifier.
    MissingIdentifier,
    /// Backend answered but returned no content for the identifier.
    MissingContent(String),
    /// Backend failed outright; message carries the cause.
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "storage backend credentials are missing"),
            Self::MissingIdentifier => write!(f, "no draft identifier was provided"),
            Self::MissingContent(id) => write!(f, "draft `{id}` has no content"),
            Self::Backend(message) => write!(f, "storage backend failed: {message}"),
        }
    }
}

impl Error for StorageError {}

/// Where serialized drafts live. Implementations decide the medium
/// (directory, object store, in-memory test double); callers only see
/// opaque identifiers.
pub trait DraftStorage {
    /// Persists one blob, returning its identifier.
    fn save(&mut self, blob: &str) -> Result<String, StorageError>;

    /// Fetches the blob stored under `id`.
    fn load(&mut self, id: &str) -> Result<String, StorageError>;
}

/// Draft save/load failure: either the backend or the payload shape.
#[derive(Debug)]
pub enum DraftError {
    Storage(StorageError),
    Interchange(InterchangeError),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Interchange(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DraftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Interchange(err) => Some(err),
        }
    }
}

impl From<StorageError> for DraftError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl From<InterchangeError> for DraftError {
    fn from(err: InterchangeError) -> Self {
        Self::Interchange(err)
    }
}

/// Serializes the document and hands it to the backend.
pub fn save_draft(
    storage: &mut dyn DraftStorage,
    document: &Document,
) -> Result<String, DraftError> {
    let blob = serialize_document(document)?;
    let id = storage.save(&blob)?;
    info!("event=draft_save module=storage status=ok id={id}");
    Ok(id)
}

/// Loads and parses the blob stored under `id`.
pub fn load_draft(storage: &mut dyn DraftStorage, id: &str) -> Result<Document, DraftError> {
    if id.trim().is_empty() {
        return Err(StorageError::MissingIdentifier.into());
    }
    let blob = storage.load(id)?;
    let document = parse_document(&blob)?;
    info!("event=draft_load module=storage status=ok id={id}");
    Ok(document)
}

/// Loads a draft into the store. The store's document is replaced only
/// after the blob parses cleanly.
pub fn load_draft_into(
    storage: &mut dyn DraftStorage,
    id: &str,
    store: &mut DocumentStore,
) -> Result<(), DraftError> {
    let document = load_draft(storage, id)?;
    store.replace(document);
    Ok(())
}
