//! Import/export boundary for persisted state and bibliographic records.
//!
//! # Responsibility
//! - Serialize/parse the full-document interchange JSON.
//! - Import CSL-JSON publication records with duplicate detection.
//!
//! # Invariants
//! - Structural validation is all-or-nothing: a malformed payload applies
//!   no partial state.
//! - Per-record duplicate skipping inside a valid payload is reported, not
//!   treated as an error.

pub mod csl;
pub mod state;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Interchange boundary error.
#[derive(Debug)]
pub enum InterchangeError {
    /// Payload shape does not match the contract; message is user-facing.
    InvalidStructure(String),
    /// Document could not be serialized.
    Serialize(serde_json::Error),
}

impl Display for InterchangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStructure(message) => write!(f, "{message}"),
            Self::Serialize(err) => write!(f, "failed to serialize document: {err}"),
        }
    }
}

impl Error for InterchangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidStructure(_) => None,
            Self::Serialize(err) => Some(err),
        }
    }
}
