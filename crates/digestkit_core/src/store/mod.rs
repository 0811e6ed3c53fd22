//! Mutable document state and change notification.
//!
//! # Responsibility
//! - Own the live `Document` for one editing session.
//! - Apply CRUD mutations and notify subscribers after each one.
//!
//! # Invariants
//! - Every mutation is fully applied before subscribers run.
//! - Not-found targets degrade to silent no-ops: no state change, no
//!   notification, no error.

pub mod document_store;
