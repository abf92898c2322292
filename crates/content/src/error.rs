//! Errors surfaced by content write paths.
//!
//! Read paths never fail; they degrade to absent or default values.

use landing_core::RecordError;
use thiserror::Error;

use crate::store::StoreError;

/// Content-level error type.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A mutation targeted an id that is not in the collection.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The id generator kept producing ids already in use.
    #[error("could not draw an unused {kind} id after {attempts} attempts")]
    IdsExhausted { kind: &'static str, attempts: usize },

    /// The record failed validation; nothing was written.
    #[error("invalid record: {0}")]
    Invalid(#[from] RecordError),

    /// The underlying store failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for `ContentError`.
pub type Result<T> = std::result::Result<T, ContentError>;
