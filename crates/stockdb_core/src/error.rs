//! Error types for the storage engine.

use crate::types::RecordId;
use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// Read misses are not errors: `RecordStore::get` returns `Ok(None)` for
/// an unknown identifier. `NotFound` is reserved for mutations that name
/// a missing record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Slot encoding or decoding failed.
    #[error("codec error: {0}")]
    Codec(#[from] stockdb_codec::CodecError),

    /// An `add` used an identifier that is already indexed.
    #[error("duplicate identifier {id} in {entity} store")]
    DuplicateId {
        /// Entity store name.
        entity: &'static str,
        /// The identifier that is already in use.
        id: RecordId,
    },

    /// An `update` or `delete` named an identifier that is not indexed.
    #[error("identifier {id} not found in {entity} store")]
    NotFound {
        /// Entity store name.
        entity: &'static str,
        /// The identifier that was not found.
        id: RecordId,
    },
}

impl StoreError {
    /// Creates a duplicate identifier error.
    pub fn duplicate_id(entity: &'static str, id: RecordId) -> Self {
        Self::DuplicateId { entity, id }
    }

    /// Creates a not-found error.
    pub fn not_found(entity: &'static str, id: RecordId) -> Self {
        Self::NotFound { entity, id }
    }
}
