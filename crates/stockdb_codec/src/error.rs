//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during slot encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The slot data ended before all schema fields were read.
    #[error("unexpected end of slot data")]
    UnexpectedEof,

    /// The encoded or supplied slot does not match the schema's slot size.
    #[error("slot size mismatch for schema `{schema}`: expected {expected} bytes, got {actual}")]
    SlotSizeMismatch {
        /// Name of the schema being encoded or decoded.
        schema: &'static str,
        /// Slot size the schema defines.
        expected: usize,
        /// Byte length actually produced or supplied.
        actual: usize,
    },
}

impl CodecError {
    /// Creates a slot size mismatch error.
    pub fn slot_size_mismatch(schema: &'static str, expected: usize, actual: usize) -> Self {
        Self::SlotSizeMismatch {
            schema,
            expected,
            actual,
        }
    }
}
