//! # StockDB Codec
//!
//! Fixed-width field and slot codec for StockDB record files.
//!
//! This crate provides:
//! - Fixed-width text encoding (truncate / null-pad) and decoding
//! - Little-endian scalar encoding for the numeric field kinds
//! - Schema definitions describing one slot layout per entity
//! - `SlotWriter` / `SlotReader` for whole-slot encode/decode

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod field;
pub mod schema;
pub mod slot;

pub use error::{CodecError, CodecResult};
pub use field::{decode_text, encode_text};
pub use schema::{Field, FieldKind, Schema};
pub use slot::{SlotReader, SlotWriter, TOMBSTONE_DEAD, TOMBSTONE_LIVE};
