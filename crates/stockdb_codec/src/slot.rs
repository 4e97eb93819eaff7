//! Whole-slot encoding and decoding.
//!
//! A slot is the atomic unit of storage: a fixed-size byte range holding
//! one record plus a leading tombstone flag. `SlotWriter` builds a slot
//! field by field in schema order; `SlotReader` walks one back. Neither
//! performs any value validation beyond sizes — range checking belongs to
//! the caller.

use crate::error::{CodecError, CodecResult};
use crate::field;
use crate::schema::Schema;

/// Tombstone flag value for a live record.
pub const TOMBSTONE_LIVE: u32 = 0;

/// Tombstone flag value for a deleted record.
pub const TOMBSTONE_DEAD: u32 = 1;

/// A slot encoder.
///
/// The writer emits the live tombstone flag on creation; callers append
/// the remaining fields in schema order, starting with the identifier.
/// `finish` verifies that exactly one slot was produced.
pub struct SlotWriter {
    schema: &'static Schema,
    buffer: Vec<u8>,
}

impl SlotWriter {
    /// Creates a writer for one slot of `schema`, with the tombstone flag
    /// already written as live.
    pub fn new(schema: &'static Schema) -> Self {
        let mut buffer = Vec::with_capacity(schema.slot_size());
        buffer.extend_from_slice(&TOMBSTONE_LIVE.to_le_bytes());
        Self { schema, buffer }
    }

    /// Appends an unsigned 32-bit field.
    pub fn put_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a signed 32-bit field.
    pub fn put_i32(&mut self, value: i32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a 32-bit float field.
    pub fn put_f32(&mut self, value: f32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a fixed-width text field, truncating or null-padding the
    /// value to exactly `width` bytes.
    pub fn put_text(&mut self, value: &str, width: usize) {
        self.buffer.extend_from_slice(&field::encode_text(value, width));
    }

    /// Consumes the writer and returns the encoded slot.
    ///
    /// # Errors
    ///
    /// Returns `SlotSizeMismatch` if the appended fields do not add up to
    /// the schema's slot size.
    pub fn finish(self) -> CodecResult<Vec<u8>> {
        let expected = self.schema.slot_size();
        if self.buffer.len() != expected {
            return Err(CodecError::slot_size_mismatch(
                self.schema.name,
                expected,
                self.buffer.len(),
            ));
        }
        Ok(self.buffer)
    }
}

/// A slot decoder.
///
/// Reads the tombstone flag on creation and then yields the remaining
/// fields in schema order as the caller requests them.
#[derive(Debug)]
pub struct SlotReader<'a> {
    data: &'a [u8],
    pos: usize,
    tombstone: u32,
}

impl<'a> SlotReader<'a> {
    /// Creates a reader over one slot's bytes.
    ///
    /// # Errors
    ///
    /// Returns `SlotSizeMismatch` if `data` is not exactly one slot wide,
    /// or `UnexpectedEof` if the tombstone flag cannot be read.
    pub fn new(schema: &'static Schema, data: &'a [u8]) -> CodecResult<Self> {
        let expected = schema.slot_size();
        if data.len() != expected {
            return Err(CodecError::slot_size_mismatch(
                schema.name,
                expected,
                data.len(),
            ));
        }
        let mut reader = Self {
            data,
            pos: 0,
            tombstone: TOMBSTONE_LIVE,
        };
        reader.tombstone = reader.take_u32()?;
        Ok(reader)
    }

    /// Returns the decoded tombstone flag.
    pub fn tombstone(&self) -> u32 {
        self.tombstone
    }

    /// Returns `true` if this slot is tombstoned.
    pub fn is_tombstoned(&self) -> bool {
        self.tombstone != TOMBSTONE_LIVE
    }

    /// Reads an unsigned 32-bit field.
    pub fn take_u32(&mut self) -> CodecResult<u32> {
        let bytes = self.take_bytes(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().map_err(|_| CodecError::UnexpectedEof)?))
    }

    /// Reads a signed 32-bit field.
    pub fn take_i32(&mut self) -> CodecResult<i32> {
        let bytes = self.take_bytes(4)?;
        Ok(i32::from_le_bytes(bytes.try_into().map_err(|_| CodecError::UnexpectedEof)?))
    }

    /// Reads a 32-bit float field.
    pub fn take_f32(&mut self) -> CodecResult<f32> {
        let bytes = self.take_bytes(4)?;
        Ok(f32::from_le_bytes(bytes.try_into().map_err(|_| CodecError::UnexpectedEof)?))
    }

    /// Reads a fixed-width text field of `width` bytes.
    pub fn take_text(&mut self, width: usize) -> CodecResult<String> {
        Ok(field::decode_text(self.take_bytes(width)?))
    }

    fn take_bytes(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        if self.pos + len > self.data.len() {
            return Err(CodecError::UnexpectedEof);
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}
