//! Core identifier and offset types.
//!
//! `RecordId` and `SlotOffset` are deliberately distinct newtypes: an
//! identifier is a logical key, an offset is a byte position in one
//! store's file. Keeping them apart makes it impossible to pass a file
//! position where the store API expects a key.

use std::fmt;

/// A record identifier, unique among the live records of one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u32);

impl RecordId {
    /// Creates a record identifier from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for RecordId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A byte offset of one slot within a store's file.
///
/// Offsets are meaningful only to the store that produced them; they are
/// never identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotOffset(u64);

impl SlotOffset {
    /// Creates a slot offset from a byte position.
    pub const fn new(offset: u64) -> Self {
        Self(offset)
    }

    /// Returns the byte position.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SlotOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_order_by_raw_value() {
        assert!(RecordId::new(1) < RecordId::new(2));
        assert_eq!(RecordId::from(7).as_u32(), 7);
    }

    #[test]
    fn display_shows_raw_values() {
        assert_eq!(RecordId::new(42).to_string(), "42");
        assert_eq!(SlotOffset::new(96).to_string(), "96");
    }
}
