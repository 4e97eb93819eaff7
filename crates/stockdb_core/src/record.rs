//! The `Record` trait.

use crate::types::RecordId;
use stockdb_codec::{CodecResult, Schema, SlotReader, SlotWriter};

/// A typed record that can occupy one slot of its schema.
///
/// Implementations encode and decode only the fields after the tombstone
/// flag, starting with the identifier; the flag itself is owned by the
/// slot writer and the store.
pub trait Record: Sized {
    /// The slot layout for this entity type.
    const SCHEMA: &'static Schema;

    /// Returns this record's identifier.
    fn id(&self) -> RecordId;

    /// Appends every field after the tombstone flag, in schema order.
    fn encode_fields(&self, writer: &mut SlotWriter);

    /// Reads every field after the tombstone flag, in schema order.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot data is too short for the schema.
    fn decode_fields(reader: &mut SlotReader<'_>) -> CodecResult<Self>;
}
