//! The sale-event entity.

use crate::record::Record;
use crate::types::RecordId;
use stockdb_codec::{CodecResult, Field, FieldKind, Schema, SlotReader, SlotWriter};

/// Byte width of the buyer-name field.
pub const BUYER_WIDTH: usize = 12;
/// Byte width of the sale-date field.
pub const DATE_WIDTH: usize = 12;

/// Slot layout of the sale-event store (44 bytes per slot).
pub const SALE_SCHEMA: Schema = Schema::new(
    "sale_event",
    &[
        Field::new("tombstone", FieldKind::U32),
        Field::new("sale_id", FieldKind::U32),
        Field::new("notebook_id", FieldKind::U32),
        Field::new("customer_id", FieldKind::U32),
        Field::new("buyer", FieldKind::Text(BUYER_WIDTH)),
        Field::new("sold_date", FieldKind::Text(DATE_WIDTH)),
        Field::new("status", FieldKind::U32),
    ],
);

/// A sale-event record.
///
/// The notebook and customer references are plain identifiers, not
/// enforced foreign keys: a sale event may reference an identifier that
/// does not currently exist in the other store, and nothing cascades on
/// delete in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleEvent {
    /// Sale-event identifier.
    pub id: RecordId,
    /// Identifier of the notebook this sale refers to.
    pub notebook_id: RecordId,
    /// Identifier of the buying customer.
    pub customer_id: RecordId,
    /// Buyer name as entered at the point of sale.
    pub buyer: String,
    /// Sale date text (e.g. `2026-08-26`).
    pub sold_date: String,
    /// Status code propagated to the referenced notebook.
    pub status: u32,
}

impl Record for SaleEvent {
    const SCHEMA: &'static Schema = &SALE_SCHEMA;

    fn id(&self) -> RecordId {
        self.id
    }

    fn encode_fields(&self, writer: &mut SlotWriter) {
        writer.put_u32(self.id.as_u32());
        writer.put_u32(self.notebook_id.as_u32());
        writer.put_u32(self.customer_id.as_u32());
        writer.put_text(&self.buyer, BUYER_WIDTH);
        writer.put_text(&self.sold_date, DATE_WIDTH);
        writer.put_u32(self.status);
    }

    fn decode_fields(reader: &mut SlotReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            id: RecordId::new(reader.take_u32()?),
            notebook_id: RecordId::new(reader.take_u32()?),
            customer_id: RecordId::new(reader.take_u32()?),
            buyer: reader.take_text(BUYER_WIDTH)?,
            sold_date: reader.take_text(DATE_WIDTH)?,
            status: reader.take_u32()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_size_is_fixed() {
        assert_eq!(SALE_SCHEMA.slot_size(), 44);
    }

    #[test]
    fn roundtrip() {
        let sale = SaleEvent {
            id: RecordId::new(9),
            notebook_id: RecordId::new(1),
            customer_id: RecordId::new(3),
            buyer: "Alice".into(),
            sold_date: "2026-08-26".into(),
            status: 0,
        };
        let mut writer = SlotWriter::new(&SALE_SCHEMA);
        sale.encode_fields(&mut writer);
        let slot = writer.finish().unwrap();

        let mut reader = SlotReader::new(&SALE_SCHEMA, &slot).unwrap();
        assert_eq!(SaleEvent::decode_fields(&mut reader).unwrap(), sale);
    }
}
