//! The customer entity.

use crate::record::Record;
use crate::types::RecordId;
use stockdb_codec::{CodecResult, Field, FieldKind, Schema, SlotReader, SlotWriter};

/// Byte width of the customer name field.
pub const NAME_WIDTH: usize = 12;
/// Byte width of the address field.
pub const ADDRESS_WIDTH: usize = 24;
/// Byte width of the preferred-brand field.
pub const BRAND_WIDTH: usize = 12;
/// Byte width of the preferred-model field.
pub const MODEL_WIDTH: usize = 16;
/// Byte width of the telephone field.
pub const TEL_WIDTH: usize = 12;

/// Slot layout of the customer store (84 bytes per slot).
pub const CUSTOMER_SCHEMA: Schema = Schema::new(
    "customer",
    &[
        Field::new("tombstone", FieldKind::U32),
        Field::new("customer_id", FieldKind::U32),
        Field::new("name", FieldKind::Text(NAME_WIDTH)),
        Field::new("address", FieldKind::Text(ADDRESS_WIDTH)),
        Field::new("brand", FieldKind::Text(BRAND_WIDTH)),
        Field::new("model", FieldKind::Text(MODEL_WIDTH)),
        Field::new("tel", FieldKind::Text(TEL_WIDTH)),
    ],
);

/// A customer record.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Customer identifier.
    pub id: RecordId,
    /// Customer name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Preferred notebook brand.
    pub brand: String,
    /// Preferred notebook model.
    pub model: String,
    /// Telephone number.
    pub tel: String,
}

impl Record for Customer {
    const SCHEMA: &'static Schema = &CUSTOMER_SCHEMA;

    fn id(&self) -> RecordId {
        self.id
    }

    fn encode_fields(&self, writer: &mut SlotWriter) {
        writer.put_u32(self.id.as_u32());
        writer.put_text(&self.name, NAME_WIDTH);
        writer.put_text(&self.address, ADDRESS_WIDTH);
        writer.put_text(&self.brand, BRAND_WIDTH);
        writer.put_text(&self.model, MODEL_WIDTH);
        writer.put_text(&self.tel, TEL_WIDTH);
    }

    fn decode_fields(reader: &mut SlotReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            id: RecordId::new(reader.take_u32()?),
            name: reader.take_text(NAME_WIDTH)?,
            address: reader.take_text(ADDRESS_WIDTH)?,
            brand: reader.take_text(BRAND_WIDTH)?,
            model: reader.take_text(MODEL_WIDTH)?,
            tel: reader.take_text(TEL_WIDTH)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer {
            id: RecordId::new(3),
            name: "Alice".into(),
            address: "12 Main Street".into(),
            brand: "Dell".into(),
            model: "XPS 13".into(),
            tel: "0812345678".into(),
        }
    }

    #[test]
    fn slot_size_is_fixed() {
        assert_eq!(CUSTOMER_SCHEMA.slot_size(), 84);
    }

    #[test]
    fn roundtrip() {
        let customer = sample();
        let mut writer = SlotWriter::new(&CUSTOMER_SCHEMA);
        customer.encode_fields(&mut writer);
        let slot = writer.finish().unwrap();

        let mut reader = SlotReader::new(&CUSTOMER_SCHEMA, &slot).unwrap();
        assert_eq!(Customer::decode_fields(&mut reader).unwrap(), customer);
    }

    #[test]
    fn long_text_fields_are_truncated() {
        let customer = Customer {
            name: "an unusually long customer name".into(),
            ..sample()
        };
        let mut writer = SlotWriter::new(&CUSTOMER_SCHEMA);
        customer.encode_fields(&mut writer);
        let slot = writer.finish().unwrap();

        let mut reader = SlotReader::new(&CUSTOMER_SCHEMA, &slot).unwrap();
        let decoded = Customer::decode_fields(&mut reader).unwrap();
        assert_eq!(decoded.name, "an unusually");
        assert_eq!(decoded.name.len(), NAME_WIDTH);
    }
}
