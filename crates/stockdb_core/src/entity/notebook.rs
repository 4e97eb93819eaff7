//! The notebook entity.

use crate::record::Record;
use crate::types::RecordId;
use stockdb_codec::{CodecResult, Field, FieldKind, Schema, SlotReader, SlotWriter};

/// Byte width of the brand field.
pub const BRAND_WIDTH: usize = 12;
/// Byte width of the serial-number field.
pub const SERIAL_WIDTH: usize = 16;

/// Status value for a notebook that has been sold.
pub const STATUS_SOLD: u32 = 0;
/// Status value for a notebook that is in stock.
pub const STATUS_IN_STOCK: u32 = 1;

/// Slot layout of the notebook store (48 bytes per slot).
pub const NOTEBOOK_SCHEMA: Schema = Schema::new(
    "notebook",
    &[
        Field::new("tombstone", FieldKind::U32),
        Field::new("notebook_id", FieldKind::U32),
        Field::new("brand", FieldKind::Text(BRAND_WIDTH)),
        Field::new("serial", FieldKind::Text(SERIAL_WIDTH)),
        Field::new("release_year", FieldKind::I32),
        Field::new("price", FieldKind::F32),
        Field::new("status", FieldKind::U32),
    ],
);

/// A notebook record.
///
/// `status` is a raw code (`STATUS_IN_STOCK` / `STATUS_SOLD`); the codec
/// stores whatever value it is given, and range checking belongs to the
/// caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    /// Notebook identifier.
    pub id: RecordId,
    /// Manufacturer brand.
    pub brand: String,
    /// Serial number.
    pub serial: String,
    /// Release year.
    pub release_year: i32,
    /// Sale price.
    pub price: f32,
    /// Stock status code.
    pub status: u32,
}

impl Record for Notebook {
    const SCHEMA: &'static Schema = &NOTEBOOK_SCHEMA;

    fn id(&self) -> RecordId {
        self.id
    }

    fn encode_fields(&self, writer: &mut SlotWriter) {
        writer.put_u32(self.id.as_u32());
        writer.put_text(&self.brand, BRAND_WIDTH);
        writer.put_text(&self.serial, SERIAL_WIDTH);
        writer.put_i32(self.release_year);
        writer.put_f32(self.price);
        writer.put_u32(self.status);
    }

    fn decode_fields(reader: &mut SlotReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            id: RecordId::new(reader.take_u32()?),
            brand: reader.take_text(BRAND_WIDTH)?,
            serial: reader.take_text(SERIAL_WIDTH)?,
            release_year: reader.take_i32()?,
            price: reader.take_f32()?,
            status: reader.take_u32()?,
        })
    }
}
