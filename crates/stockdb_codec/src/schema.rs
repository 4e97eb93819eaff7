//! Slot layout schemas.
//!
//! A schema is an ordered, fixed list of fields describing one slot
//! layout. Every schema begins with a `u32` tombstone flag immediately
//! followed by the `u32` record identifier; the remaining fields are
//! entity-specific. The slot size is the sum of all field widths and is
//! fixed at definition time — there is no online schema migration.

/// The encoding kind of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned 32-bit integer, little-endian (tombstone flag,
    /// identifiers, status codes).
    U32,
    /// Signed 32-bit integer, little-endian.
    I32,
    /// IEEE 754 single-precision float, little-endian.
    F32,
    /// UTF-8 text truncated or null-padded to the given byte width.
    Text(usize),
}

impl FieldKind {
    /// Returns the number of bytes this field occupies in a slot.
    pub const fn width(self) -> usize {
        match self {
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::Text(width) => width,
        }
    }
}

/// A single named field within a slot layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name, for diagnostics.
    pub name: &'static str,
    /// Encoding kind and width.
    pub kind: FieldKind,
}

impl Field {
    /// Creates a new field definition.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// An ordered slot layout for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Schema name, for diagnostics.
    pub name: &'static str,
    /// Fields in slot order.
    pub fields: &'static [Field],
}

impl Schema {
    /// Creates a new schema.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if the schema does
    /// not begin with a `u32` tombstone flag followed by a `u32`
    /// identifier.
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        assert!(
            fields.len() >= 2,
            "schema must begin with a tombstone flag and an identifier"
        );
        assert!(
            matches!(fields[0].kind, FieldKind::U32),
            "first schema field must be the u32 tombstone flag"
        );
        assert!(
            matches!(fields[1].kind, FieldKind::U32),
            "second schema field must be the u32 identifier"
        );
        Self { name, fields }
    }

    /// Returns the fixed byte size of one slot under this schema.
    pub const fn slot_size(&self) -> usize {
        let mut size = 0;
        let mut i = 0;
        while i < self.fields.len() {
            size += self.fields[i].kind.width();
            i += 1;
        }
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SCHEMA: Schema = Schema::new(
        "test",
        &[
            Field::new("tombstone", FieldKind::U32),
            Field::new("id", FieldKind::U32),
            Field::new("label", FieldKind::Text(10)),
            Field::new("year", FieldKind::I32),
            Field::new("price", FieldKind::F32),
        ],
    );

    #[test]
    fn scalar_fields_are_four_bytes() {
        assert_eq!(FieldKind::U32.width(), 4);
        assert_eq!(FieldKind::I32.width(), 4);
        assert_eq!(FieldKind::F32.width(), 4);
    }

    #[test]
    fn text_width_is_declared_width() {
        assert_eq!(FieldKind::Text(12).width(), 12);
        assert_eq!(FieldKind::Text(0).width(), 0);
    }

    #[test]
    fn slot_size_is_sum_of_field_widths() {
        assert_eq!(TEST_SCHEMA.slot_size(), 4 + 4 + 10 + 4 + 4);
    }
}
