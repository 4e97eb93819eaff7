//! Fixed-width text field encoding.
//!
//! Text fields occupy a fixed byte width in a slot. Values longer than the
//! width are truncated; shorter values are right-padded with null bytes.
//! Truncation is byte-oriented, not character-oriented: cutting at the
//! field width may split a multi-byte UTF-8 sequence, and the split tail
//! decodes as a replacement character. This is part of the persisted
//! format and must not be changed.

/// Encode a text value into exactly `width` bytes.
///
/// The value's UTF-8 bytes are truncated to `width` if longer, otherwise
/// right-padded with null bytes. The result is always `width` bytes long.
pub fn encode_text(value: &str, width: usize) -> Vec<u8> {
    let raw = value.as_bytes();
    let mut out = Vec::with_capacity(width);
    if raw.len() > width {
        out.extend_from_slice(&raw[..width]);
    } else {
        out.extend_from_slice(raw);
        out.resize(width, 0);
    }
    out
}

/// Decode a fixed-width text field.
///
/// Returns the prefix of `bytes` up to (excluding) the first null byte,
/// decoded as UTF-8 with invalid sequences replaced. If no null byte is
/// present the entire input is decoded. Embedded nulls are therefore
/// unrepresentable: a decoded value is always no longer than what was
/// written.
pub fn decode_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_value_is_null_padded() {
        let bytes = encode_text("ab", 5);
        assert_eq!(bytes, b"ab\x00\x00\x00");
    }

    #[test]
    fn exact_width_is_unpadded() {
        let bytes = encode_text("hello", 5);
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn long_value_is_truncated() {
        let bytes = encode_text("hello world", 5);
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn empty_value_is_all_nulls() {
        let bytes = encode_text("", 4);
        assert_eq!(bytes, b"\x00\x00\x00\x00");
    }

    #[test]
    fn decode_stops_at_first_null() {
        assert_eq!(decode_text(b"abc\x00\x00"), "abc");
        // Bytes after the first null are ignored, even if non-null.
        assert_eq!(decode_text(b"ab\x00cd"), "ab");
    }

    #[test]
    fn decode_without_null_takes_everything() {
        assert_eq!(decode_text(b"hello"), "hello");
    }

    #[test]
    fn truncation_may_split_multibyte_character() {
        // "né" is [0x6e, 0xc3, 0xa9]; width 2 cuts the é in half.
        let bytes = encode_text("né", 2);
        assert_eq!(bytes, [0x6e, 0xc3]);
        // The orphaned lead byte decodes as a replacement character.
        assert_eq!(decode_text(&bytes), "n\u{fffd}");
    }

    #[test]
    fn multibyte_value_roundtrips_when_it_fits() {
        let bytes = encode_text("né", 8);
        assert_eq!(bytes.len(), 8);
        assert_eq!(decode_text(&bytes), "né");
    }

    proptest! {
        #[test]
        fn encoded_field_is_always_exactly_width(value in ".*", width in 0usize..64) {
            prop_assert_eq!(encode_text(&value, width).len(), width);
        }

        #[test]
        fn ascii_roundtrip_is_prefix_of_input(value in "[ -~]{0,32}", width in 1usize..64) {
            let decoded = decode_text(&encode_text(&value, width));
            let expected: String = value.chars().take(width).collect();
            prop_assert_eq!(decoded, expected);
        }
    }
}
