//! Byte classifiers
//!
//! Primitive predicates applied to single bytes, ASCII-only. Bytes outside
//! the ASCII range (≥ 0x80) are "opaque": they are UTF-8 continuation or
//! lead bytes of multi-byte characters and are never inspected further, so
//! non-Latin scripts pass the character-class stages unexamined wherever a
//! policy accepts opaque content.

/// Returns `true` for bytes outside the ASCII range.
#[must_use]
pub const fn is_opaque(byte: u8) -> bool {
    byte >= 0x80
}

/// Returns `true` for ASCII letters and digits.
#[must_use]
pub const fn is_alphanumeric(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Returns `true` for the space byte and any ASCII control byte.
///
/// Covers the full ASCII whitespace set: every whitespace byte other than
/// `' '` itself (tab, newline, vertical tab, form feed, carriage return) is
/// a control byte.
#[must_use]
pub const fn is_control_or_space(byte: u8) -> bool {
    byte == b' ' || byte.is_ascii_control()
}

/// Returns `true` for ASCII punctuation.
#[must_use]
pub const fn is_punctuation(byte: u8) -> bool {
    byte.is_ascii_punctuation()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_starts_at_0x80() {
        assert!(!is_opaque(0x7F));
        assert!(is_opaque(0x80));
        assert!(is_opaque(0xFF));
    }

    #[test]
    fn control_or_space_covers_ascii_whitespace() {
        for byte in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r', 0x00, 0x1F, 0x7F] {
            assert!(is_control_or_space(byte), "byte {byte:#04x}");
        }
        assert!(!is_control_or_space(b'a'));
        assert!(!is_control_or_space(b'-'));
    }

    #[test]
    fn punctuation_excludes_space_and_alnum() {
        assert!(is_punctuation(b'_'));
        assert!(is_punctuation(b'\''));
        assert!(!is_punctuation(b' '));
        assert!(!is_punctuation(b'a'));
        assert!(!is_punctuation(b'7'));
    }
}
