//! Display-name validation
//!
//! Length bounds count decoded code points so non-Latin names are not
//! penalized for their encoding width; the character-class scan is
//! byte-wise and inspects only ASCII bytes. Leading and trailing spaces are
//! allowed (the input is never trimmed).

use crate::classify;
use crate::foundation::{FieldPolicy, ValidationConfig, Verdict};

// ============================================================================
// NAME POLICY
// ============================================================================

/// Validates display names.
///
/// ASCII content is restricted to letters, digits, spaces, hyphens, and
/// apostrophes; bytes ≥ 0x80 pass unexamined.
///
/// # Examples
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// let config = ValidationConfig::default();
/// assert!(NamePolicy.check("Mary-Jane O'Brien", &config).is_valid());
/// assert_eq!(
///     NamePolicy.check("Bob!", &config).reason(),
///     "Name contains invalid punctuation",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NamePolicy;

impl FieldPolicy for NamePolicy {
    fn check(&self, input: &str, config: &ValidationConfig) -> Verdict {
        if input.is_empty() {
            return Verdict::fail("Name is empty");
        }

        let chars = input.chars().count();
        if chars < config.name_min_len {
            return Verdict::fail("Name is shorter than minimum");
        }
        if chars > config.name_max_len {
            return Verdict::fail("Name is longer than maximum");
        }

        for &byte in input.as_bytes() {
            if classify::is_opaque(byte) {
                continue;
            }
            if classify::is_control_or_space(byte) && byte != b' ' {
                return Verdict::fail("Name contains control characters");
            }
            if classify::is_punctuation(byte) && byte != b'\'' && byte != b'-' {
                return Verdict::fail("Name contains invalid punctuation");
            }
        }

        Verdict::pass("Name is valid")
    }
}

/// Creates a new [`NamePolicy`].
#[must_use]
pub const fn name_policy() -> NamePolicy {
    NamePolicy
}

/// Validates a display name with [`NamePolicy`].
pub fn validate_name(input: &str, config: &ValidationConfig) -> Verdict {
    NamePolicy.check(input, config)
}

// ============================================================================
// TESTS
// ============================================================================
