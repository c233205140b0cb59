//! Handle/tag validation
//!
//! A left-to-right byte scan carrying one bit of state: whether the
//! previous byte was an underscore. Two policies exist: the rich one
//! accepts `-` and `.` as separators, the legacy simple one rejects them.

use crate::classify;
use crate::foundation::{FieldPolicy, ValidationConfig, Verdict};

fn check_tag(input: &str, config: &ValidationConfig, allow_separators: bool) -> Verdict {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return Verdict::fail("Tag is empty");
    }
    if bytes.len() < config.tag_min_len {
        return Verdict::fail("Tag too short");
    }
    if bytes.len() > config.tag_max_len {
        return Verdict::fail("Tag too long");
    }

    // A non-ASCII first byte is exempt from the leading-character rule.
    let first = bytes[0];
    if !classify::is_opaque(first) && !classify::is_alphanumeric(first) {
        return Verdict::fail("First character must be letter or number");
    }

    let mut prev_underscore = false;
    for &byte in &bytes[1..] {
        if classify::is_opaque(byte) || classify::is_alphanumeric(byte) {
            prev_underscore = false;
        } else if byte == b'_' {
            if prev_underscore {
                return Verdict::fail("Tag contains consecutive underscores");
            }
            prev_underscore = true;
        } else if allow_separators && (byte == b'-' || byte == b'.') {
            prev_underscore = false;
        } else {
            return Verdict::fail("Tag contains invalid character");
        }
    }

    Verdict::pass("Tag is valid")
}

// ============================================================================
// TAG POLICY
// ============================================================================

/// Validates handles/tags, accepting `-` and `.` as separators.
///
/// # Examples
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// let config = ValidationConfig::default();
/// assert!(TagPolicy.check("alice.dev-01", &config).is_valid());
/// assert_eq!(
///     TagPolicy.check("_alice", &config).reason(),
///     "First character must be letter or number",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagPolicy;

impl FieldPolicy for TagPolicy {
    fn check(&self, input: &str, config: &ValidationConfig) -> Verdict {
        check_tag(input, config, true)
    }
}

// ============================================================================
// SIMPLE TAG POLICY
// ============================================================================

/// Legacy policy: only letters, digits, and single underscores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimpleTagPolicy;

impl FieldPolicy for SimpleTagPolicy {
    fn check(&self, input: &str, config: &ValidationConfig) -> Verdict {
        check_tag(input, config, false)
    }
}

/// Creates a new [`TagPolicy`].
#[must_use]
pub const fn tag_policy() -> TagPolicy {
    TagPolicy
}

/// Creates a new [`SimpleTagPolicy`].
#[must_use]
pub const fn simple_tag_policy() -> SimpleTagPolicy {
    SimpleTagPolicy
}

/// Validates a tag with [`TagPolicy`].
pub fn validate_tag(input: &str, config: &ValidationConfig) -> Verdict {
    TagPolicy.check(input, config)
}

/// Validates a tag with the legacy [`SimpleTagPolicy`].
pub fn validate_tag_simple(input: &str, config: &ValidationConfig) -> Verdict {
    SimpleTagPolicy.check(input, config)
}

// ============================================================================
// TESTS
// ============================================================================
