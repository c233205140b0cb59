//! Email validation
//!
//! The detailed policy parses the address into a local part and a domain at
//! the first `@` and validates each stage with a specific rejection reason:
//!
//! - Quoted local parts (`"..."`) skip the character scan entirely
//! - Bracketed domains (`[...]`) are IP literals: digits, `.`, and `:` only
//! - Dotted domains are split into labels; labels must be non-empty and must
//!   not start or end with a hyphen
//!
//! This is deliberately the common-case subset, not the full RFC 5321/5322
//! grammar: no comments, no folding whitespace, no quoted-pair escapes.
//!
//! The legacy simple policy instead requires the whole address to end with
//! the configured domain suffix and the remainder to be alphanumeric.

use crate::classify;
use crate::foundation::{FieldPolicy, ValidationConfig, Verdict};

/// Symbols accepted in an unquoted local part, beyond letters and digits.
const LOCAL_SYMBOLS: &[u8] = b"!#$%&'*+-/=?^_`{|}~";

/// Scans an unquoted, non-empty local part. Returns the first failure, or
/// `None` when every byte is acceptable.
fn check_unquoted_local(local: &[u8]) -> Option<Verdict> {
    if local[0] == b'.' || local[local.len() - 1] == b'.' {
        return Some(Verdict::fail("Local part starts/ends with dot"));
    }

    for (i, &byte) in local.iter().enumerate() {
        if byte < 0x20 {
            return Some(Verdict::fail("Local part contains control characters"));
        }
        if byte == b'.' {
            if local.get(i + 1) == Some(&b'.') {
                return Some(Verdict::fail("Local part has consecutive dots"));
            }
            continue;
        }
        if classify::is_alphanumeric(byte) || LOCAL_SYMBOLS.contains(&byte) {
            continue;
        }
        return Some(Verdict::fail("Local part contains invalid character"));
    }

    None
}

// ============================================================================
// EMAIL POLICY
// ============================================================================

/// Validates email addresses with per-stage rejection reasons.
///
/// # Examples
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// let config = ValidationConfig::default();
/// assert!(EmailPolicy.check("user+alias@sub.domain.com", &config).is_valid());
/// assert!(EmailPolicy.check("user@[192.168.1.1]", &config).is_valid());
/// assert_eq!(
///     EmailPolicy.check("notanemail", &config).reason(),
///     "Email does not contain @",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmailPolicy;

impl FieldPolicy for EmailPolicy {
    fn check(&self, input: &str, config: &ValidationConfig) -> Verdict {
        if input.is_empty() {
            return Verdict::fail("Email is empty");
        }

        // The first `@` is the split point.
        let Some((local, domain)) = input.split_once('@') else {
            return Verdict::fail("Email does not contain @");
        };

        if local.is_empty() {
            return Verdict::fail("Local part is empty");
        }
        if local.len() < config.email_local_min_len {
            return Verdict::fail("Local part too short");
        }
        if local.len() > config.email_local_max_len {
            return Verdict::fail("Local part too long");
        }

        // RFC-quoted local parts are accepted as-is, embedded dots included.
        let quoted = local.len() >= 2 && local.starts_with('"') && local.ends_with('"');
        if !quoted {
            if let Some(verdict) = check_unquoted_local(local.as_bytes()) {
                return verdict;
            }
        }

        if domain.is_empty() {
            return Verdict::fail("Domain is empty");
        }

        // IP-literal domains are complete on their own: nothing past the
        // bracket scan applies.
        if domain.len() >= 2 && domain.starts_with('[') && domain.ends_with(']') {
            let interior = &domain.as_bytes()[1..domain.len() - 1];
            if interior.is_empty() {
                return Verdict::fail("Empty IP literal");
            }
            for &byte in interior {
                if !(byte.is_ascii_digit() || byte == b'.' || byte == b':') {
                    return Verdict::fail("IP literal contains invalid char");
                }
            }
            return Verdict::pass("Email is valid");
        }

        if domain.len() > 255 {
            return Verdict::fail("Domain too long");
        }
        for label in domain.split('.') {
            if label.is_empty() {
                return Verdict::fail("Domain contains empty label");
            }
            if label.starts_with('-') {
                return Verdict::fail("Label starts with -");
            }
            if label.ends_with('-') {
                return Verdict::fail("Label ends with -");
            }
        }

        Verdict::pass("Email is valid")
    }
}

// ============================================================================
// SIMPLE EMAIL POLICY
// ============================================================================

/// Legacy policy requiring a configured domain suffix.
///
/// The address must end with [`ValidationConfig::email_domain`] (including
/// its `@`), and the remainder must be a non-empty, fully alphanumeric local
/// part within the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimpleEmailPolicy;

impl FieldPolicy for SimpleEmailPolicy {
    fn check(&self, input: &str, config: &ValidationConfig) -> Verdict {
        if input.is_empty() {
            return Verdict::fail("Email is empty");
        }
        let Some(domain) = config.email_domain.as_deref() else {
            return Verdict::fail("Required email domain is not configured");
        };
        let Some(local) = input.strip_suffix(domain) else {
            return Verdict::fail("Email does not end with required domain");
        };

        if local.is_empty() {
            return Verdict::fail("Local part is empty");
        }
        if local.len() < config.email_local_min_len {
            return Verdict::fail("Local part too short");
        }
        if local.len() > config.email_local_max_len {
            return Verdict::fail("Local part too long");
        }
        if local.bytes().any(|b| !classify::is_alphanumeric(b)) {
            return Verdict::fail("Local part contains invalid character");
        }

        Verdict::pass("Email is valid")
    }
}

/// Creates a new [`EmailPolicy`].
#[must_use]
pub const fn email_policy() -> EmailPolicy {
    EmailPolicy
}

/// Creates a new [`SimpleEmailPolicy`].
#[must_use]
pub const fn simple_email_policy() -> SimpleEmailPolicy {
    SimpleEmailPolicy
}

/// Validates an email address with [`EmailPolicy`].
pub fn validate_email(input: &str, config: &ValidationConfig) -> Verdict {
    EmailPolicy.check(input, config)
}

/// Validates an email address with the legacy [`SimpleEmailPolicy`].
pub fn validate_email_simple(input: &str, config: &ValidationConfig) -> Verdict {
    SimpleEmailPolicy.check(input, config)
}

// ============================================================================
// TESTS
// ============================================================================
