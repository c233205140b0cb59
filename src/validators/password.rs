//! Password validation
//!
//! Passwords are treated as opaque byte strings: length bounds are byte
//! counts and the character scan never decodes multi-byte sequences. Two
//! policies exist because two call sites with different strictness are
//! externally observable: the strict policy's allowed-symbol set is
//! `! $ _ + @ # % & * -`, the legacy simple policy's is `! $ _ +`.

use crate::classify;
use crate::foundation::{FieldPolicy, ValidationConfig, Verdict};

/// Symbols accepted by [`StrictPasswordPolicy`].
const STRICT_SYMBOLS: &[u8] = b"!$_+@#%&*-";

/// Symbols accepted by [`SimplePasswordPolicy`].
const SIMPLE_SYMBOLS: &[u8] = b"!$_+";

fn check_password(input: &str, config: &ValidationConfig, symbols: &[u8]) -> Verdict {
    if input.is_empty() {
        return Verdict::fail("Password is empty");
    }
    if input.len() < config.password_min_len {
        return Verdict::fail("Password is too short");
    }
    if input.len() > config.password_max_len {
        return Verdict::fail("Password is too long");
    }

    for &byte in input.as_bytes() {
        if classify::is_opaque(byte)
            || classify::is_alphanumeric(byte)
            || symbols.contains(&byte)
        {
            continue;
        }
        if classify::is_control_or_space(byte) {
            return Verdict::fail("Password contains space or control character");
        }
        return Verdict::fail("Password contains invalid character");
    }

    Verdict::pass("Password is valid")
}

// ============================================================================
// STRICT PASSWORD POLICY
// ============================================================================

/// Validates passwords with the full allowed-symbol set.
///
/// # Examples
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// let config = ValidationConfig::default();
/// assert!(StrictPasswordPolicy.check("s3cret#pw!", &config).is_valid());
/// assert_eq!(
///     StrictPasswordPolicy.check("bad pass word", &config).reason(),
///     "Password contains space or control character",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrictPasswordPolicy;

impl FieldPolicy for StrictPasswordPolicy {
    fn check(&self, input: &str, config: &ValidationConfig) -> Verdict {
        check_password(input, config, STRICT_SYMBOLS)
    }
}

// ============================================================================
// SIMPLE PASSWORD POLICY
// ============================================================================

/// Legacy policy accepting only `! $ _ +` beyond letters and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimplePasswordPolicy;

impl FieldPolicy for SimplePasswordPolicy {
    fn check(&self, input: &str, config: &ValidationConfig) -> Verdict {
        check_password(input, config, SIMPLE_SYMBOLS)
    }
}

/// Creates a new [`StrictPasswordPolicy`].
#[must_use]
pub const fn strict_password_policy() -> StrictPasswordPolicy {
    StrictPasswordPolicy
}

/// Creates a new [`SimplePasswordPolicy`].
#[must_use]
pub const fn simple_password_policy() -> SimplePasswordPolicy {
    SimplePasswordPolicy
}

/// Validates a password with [`StrictPasswordPolicy`].
pub fn validate_password(input: &str, config: &ValidationConfig) -> Verdict {
    StrictPasswordPolicy.check(input, config)
}

/// Validates a password with the legacy [`SimplePasswordPolicy`].
pub fn validate_password_simple(input: &str, config: &ValidationConfig) -> Verdict {
    SimplePasswordPolicy.check(input, config)
}

// ============================================================================
// TESTS
// ============================================================================
