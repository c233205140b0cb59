//! Verdict type for validation outcomes
//!
//! Every policy returns a [`Verdict`] rather than a `Result`: rejection is a
//! normal return value with a specific reason string, not a fault. Reason
//! strings are part of the public contract — callers and tests key off the
//! exact text, so wording is stable per rule.
//!
//! All reason fields use `Cow<'static, str>` for zero-allocation in the
//! common case of the built-in static messages.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// VERDICT
// ============================================================================

/// The outcome of one validation call.
///
/// Immutable once constructed; has no identity beyond its value. `reason`
/// carries a canonical success message when `valid` (e.g. "Email is valid")
/// and a specific rejection reason otherwise.
///
/// # Examples
///
/// ```rust
/// use signup_validator::Verdict;
///
/// let verdict = Verdict::fail("Name is empty");
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.reason(), "Name is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the validation succeeded.
    pub valid: bool,

    /// Success message, or the exact reason the input was rejected.
    pub reason: Cow<'static, str>,
}

impl Verdict {
    /// Creates a passing verdict with a canonical success message.
    pub fn pass(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            valid: true,
            reason: reason.into(),
        }
    }

    /// Creates a failing verdict with a specific rejection reason.
    pub fn fail(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the input was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The success message or rejection reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Converts the verdict into a `Result` for `?`-style callers.
    ///
    /// The [`Rejection`] carries the reason string verbatim.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the verdict is failing.
    pub fn into_result(self) -> Result<(), Rejection> {
        if self.valid {
            Ok(())
        } else {
            Err(Rejection {
                reason: self.reason,
            })
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "valid: {}", self.reason)
        } else {
            write!(f, "invalid: {}", self.reason)
        }
    }
}

// ============================================================================
// REJECTION
// ============================================================================

/// A failed verdict as a standard error type.
///
/// Produced only by [`Verdict::into_result`]; exists so callers embedding
/// validation in a `Result` pipeline get a real `std::error::Error` without
/// the library itself ever returning one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct Rejection {
    reason: Cow<'static, str>,
}

impl Rejection {
    /// The rejection reason, byte-for-byte the verdict's reason string.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

// ============================================================================
// TESTS
// ============================================================================
