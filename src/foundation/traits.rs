//! Core trait for field policies
//!
//! A policy is a named, self-consistent set of rules for validating one
//! field; a field may have more than one policy (strict vs. legacy-simple).

use crate::foundation::{ValidationConfig, Verdict};

// ============================================================================
// FIELD POLICY TRAIT
// ============================================================================

/// The trait every named policy implements.
///
/// A policy is a pure function of the input text and the configuration: it
/// borrows both for the duration of the call, terminates for any input
/// (including degenerate configurations), and returns a [`Verdict`] rather
/// than an error.
///
/// # Examples
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// let config = ValidationConfig::default();
/// let verdict = TagPolicy.check("alice_01", &config);
/// assert!(verdict.is_valid());
/// ```
pub trait FieldPolicy {
    /// Validates the input against this policy's rules.
    ///
    /// Returns the first failing rule's verdict, or a passing verdict with
    /// the field's canonical success message.
    fn check(&self, input: &str, config: &ValidationConfig) -> Verdict;
}
