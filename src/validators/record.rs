//! Aggregate validation of a full input record
//!
//! Runs the detailed policies over a [`UserInputRecord`] in fixed order —
//! name, email, password, tag — and returns the first failing verdict
//! unmodified. Fail-fast: no partial results are accumulated, and the field
//! order is observable via which reason surfaces first.

use crate::foundation::{FieldPolicy, UserInputRecord, ValidationConfig, Verdict};
use crate::validators::{EmailPolicy, NamePolicy, StrictPasswordPolicy, TagPolicy};

/// Validates all four fields of a record, stopping at the first failure.
///
/// # Examples
///
/// ```rust
/// use signup_validator::prelude::*;
///
/// let config = ValidationConfig::default();
/// let record = UserInputRecord::new("Alice", "alice@example.com", "s3cret!pw", "alice_01");
/// assert_eq!(validate_user_input(&record, &config).reason(), "All fields valid");
/// ```
pub fn validate_user_input(record: &UserInputRecord, config: &ValidationConfig) -> Verdict {
    let verdict = NamePolicy.check(&record.name, config);
    if !verdict.is_valid() {
        return verdict;
    }
    let verdict = EmailPolicy.check(&record.email, config);
    if !verdict.is_valid() {
        return verdict;
    }
    let verdict = StrictPasswordPolicy.check(&record.password, config);
    if !verdict.is_valid() {
        return verdict;
    }
    let verdict = TagPolicy.check(&record.tag, config);
    if !verdict.is_valid() {
        return verdict;
    }
    Verdict::pass("All fields valid")
}

// ============================================================================
// TESTS
// ============================================================================
