//! # signup-validator
//!
//! Validation for the four user-supplied signup fields — display name,
//! email address, password, and handle/tag — against configurable length
//! and character-composition rules.
//!
//! Every check returns a [`Verdict`]: acceptance, or a specific, stable,
//! human-readable rejection reason. Rejection is a normal return value,
//! never a panic or an `Err` — callers who prefer `?`-style flow can
//! convert with [`Verdict::into_result`].
//!
//! ## Quick Start
//!
//! ```rust
//! use signup_validator::prelude::*;
//!
//! let config = ValidationConfig::default();
//! let record = UserInputRecord::new("Alice", "alice@example.com", "s3cret!pw", "alice_01");
//!
//! let verdict = validate_user_input(&record, &config);
//! assert!(verdict.is_valid());
//! assert_eq!(verdict.reason(), "All fields valid");
//! ```
//!
//! ## Policies
//!
//! Each field is validated by a named policy implementing [`FieldPolicy`].
//! Password, tag, and email each exist in two variants with observably
//! different rules:
//!
//! - **Name**: [`NamePolicy`](validators::NamePolicy)
//! - **Password**: [`StrictPasswordPolicy`](validators::StrictPasswordPolicy),
//!   [`SimplePasswordPolicy`](validators::SimplePasswordPolicy) (smaller
//!   allowed-symbol set)
//! - **Tag**: [`TagPolicy`](validators::TagPolicy),
//!   [`SimpleTagPolicy`](validators::SimpleTagPolicy) (rejects `-` and `.`)
//! - **Email**: [`EmailPolicy`](validators::EmailPolicy),
//!   [`SimpleEmailPolicy`](validators::SimpleEmailPolicy) (required
//!   domain-suffix form)
//!
//! All policies are pure functions of their input and configuration: no
//! I/O, no shared state, linear time in the input length, and safe to call
//! from any number of threads.

pub mod classify;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use foundation::{FieldPolicy, Rejection, UserInputRecord, ValidationConfig, Verdict};
pub use validators::{
    validate_email, validate_email_simple, validate_name, validate_password,
    validate_password_simple, validate_tag, validate_tag_simple, validate_user_input,
};
