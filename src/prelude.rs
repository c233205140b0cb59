//! Prelude module for convenient imports.
//!
//! Provides a single `use signup_validator::prelude::*;` import that brings
//! in the foundation types, every policy, and the free validation functions.
//!
//! # Examples
//!
//! ```rust
//! use signup_validator::prelude::*;
//!
//! let config = ValidationConfig::default();
//! assert!(validate_name("Alice", &config).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core types and traits
// ============================================================================

pub use crate::foundation::{FieldPolicy, Rejection, UserInputRecord, ValidationConfig, Verdict};

// ============================================================================
// POLICIES AND VALIDATION FUNCTIONS
// ============================================================================

pub use crate::validators::{
    EmailPolicy, NamePolicy, SimpleEmailPolicy, SimplePasswordPolicy, SimpleTagPolicy,
    StrictPasswordPolicy, TagPolicy, validate_email, validate_email_simple, validate_name,
    validate_password, validate_password_simple, validate_tag, validate_tag_simple,
    validate_user_input,
};

// ============================================================================
// CONSTRUCTOR FUNCTIONS
// ============================================================================

pub use crate::validators::email::{email_policy, simple_email_policy};
pub use crate::validators::name::name_policy;
pub use crate::validators::password::{simple_password_policy, strict_password_policy};
pub use crate::validators::tag::{simple_tag_policy, tag_policy};
