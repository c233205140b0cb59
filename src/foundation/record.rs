//! User input record
//!
//! The four raw signup fields validated together by the aggregate
//! validator. Ephemeral: constructed by the caller immediately before
//! validation, borrowed for the duration of the call, and holding no state
//! afterward.

use serde::{Deserialize, Serialize};

/// The raw name, email, password, and tag supplied by one user.
///
/// # Examples
///
/// ```rust
/// use signup_validator::UserInputRecord;
///
/// let record = UserInputRecord::new("Alice", "alice@example.com", "s3cret!pw", "alice_01");
/// assert_eq!(record.tag, "alice_01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInputRecord {
    /// The user's display name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The user's password.
    pub password: String,
    /// The user's handle/tag.
    pub tag: String,
}

impl UserInputRecord {
    /// Creates a record from the four raw fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            tag: tag.into(),
        }
    }
}
