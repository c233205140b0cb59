//! Validation configuration
//!
//! An immutable value object holding the per-field length bounds and the
//! optional required email domain suffix. Callers supply a configuration to
//! every validation call; policies never mutate or cache it, so one instance
//! can be shared freely across threads.
//!
//! Degenerate bounds (e.g. `min > max`) are not corrected or reported —
//! behavior is whatever the bound comparisons naturally produce, and every
//! policy stays total.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION CONFIG
// ============================================================================

/// Length bounds and domain constraint for all field policies.
///
/// Name bounds are counted in decoded code points; password, tag, and
/// email-local bounds are byte lengths.
///
/// # Examples
///
/// ```rust
/// use signup_validator::ValidationConfig;
///
/// let config = ValidationConfig::default()
///     .with_tag_bounds(3, 16)
///     .with_email_domain("@example.com");
/// assert_eq!(config.tag_min_len, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum name length, in code points.
    pub name_min_len: usize,
    /// Maximum name length, in code points.
    pub name_max_len: usize,

    /// Minimum password length, in bytes.
    pub password_min_len: usize,
    /// Maximum password length, in bytes.
    pub password_max_len: usize,

    /// Minimum tag length, in bytes.
    pub tag_min_len: usize,
    /// Maximum tag length, in bytes.
    pub tag_max_len: usize,

    /// Minimum email local-part length, in bytes.
    pub email_local_min_len: usize,
    /// Maximum email local-part length, in bytes.
    pub email_local_max_len: usize,

    /// Required address suffix for [`SimpleEmailPolicy`], including the `@`
    /// (e.g. `"@example.com"`). Ignored by the detailed email policy.
    ///
    /// [`SimpleEmailPolicy`]: crate::validators::SimpleEmailPolicy
    pub email_domain: Option<Cow<'static, str>>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_min_len: 1,
            name_max_len: 64,
            password_min_len: 8,
            password_max_len: 64,
            tag_min_len: 2,
            tag_max_len: 32,
            email_local_min_len: 1,
            email_local_max_len: 64,
            email_domain: None,
        }
    }
}

impl ValidationConfig {
    /// Sets the name length bounds (code points).
    #[must_use]
    pub fn with_name_bounds(mut self, min: usize, max: usize) -> Self {
        self.name_min_len = min;
        self.name_max_len = max;
        self
    }

    /// Sets the password length bounds (bytes).
    #[must_use]
    pub fn with_password_bounds(mut self, min: usize, max: usize) -> Self {
        self.password_min_len = min;
        self.password_max_len = max;
        self
    }

    /// Sets the tag length bounds (bytes).
    #[must_use]
    pub fn with_tag_bounds(mut self, min: usize, max: usize) -> Self {
        self.tag_min_len = min;
        self.tag_max_len = max;
        self
    }

    /// Sets the email local-part length bounds (bytes).
    #[must_use]
    pub fn with_email_local_bounds(mut self, min: usize, max: usize) -> Self {
        self.email_local_min_len = min;
        self.email_local_max_len = max;
        self
    }

    /// Sets the required email domain suffix for the simple email policy.
    #[must_use]
    pub fn with_email_domain(mut self, domain: impl Into<Cow<'static, str>>) -> Self {
        self.email_domain = Some(domain.into());
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let c = ValidationConfig::default();
        assert_eq!((c.name_min_len, c.name_max_len), (1, 64));
        assert_eq!((c.password_min_len, c.password_max_len), (8, 64));
        assert_eq!((c.tag_min_len, c.tag_max_len), (2, 32));
        assert_eq!((c.email_local_min_len, c.email_local_max_len), (1, 64));
        assert!(c.email_domain.is_none());
    }

    #[test]
    fn builders_chain() {
        let c = ValidationConfig::default()
            .with_name_bounds(2, 10)
            .with_password_bounds(12, 128)
            .with_email_domain("@corp.example");
        assert_eq!(c.name_max_len, 10);
        assert_eq!(c.password_min_len, 12);
        assert_eq!(c.email_domain.as_deref(), Some("@corp.example"));
    }
}
