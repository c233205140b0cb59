//! Built-in field policies
//!
//! One module per field, each exposing its policy struct(s) and a free
//! validation function. Password, tag, and email each exist in two named
//! variants whose differences are externally observable:
//!
//! - **Password**: strict allows `! $ _ + @ # % & * -`, simple only `! $ _ +`
//! - **Tag**: the rich policy accepts `-` and `.` as separators, the simple
//!   one rejects them
//! - **Email**: the detailed policy parses local part and domain, the simple
//!   one requires a configured domain suffix and an alphanumeric local part
//!
//! # Examples
//!
//! ```rust
//! use signup_validator::prelude::*;
//!
//! let config = ValidationConfig::default();
//! assert!(validate_email("user@[192.168.1.1]", &config).is_valid());
//! assert_eq!(
//!     validate_tag("ab__cd", &config).reason(),
//!     "Tag contains consecutive underscores",
//! );
//! ```

pub mod email;
pub mod name;
pub mod password;
pub mod record;
pub mod tag;

pub use email::{EmailPolicy, SimpleEmailPolicy, validate_email, validate_email_simple};
pub use name::{NamePolicy, validate_name};
pub use password::{
    SimplePasswordPolicy, StrictPasswordPolicy, validate_password, validate_password_simple,
};
pub use record::validate_user_input;
pub use tag::{SimpleTagPolicy, TagPolicy, validate_tag, validate_tag_simple};
