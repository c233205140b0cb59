//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Verdict**: [`Verdict`], the boolean-plus-reason outcome of one call,
//!   and [`Rejection`], its `std::error::Error` bridge
//! - **Configuration**: [`ValidationConfig`], the length bounds and optional
//!   domain constraint every policy reads
//! - **Input**: [`UserInputRecord`], the four raw fields validated together
//! - **Traits**: [`FieldPolicy`], implemented by every named policy

pub mod config;
pub mod record;
pub mod traits;
pub mod verdict;

pub use config::ValidationConfig;
pub use record::UserInputRecord;
pub use traits::FieldPolicy;
pub use verdict::{Rejection, Verdict};
