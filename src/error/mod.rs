//! Error Handling Module
//!
//! Core error type for the seed pipeline (`SeedError`), its coarse
//! classification (`ErrorCategory`), and conversions from the error types of
//! the crates we sit on.
//!
//! # Example
//!
//! ```rust,ignore
//! use worldseed::error::{ErrorCategory, SeedError};
//!
//! let error = SeedError::UnknownSource("moon".into());
//! assert_eq!(error.category(), ErrorCategory::Client);
//! ```

mod conversions;
pub mod types;

pub use types::*;
