//! Type Conversions for SeedError
//!
//! `?` on `Settings::validate` lands here.

use super::types::SeedError;

impl From<validator::ValidationErrors> for SeedError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigurationError(format!("invalid settings: {err}"))
    }
}
