//! Validation trait and helpers for configuration types

use crate::error::{ConfigError, Result};
use std::path::Path;

/// Trait for validating configuration values
///
/// Implement this for any config type that needs checks beyond what the
/// type system already guarantees.
pub trait Validate {
    /// Returns `Ok(())` if validation passes, or a `ConfigError` describing
    /// what failed.
    fn validate(&self) -> Result<()>;
}

/// Helper function to validate a path setting is not blank
pub fn validate_path(field: impl Into<String>, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: field.into(),
            message: "Path cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Helper function to validate integer is at most `max`
pub fn validate_max(field: impl Into<String>, value: usize, max: usize) -> Result<()> {
    if value > max {
        return Err(ConfigError::OutOfRange {
            field: field.into(),
            value,
            min: 0,
            max,
        });
    }
    Ok(())
}
