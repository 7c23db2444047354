use super::{DashError, ErrorCode};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to DashError with specific error type
    fn to_config_error(self, message: impl Into<String>) -> Result<T, DashError>;
    fn to_catalog_error(self, code: u16, path: &Path) -> Result<T, DashError>;
    fn to_output_error(self, message: impl Into<String>) -> Result<T, DashError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>) -> Result<T, DashError> {
        self.map_err(|e| DashError::config(message).with_source(e))
    }

    fn to_catalog_error(self, code: u16, path: &Path) -> Result<T, DashError> {
        self.map_err(|e| {
            DashError::catalog_with_code(code, describe(code), Some(path.to_path_buf()))
                .with_source(e)
        })
    }

    fn to_output_error(self, message: impl Into<String>) -> Result<T, DashError> {
        self.map_err(|e| {
            DashError::output_with_code(ErrorCode::OUTPUT_WRITE_FAILED, message).with_source(e)
        })
    }
}

fn describe(code: u16) -> String {
    super::describe_error_code(code).to_string()
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;
    use std::fmt::Display;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<Path>) -> DashError {
        DashError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
    }

    /// Create a not found error for the catalog source
    pub fn catalog_not_found(path: impl AsRef<Path>) -> DashError {
        DashError::catalog_with_code(
            ErrorCode::CATALOG_NOT_FOUND,
            "Catalog file not found",
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create an error for required columns absent from the catalog header
    pub fn missing_columns(path: impl AsRef<Path>, columns: &[&str]) -> DashError {
        DashError::catalog_with_code(
            ErrorCode::CATALOG_MISSING_COLUMNS,
            format!("Missing required columns: {}", columns.join(", ")),
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create an invalid config value error
    pub fn invalid_config_value(field: &str, reason: impl Display) -> DashError {
        DashError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("Invalid value for '{}': {}", field, reason),
        )
    }
}
