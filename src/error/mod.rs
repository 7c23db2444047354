use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for catalog-dash
#[derive(Error, Debug)]
pub enum DashError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Catalog error: {message}")]
    Catalog {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Output error: {message}")]
    Output {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DashError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message)
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a catalog error with specific code and path
    pub fn catalog_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Catalog {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Create an output error with specific code
    pub fn output_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Output {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Catalog { source: src, .. }
            | Self::Validation { source: src, .. }
            | Self::Output { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Catalog { message, .. }
            | Self::Validation { message, .. }
            | Self::Output { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Catalog { .. } => 3,
            Self::Validation { .. } => 4,
            Self::Output { .. } => 5,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Catalog { code, .. }
            | Self::Validation { code, .. }
            | Self::Output { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Catalog { message, path, .. } => match path {
                Some(p) => format!("Could not load catalog {}: {}", p.display(), message),
                None => format!("Could not load catalog: {}", message),
            },
            Self::Validation { message, field, .. } => match field {
                Some(f) => format!("Invalid value for '{}': {}", f, message),
                None => format!("Invalid value: {}", message),
            },
            Self::Output { message, .. } => format!("Could not write output: {}", message),
        }
    }
}

impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        let code = match err.kind() {
            csv::ErrorKind::Io(_) => ErrorCode::CATALOG_READ_FAILED,
            _ => ErrorCode::CATALOG_MALFORMED_ROW,
        };
        let message = match err.position() {
            Some(pos) => format!("CSV error at line {}", pos.line()),
            None => "CSV error".to_string(),
        };
        DashError::catalog_with_code(code, message, None).with_source(err)
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::output_with_code(ErrorCode::OUTPUT_SERIALIZATION, "JSON serialization failed")
            .with_source(err)
    }
}

impl From<serde_yaml::Error> for DashError {
    fn from(err: serde_yaml::Error) -> Self {
        DashError::output_with_code(ErrorCode::OUTPUT_SERIALIZATION, "YAML serialization failed")
            .with_source(err)
    }
}

impl From<toml::de::Error> for DashError {
    fn from(err: toml::de::Error) -> Self {
        DashError::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, "Invalid TOML").with_source(err)
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
