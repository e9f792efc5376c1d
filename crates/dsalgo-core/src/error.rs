//! Error types and exit codes for dsalgo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data error (a graph does not contain a requested vertex)

mod macros;

use thiserror::Error;

/// Exit codes used by the dsalgo binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during dsalgo operations
#[derive(Error, Debug)]
pub enum DsaError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("vertex not found: {label}")]
    VertexNotFound { label: String },

    // Generic failures (exit code 1)
    #[error("cannot extract from an empty heap")]
    HeapEmpty,

    #[error("heap capacity exceeded: {requested} elements for capacity {capacity}")]
    CapacityExceeded { capacity: usize, requested: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl DsaError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        DsaError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        DsaError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a vertex label missing from a graph
    pub fn vertex_not_found(label: &str) -> Self {
        DsaError::VertexNotFound {
            label: label.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DsaError::UsageError(_)
            | DsaError::InvalidValue { .. }
            | DsaError::Unsupported { .. } => ExitCode::Usage,

            DsaError::VertexNotFound { .. } => ExitCode::Data,

            DsaError::HeapEmpty
            | DsaError::CapacityExceeded { .. }
            | DsaError::Io(_)
            | DsaError::Json(_)
            | DsaError::Toml(_)
            | DsaError::TomlSerialize(_)
            | DsaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DsaError::UsageError(_) => "usage_error",
            DsaError::InvalidValue { .. } => "invalid_value",
            DsaError::Unsupported { .. } => "unsupported",
            DsaError::VertexNotFound { .. } => "vertex_not_found",
            DsaError::HeapEmpty => "heap_empty",
            DsaError::CapacityExceeded { .. } => "capacity_exceeded",
            DsaError::Io(_) => "io_error",
            DsaError::Json(_) => "json_error",
            DsaError::Toml(_) | DsaError::TomlSerialize(_) => "toml_error",
            DsaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for dsalgo operations
pub type Result<T> = std::result::Result<T, DsaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(
            DsaError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            DsaError::invalid_value("strategy", "greedy").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(DsaError::vertex_not_found("Z").exit_code(), ExitCode::Data);
        assert_eq!(DsaError::HeapEmpty.exit_code(), ExitCode::Failure);
        assert_eq!(
            DsaError::CapacityExceeded {
                capacity: 1,
                requested: 2
            }
            .exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = DsaError::vertex_not_found("Oslo").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "vertex_not_found");
        assert_eq!(json["error"]["message"], "vertex not found: Oslo");
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::Data.into();
        assert_eq!(code, 3);
    }
}
