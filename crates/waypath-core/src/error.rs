//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage or configuration error (bad flags, unknown algorithm, missing table entry)
//! - 3: Data error (unreadable request, malformed graph description)
//!
//! An unreachable goal is not an error. Strategies report it as
//! [`SearchResult::NoPath`](crate::strategy::SearchResult::NoPath).

mod macros;

use thiserror::Error;

/// Exit codes for the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage or configuration error (2)
    Usage = 2,
    /// Data error - malformed request (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or dispatching a search
#[derive(Error, Debug)]
pub enum SearchError {
    // Configuration errors (exit code 2)
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("missing {parameter} for algorithm {algorithm}")]
    MissingParameter {
        parameter: String,
        algorithm: String,
    },

    #[error("missing {parameter} for algorithm {algorithm} (no entry for vertex {vertex})")]
    MissingEntry {
        parameter: String,
        algorithm: String,
        vertex: String,
    },

    #[error("Algorithm not implemented yet.")]
    UnknownAlgorithm { name: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl SearchError {
    /// Create an error for a vertex that is not part of the graph
    pub fn unknown_vertex(vertex: impl std::fmt::Display) -> Self {
        SearchError::UnknownVertex {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for a parameter an algorithm requires but did not receive
    pub fn missing_parameter(parameter: &str, algorithm: impl std::fmt::Display) -> Self {
        SearchError::MissingParameter {
            parameter: parameter.to_string(),
            algorithm: algorithm.to_string(),
        }
    }

    /// Create an error for a table that lacks an entry for one vertex
    pub fn missing_entry(
        parameter: &str,
        algorithm: impl std::fmt::Display,
        vertex: impl std::fmt::Display,
    ) -> Self {
        SearchError::MissingEntry {
            parameter: parameter.to_string(),
            algorithm: algorithm.to_string(),
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for an algorithm identifier with no matching strategy
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        SearchError::UnknownAlgorithm { name: name.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SearchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a request that cannot be interpreted
    pub fn invalid_request(reason: impl std::fmt::Display) -> Self {
        SearchError::InvalidRequest {
            reason: reason.to_string(),
        }
    }

    /// True for errors the caller caused through the request or its parameters.
    /// These are terminal: retrying the same request yields the same error.
    pub fn is_configuration(&self) -> bool {
        self.exit_code() == ExitCode::Usage
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SearchError::UnknownVertex { .. }
            | SearchError::MissingParameter { .. }
            | SearchError::MissingEntry { .. }
            | SearchError::UnknownAlgorithm { .. }
            | SearchError::InvalidValue { .. }
            | SearchError::UsageError(_) => ExitCode::Usage,

            SearchError::InvalidRequest { .. } | SearchError::Json(_) => ExitCode::Data,

            SearchError::Io(_) | SearchError::Toml(_) | SearchError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SearchError::UnknownVertex { .. } => "unknown_vertex",
            SearchError::MissingParameter { .. } | SearchError::MissingEntry { .. } => {
                "missing_parameter"
            }
            SearchError::UnknownAlgorithm { .. } => "unknown_algorithm",
            SearchError::InvalidValue { .. } => "invalid_value",
            SearchError::UsageError(_) => "usage_error",
            SearchError::InvalidRequest { .. } => "invalid_request",
            SearchError::Io(_) => "io_error",
            SearchError::Json(_) => "json_error",
            SearchError::Toml(_) => "toml_error",
            SearchError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            SearchError::UnknownVertex { vertex } => {
                error_obj["vertex"] = serde_json::json!(vertex);
            }
            SearchError::UnknownAlgorithm { name } => {
                error_obj["algorithm"] = serde_json::json!(name);
            }
            SearchError::MissingParameter {
                parameter,
                algorithm,
            } => {
                error_obj["parameter"] = serde_json::json!(parameter);
                error_obj["algorithm"] = serde_json::json!(algorithm);
            }
            SearchError::MissingEntry {
                parameter,
                algorithm,
                vertex,
            } => {
                error_obj["parameter"] = serde_json::json!(parameter);
                error_obj["algorithm"] = serde_json::json!(algorithm);
                error_obj["vertex"] = serde_json::json!(vertex);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, SearchError>;
