//! Error types and exit codes for tracequery
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, malformed plan file)
//! - 2: Usage error (bad flags/args, malformed node names)
//! - 3: Data error (invalid graph input, unknown node)

mod macros;

use thiserror::Error;

use crate::graph::{Cost, NodeKey};

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a trace graph
#[derive(Error, Debug)]
pub enum TraceError {
    // Usage errors (exit code 2)
    #[error("invalid node '{0}' (expected a single uppercase letter)")]
    InvalidNode(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("duplicate trace {from}{to}: only one edge per ordered pair is allowed")]
    DuplicateEdge { from: NodeKey, to: NodeKey },

    #[error("invalid cost {cost} for trace {from}{to}: costs must be positive")]
    InvalidCost {
        from: NodeKey,
        to: NodeKey,
        cost: Cost,
    },

    #[error("unknown node: {node}")]
    UnknownNode { node: NodeKey },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TraceError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TraceError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TraceError::InvalidNode(_) | TraceError::UsageError(_) => ExitCode::Usage,

            TraceError::DuplicateEdge { .. }
            | TraceError::InvalidCost { .. }
            | TraceError::UnknownNode { .. }
            | TraceError::InvalidValue { .. } => ExitCode::Data,

            TraceError::Io(_) | TraceError::Toml(_) | TraceError::Json(_) | TraceError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TraceError::InvalidNode(_) => "invalid_node",
            TraceError::UsageError(_) => "usage_error",
            TraceError::DuplicateEdge { .. } => "duplicate_edge",
            TraceError::InvalidCost { .. } => "invalid_cost",
            TraceError::UnknownNode { .. } => "unknown_node",
            TraceError::InvalidValue { .. } => "invalid_value",
            TraceError::Io(_) => "io_error",
            TraceError::Toml(_) => "toml_error",
            TraceError::Json(_) => "json_error",
            TraceError::Other(_) => "other",
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

/// Result type alias for tracequery operations
pub type Result<T> = std::result::Result<T, TraceError>;
