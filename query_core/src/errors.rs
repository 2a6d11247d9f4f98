use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by query composition, planning, and execution.
///
/// The first four kinds are caller faults (a malformed filter, sort, or
/// window); `Execution` means the underlying store failed and is never
/// retried here.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("invalid range filter on '{field}': lower bound {lower} exceeds upper bound {upper}")]
    InvalidFilterRange {
        field: String,
        lower: Value,
        upper: Value,
    },

    #[error("unknown sort field '{field}': not exposed by the projection")]
    UnknownSortField { field: String },

    #[error("invalid page window: limit must be greater than zero")]
    InvalidPageWindow,

    #[error("invalid field name '{name}'")]
    InvalidFieldName { name: String },

    #[error("execution failed in {operation}: {message}")]
    Execution { operation: String, message: String },
}

impl QueryError {
    /// Build an execution failure from an underlying store error.
    pub fn execution(operation: &str, source: impl std::fmt::Display) -> Self {
        Self::Execution {
            operation: operation.to_string(),
            message: source.to_string(),
        }
    }

    /// Whether this error is the caller's fault (malformed filter, sort, or
    /// window) as opposed to a failure of the underlying store.
    pub fn is_caller_fault(&self) -> bool {
        !matches!(self, Self::Execution { .. })
    }
}
