//! Error types for the domain layer.

use std::fmt;

use super::FlowId;

/// Error codes exposed to the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowErrorCode {
    FlowNotFound,
    QuestionNotFound,
    ProgramNotFound,
    ValidationFailed,
    StorageError,
}

impl fmt::Display for FlowErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowErrorCode::FlowNotFound => "FLOW_NOT_FOUND",
            FlowErrorCode::QuestionNotFound => "QUESTION_NOT_FOUND",
            FlowErrorCode::ProgramNotFound => "PROGRAM_NOT_FOUND",
            FlowErrorCode::ValidationFailed => "VALIDATION_FAILED",
            FlowErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Errors produced by flow operations.
///
/// Note that "no answer recorded yet" and "no matching program" are NOT
/// errors: advancing without an answer is a silent no-op, and an empty
/// recommendation is a valid handled outcome with a generic fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Flow not found: {0}")]
    NotFound(FlowId),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Unknown program: {0}")]
    UnknownProgram(String),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl FlowError {
    pub fn not_found(id: FlowId) -> Self {
        FlowError::NotFound(id)
    }

    pub fn unknown_question(id: impl Into<String>) -> Self {
        FlowError::UnknownQuestion(id.into())
    }

    pub fn unknown_program(id: impl Into<String>) -> Self {
        FlowError::UnknownProgram(id.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        FlowError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        FlowError::Storage(message.into())
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> FlowErrorCode {
        match self {
            FlowError::NotFound(_) => FlowErrorCode::FlowNotFound,
            FlowError::UnknownQuestion(_) => FlowErrorCode::QuestionNotFound,
            FlowError::UnknownProgram(_) => FlowErrorCode::ProgramNotFound,
            FlowError::ValidationFailed { .. } => FlowErrorCode::ValidationFailed,
            FlowError::Storage(_) => FlowErrorCode::StorageError,
        }
    }
}
