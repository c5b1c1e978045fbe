use std::result::Result as StdResult;

use thiserror::Error;

/// Error type covering every failure the planner can surface.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid selection `{input}` for {field}")]
    InvalidSelection { field: String, input: String },
    #[error("Invalid number `{input}` for {field}")]
    InvalidNumericInput { field: String, input: String },
    #[error("Degenerate loan parameters: {0}")]
    DegenerateLoanParameters(String),
    #[error("Input closed before `{0}` was answered")]
    InputClosed(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = StdResult<T, PlannerError>;

impl PlannerError {
    pub fn invalid_selection(field: impl Into<String>, input: impl Into<String>) -> Self {
        PlannerError::InvalidSelection {
            field: field.into(),
            input: input.into(),
        }
    }

    pub fn invalid_number(field: impl Into<String>, input: impl Into<String>) -> Self {
        PlannerError::InvalidNumericInput {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Errors the session recovers from without aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidSelection { .. } | PlannerError::DegenerateLoanParameters(_)
        )
    }
}
