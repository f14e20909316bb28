//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// Caller-supplied input violates a rule for the named field
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Operation is not legal in the session's current state
    #[error("Invalid session state: {0}")]
    InvalidSessionState(String),

    /// A scenario pool must hold at least one template
    #[error("Scenario pool is empty")]
    EmptyScenarioPool,

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates an invalid-input error for a named field.
    ///
    /// Use this when caller-supplied data violates a rule:
    /// - Required fields are missing
    /// - Values are outside allowed ranges
    ///
    /// # Example
    /// ```ignore
    /// if message.is_none() {
    ///     return Err(DomainError::invalid_input("message", "field is required"));
    /// }
    /// ```
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-session-state error
    pub fn invalid_session_state(msg: impl Into<String>) -> Self {
        Self::InvalidSessionState(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
