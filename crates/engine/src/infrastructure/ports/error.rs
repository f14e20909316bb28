//! Error types for infrastructure ports.

use thiserror::Error;

/// Errors from the external scam classifier.
#[derive(Debug, Error, Clone)]
pub enum ClassifierError {
    #[error("Classifier request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid classifier response: {0}")]
    InvalidResponse(String),
}

/// Errors from the session store.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("Session store {operation} failed: {message}")]
    Backend { operation: String, message: String },
}

impl StoreError {
    pub fn backend(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_error_display() {
        let err = ClassifierError::RequestFailed("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Classifier request failed: connection refused"
        );

        let err = ClassifierError::InvalidResponse("probability out of range".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid classifier response: probability out of range"
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::backend("put", "shard poisoned");
        assert_eq!(err.to_string(), "Session store put failed: shard poisoned");
    }
}
