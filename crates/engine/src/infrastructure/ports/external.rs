//! Ports for external services.

use async_trait::async_trait;

use super::error::ClassifierError;

/// Port for the machine-learning scam classifier.
///
/// Implementations return the probability that a message is a scam,
/// in the range `0.0..=1.0`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassifierPort: Send + Sync {
    async fn classify(&self, text: &str) -> Result<f64, ClassifierError>;
}
