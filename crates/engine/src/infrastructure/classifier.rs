//! HTTP adapter for the external scam classifier service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ports::{ClassifierError, ClassifierPort};

pub const DEFAULT_CLASSIFIER_BASE_URL: &str = "http://localhost:8600";
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 10;

/// Client for the scam classifier's HTTP scoring endpoint.
pub struct HttpClassifier {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    probability: f64,
}

impl HttpClassifier {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a classifier client from `CLASSIFIER_URL` and
    /// `CLASSIFIER_TIMEOUT_SECS`, with defaults for anything unset.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CLASSIFIER_URL")
            .unwrap_or_else(|_| DEFAULT_CLASSIFIER_BASE_URL.to_string());
        let timeout_secs = std::env::var("CLASSIFIER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CLASSIFIER_TIMEOUT_SECS);

        Self::new(&base_url, timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CLASSIFIER_BASE_URL, DEFAULT_CLASSIFIER_TIMEOUT_SECS)
    }
}

#[async_trait]
impl ClassifierPort for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<f64, ClassifierError> {
        let url = format!("{}/v1/classify", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ClassifyRequest { text })
            .send()
            .await
            .map_err(|e| ClassifierError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClassifierError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        if !(0.0..=1.0).contains(&body.probability) {
            return Err(ClassifierError::InvalidResponse(format!(
                "probability {} out of range",
                body.probability
            )));
        }

        Ok(body.probability)
    }
}
