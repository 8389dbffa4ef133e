use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::types::{PredictRequest, PredictResponse, Prediction};

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Error string reported by the service itself, regardless of status.
    #[error("{message}")]
    Server { message: String },

    /// Non-success status whose body carried no readable error report.
    #[error("Server error: {status_text}")]
    Http { status: u16, status_text: String },
}

pub struct PredictorClient {
    http: Client,
    endpoint: String,
}

impl PredictorClient {
    /// Client with no request timeout. The caller owns the loading state,
    /// which stays up until the transport resolves.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Submit text for prediction. `text` must already be trimmed and
    /// non-empty; validation lives in the form layer.
    pub async fn predict(&self, text: &str) -> Result<Prediction, PredictError> {
        let req = PredictRequest {
            text: text.to_string(),
        };

        debug!(text_len = req.text.len(), "sending prediction request");

        let response = self
            .http
            .post(format!("{}/predict", self.endpoint))
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "received prediction response");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            if let Ok(PredictResponse::Error { error }) = serde_json::from_str(&body) {
                return Err(PredictError::Server { message: error });
            }
            return Err(PredictError::Http {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        match response.json::<PredictResponse>().await? {
            PredictResponse::Error { error } => Err(PredictError::Server { message: error }),
            PredictResponse::Success(prediction) => Ok(prediction),
        }
    }
}
