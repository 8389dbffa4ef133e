// types.rs - the /predict wire contract
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

/// A completed prediction as returned by the service. Job order is
/// preserved as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub personality: String,
    pub description: String,
    pub recommended_jobs: Vec<String>,
}

/// Response body for `/predict`. The service reports failures both through
/// non-success statuses and through an `error` field inside an otherwise
/// successful response, so the error arm is matched first.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Error { error: String },
    Success(Prediction),
}
