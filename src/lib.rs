// Public API exports
pub mod form;
pub mod predictor;

// Re-export main types for convenience
pub use form::{render, result_url, FormController, FormError, ViewState, ViewSurface};
pub use predictor::{PredictError, PredictRequest, Prediction, PredictorClient};
