pub mod client;
pub mod types;


pub use client::{PredictError, PredictorClient};
pub use types::{PredictRequest, PredictResponse, Prediction};
