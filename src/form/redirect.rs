// redirect.rs - the /result handoff
use crate::predictor::Prediction;

/// Build the result-page URL for a prediction. The job list is joined with
/// ", " before encoding, which is what the result page splits on.
pub fn result_url(prediction: &Prediction) -> String {
    format!(
        "/result?personality={}&description={}&recommended_jobs={}",
        urlencoding::encode(&prediction.personality),
        urlencoding::encode(&prediction.description),
        urlencoding::encode(&prediction.recommended_jobs.join(", "))
    )
}
