use crate::predictor::PredictError;

/// What the user currently sees, independent of any display technology.
/// The controller mutates only this; `render` maps it onto the surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub loading: bool,
    pub result_visible: bool,
    pub error: Option<FormError>,
}

/// Failure kinds kept apart until the render boundary. All of them end up
/// in the same error region; the distinction exists for callers and tests.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// Input was empty after trimming; nothing was sent.
    EmptyInput,
    /// The service reported an error in its response body.
    Server(String),
    /// The transport failed or returned a status without a readable body.
    Transport(String),
}

impl FormError {
    /// User-facing message without the warning glyph.
    pub fn message(&self) -> String {
        match self {
            FormError::EmptyInput => "Please enter some text.".to_string(),
            FormError::Server(message) => message.clone(),
            FormError::Transport(message) => message.clone(),
        }
    }
}

impl From<PredictError> for FormError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Server { message } => FormError::Server(message),
            other => FormError::Transport(other.to_string()),
        }
    }
}

/// Display seam owned by the host page: an error text sink, two visibility
/// regions, and the one possible navigation away from the form.
pub trait ViewSurface {
    fn set_error_text(&mut self, text: &str);
    fn set_loading_visible(&mut self, visible: bool);
    fn set_result_visible(&mut self, visible: bool);
    fn navigate(&mut self, url: &str);
}

/// Map a view state onto the surface. The warning glyph is applied here,
/// not where errors are produced.
pub fn render(state: &ViewState, surface: &mut impl ViewSurface) {
    match &state.error {
        Some(err) => surface.set_error_text(&format!("⚠️ {}", err.message())),
        None => surface.set_error_text(""),
    }
    surface.set_loading_visible(state.loading);
    surface.set_result_visible(state.result_visible);
}
