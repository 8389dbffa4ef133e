use tracing::debug;

use super::redirect::result_url;
use super::view::{render, FormError, ViewState, ViewSurface};
use crate::predictor::{PredictError, Prediction, PredictorClient};

/// Drives one submit cycle of the prediction form: validate, toggle the
/// loading/result regions, issue the request, then either surface an error
/// or navigate to the result page.
pub struct FormController<S: ViewSurface> {
    client: PredictorClient,
    surface: S,
    state: ViewState,
    generation: u64,
}

/// Handle for an in-flight submit cycle. Carries the trimmed text that was
/// sent and the generation it was issued under; a finished cycle only
/// reaches the view if no newer cycle has started since.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    pub text: String,
}

impl<S: ViewSurface> FormController<S> {
    pub fn new(client: PredictorClient, surface: S) -> Self {
        Self {
            client,
            surface,
            state: ViewState::default(),
            generation: 0,
        }
    }

    /// Page-ready initialization: the result region starts hidden.
    /// Safe to invoke more than once.
    pub fn init(&mut self) {
        self.state.result_visible = false;
        render(&self.state, &mut self.surface);
    }

    /// Run one full submit cycle to completion.
    pub async fn submit(&mut self, raw: &str) {
        let Some(ticket) = self.begin(raw) else {
            return;
        };
        let outcome = self.client.predict(&ticket.text).await;
        self.finish(ticket, outcome);
    }

    /// Validate input and move the view into the loading state. Returns
    /// `None` when validation failed and no request should be issued.
    pub fn begin(&mut self, raw: &str) -> Option<SubmitTicket> {
        let text = raw.trim();
        if text.is_empty() {
            self.state.error = Some(FormError::EmptyInput);
            self.state.result_visible = false;
            self.state.loading = false;
            render(&self.state, &mut self.surface);
            return None;
        }

        self.generation += 1;
        self.state.error = None;
        self.state.result_visible = false;
        self.state.loading = true;
        render(&self.state, &mut self.surface);

        Some(SubmitTicket {
            generation: self.generation,
            text: text.to_string(),
        })
    }

    /// Apply a resolved cycle to the view. A cycle superseded by a newer
    /// `begin` is dropped without touching the view, so the last-issued
    /// request always owns the final visible state.
    pub fn finish(&mut self, ticket: SubmitTicket, outcome: Result<Prediction, PredictError>) {
        if ticket.generation != self.generation {
            debug!(
                issued = ticket.generation,
                latest = self.generation,
                "dropping superseded response"
            );
            return;
        }

        self.state.loading = false;
        match outcome {
            Ok(prediction) => {
                self.state.error = None;
                render(&self.state, &mut self.surface);
                self.surface.navigate(&result_url(&prediction));
            }
            Err(err) => {
                self.state.error = Some(err.into());
                render(&self.state, &mut self.surface);
            }
        }
    }

    /// Current view state, for hosts and tests.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
