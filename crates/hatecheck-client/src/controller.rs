//! Submission lifecycle for one text field and one result panel
//!
//! `Idle -> Validating -> Submitting -> (Success | Fallback) -> Idle`
//!
//! The UI state lock is never held across an `.await` or while calling
//! into the surface.

use crate::api::ClassifierApi;
use crate::config::ClientConfig;
use crate::events::{KeyChord, UiEvent};
use crate::fallback::FallbackSynthesizer;
use crate::render::{self, ControlsView, Notice};
use crate::state::{validate_text, Phase, Rejection, UiState};
use crate::surface::Surface;
use hatecheck_core::{AnalysisRequest, AnalysisResult};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

const PREVIEW_CHARS: usize = 50;

/// Where a rendered result came from. Rendering ignores this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Service,
    Fallback,
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input failed validation; no request was sent
    Rejected(Rejection),
    /// Another submission is in flight; no request was sent
    Busy,
    /// A result reached the panel
    Rendered {
        provenance: Provenance,
        result: AnalysisResult,
    },
    /// The request failed and fallback results are disabled
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

pub struct AnalysisController {
    api: Arc<dyn ClassifierApi>,
    surface: Arc<dyn Surface>,
    fallback: FallbackSynthesizer,
    diagnostic_tag: String,
    state: Mutex<UiState>,
}

impl AnalysisController {
    pub fn new(
        api: Arc<dyn ClassifierApi>,
        surface: Arc<dyn Surface>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            api,
            surface,
            fallback: FallbackSynthesizer::new(config.fallback.clone()),
            diagnostic_tag: config.diagnostic_tag.clone(),
            state: Mutex::new(UiState::new(config.min_chars)),
        }
    }

    /// Replace the fallback synthesizer (e.g. with a seeded one)
    pub fn with_fallback(mut self, fallback: FallbackSynthesizer) -> Self {
        self.fallback = fallback;
        self
    }

    /// Copy of the current UI state
    pub fn state(&self) -> UiState {
        self.state.lock().clone()
    }

    /// Push the initial control state to the surface
    pub fn mount(&self) {
        let view = render::controls(&self.state.lock());
        self.surface.apply_controls(&view);
    }

    /// Dispatch a user event. Returns the outcome when the event led to a
    /// submission attempt.
    pub async fn handle(&self, event: UiEvent) -> Option<SubmitOutcome> {
        match event {
            UiEvent::Input(text) => {
                self.input_changed(text);
                None
            }
            UiEvent::Clear => {
                self.clear();
                None
            }
            UiEvent::Submit => Some(self.submit().await),
            UiEvent::Key(chord) => self.key_pressed(&chord).await,
        }
    }

    /// Text field changed: recompute count and submit enablement
    pub fn input_changed(&self, text: impl Into<String>) {
        let view = {
            let mut state = self.state.lock();
            state.set_text(text);
            render::controls(&state)
        };
        self.surface.apply_controls(&view);
    }

    /// Reset the form regardless of prior state
    pub fn clear(&self) {
        let view = {
            let mut state = self.state.lock();
            state.clear();
            render::controls(&state)
        };
        self.surface.clear_input();
        self.surface.apply_controls(&view);
    }

    /// Ctrl+Enter submits when submit is enabled; anything else is a no-op
    pub async fn key_pressed(&self, chord: &KeyChord) -> Option<SubmitOutcome> {
        if !chord.is_submit_shortcut() {
            return None;
        }
        if !self.state.lock().submit_enabled() {
            tracing::debug!("Shortcut ignored, submit is disabled");
            return None;
        }
        Some(self.submit().await)
    }

    /// Validate, send, and render the service's answer or a fallback
    pub async fn submit(&self) -> SubmitOutcome {
        let request = {
            let mut state = self.state.lock();
            if state.is_submitting() {
                tracing::debug!("Submission already in flight");
                return SubmitOutcome::Busy;
            }

            state.begin_validation();
            let validated = validate_text(state.text(), state.min_chars());
            match validated {
                Ok(text) => {
                    state.begin_submission();
                    let view = render::controls(&state);
                    drop(state);
                    self.surface.apply_controls(&view);
                    AnalysisRequest::new(text, self.diagnostic_tag.clone())
                }
                Err(rejection) => {
                    state.settle();
                    drop(state);
                    tracing::debug!("Submission rejected: {:?}", rejection);
                    self.surface.alert(&Notice::new(rejection.message()));
                    return SubmitOutcome::Rejected(rejection);
                }
            }
        };

        let span = tracing::info_span!("submission", id = %Uuid::new_v4());
        self.send(request).instrument(span).await
    }

    async fn send(&self, request: AnalysisRequest) -> SubmitOutcome {
        tracing::info!("Text to analyze: {}", request.preview(PREVIEW_CHARS));

        let (phase, provenance, result) = match self.api.analyze(&request).await {
            Ok(result) => {
                tracing::info!(class = result.class, confidence = result.confidence, "Analysis complete");
                (Phase::Success, Provenance::Service, result)
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::error!("Analysis failed: {}", reason);
                self.surface.alert(&Notice::analysis_failed(&reason));

                if !self.fallback.enabled() {
                    let view = self.transition(|state| {
                        state.finish_submission(Phase::Idle);
                    });
                    self.surface.apply_controls(&view);
                    return SubmitOutcome::Failed(reason);
                }

                tracing::warn!("Rendering fallback result");
                (Phase::Fallback, Provenance::Fallback, self.fallback.synthesize())
            }
        };

        self.render_result(&result);

        let view = self.transition(|state| {
            state.finish_submission(phase);
            state.show_results();
            state.settle();
        });
        self.surface.apply_controls(&view);
        self.surface.scroll_to_results();

        SubmitOutcome::Rendered { provenance, result }
    }

    fn render_result(&self, result: &AnalysisResult) {
        if self.surface.has_result_targets() {
            self.surface.show_result(&render::result_view(result));
        } else {
            tracing::warn!("Result elements not found, creating them");
            self.surface
                .replace_result_markup(&render::result_panel_markup(result));
        }
    }

    fn transition(&self, f: impl FnOnce(&mut UiState)) -> ControlsView {
        let mut state = self.state.lock();
        f(&mut state);
        render::controls(&state)
    }
}
