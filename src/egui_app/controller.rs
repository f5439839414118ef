//! Bridges the form state to the encoder and predictor.

use crate::config::AppSettings;
use crate::egui_app::state::{OutcomeBanner, StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::encoding::encode;
use crate::outcome::Outcome;
use crate::predictor::{ModelState, PredictError, Predictor};

/// Blocking message shown when the model artifact is absent.
pub const MODEL_MISSING_MESSAGE: &str = "Model file not found!";

/// Owns the form state and the model handle.
pub struct FormController {
    pub ui: UiState,
    predictor: Predictor,
}

impl FormController {
    pub fn new(settings: &AppSettings) -> Self {
        Self::with_predictor(Predictor::new(settings.model_path.clone()))
    }

    pub fn with_predictor(predictor: Predictor) -> Self {
        let mut controller = Self {
            ui: UiState::default(),
            predictor,
        };
        controller.refresh_status();
        controller
    }

    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }

    /// Encode the current form and run one prediction.
    pub fn submit(&mut self) {
        let record = encode(&self.ui.form);
        self.ui.banner = Some(match self.predictor.predict(&record) {
            Ok(outcome) => OutcomeBanner {
                text: outcome.message().to_string(),
                tone: outcome_tone(outcome),
            },
            Err(err) => {
                tracing::warn!("Prediction aborted: {err}");
                OutcomeBanner {
                    text: error_message(&err),
                    tone: StatusTone::Error,
                }
            }
        });
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let path = self.predictor.model_path().display();
        self.ui.status = match self.predictor.state() {
            ModelState::Unloaded => StatusBarState::new(
                format!("Model {path} loads on first prediction"),
                "Idle",
                StatusTone::Idle,
            ),
            ModelState::Loaded => {
                StatusBarState::new(format!("Model {path} loaded"), "Ready", StatusTone::Info)
            }
            ModelState::Failed => StatusBarState::new(
                format!("Model {path} unavailable; restart after fixing it"),
                "Error",
                StatusTone::Error,
            ),
        };
    }
}

fn outcome_tone(outcome: Outcome) -> StatusTone {
    match outcome {
        Outcome::Graduate => StatusTone::Success,
        Outcome::Dropout => StatusTone::Warning,
    }
}

fn error_message(err: &PredictError) -> String {
    match err {
        PredictError::ModelMissing { .. } => MODEL_MISSING_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
