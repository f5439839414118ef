//! Load-once classifier handle.
//!
//! The artifact is read on first use and the result (success or failure) is
//! cached for the lifetime of the handle. A failed load is never retried; a new
//! handle (in practice, a restart) is required to try again. The loaded model is
//! immutable, so a shared `&Predictor` can serve concurrent callers.

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use thiserror::Error;

use crate::encoding::{FeatureRecord, SchemaMismatch};
use crate::ml::{ArtifactError, ClassifierArtifact};
use crate::outcome::Outcome;

/// Default artifact location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "model/model.json";

/// Errors surfaced to the caller of [`Predictor::predict`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error("Model file not found: {}", path.display())]
    ModelMissing { path: PathBuf },
    #[error("Model file {} could not be loaded: {reason}", path.display())]
    ModelInvalid { path: PathBuf, reason: String },
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(#[from] SchemaMismatch),
}

/// Lifecycle of the cached model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Unloaded,
    Loaded,
    Failed,
}

/// Owns the classifier artifact and runs predictions against it.
#[derive(Debug)]
pub struct Predictor {
    model_path: PathBuf,
    model: OnceLock<Result<ClassifierArtifact, PredictError>>,
}

impl Predictor {
    /// Create an unloaded handle for the artifact at `model_path`.
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            model: OnceLock::new(),
        }
    }

    /// Create a handle that is already loaded with `artifact`.
    pub fn from_artifact(model_path: impl Into<PathBuf>, artifact: ClassifierArtifact) -> Self {
        let model = OnceLock::new();
        let _ = model.set(Ok(artifact));
        Self {
            model_path: model_path.into(),
            model,
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn state(&self) -> ModelState {
        match self.model.get() {
            None => ModelState::Unloaded,
            Some(Ok(_)) => ModelState::Loaded,
            Some(Err(_)) => ModelState::Failed,
        }
    }

    /// Load the artifact on first call; later calls return the cached result.
    pub fn load(&self) -> Result<&ClassifierArtifact, PredictError> {
        self.model
            .get_or_init(|| load_artifact(&self.model_path))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Raw 0/1 label for one record.
    pub fn predict_label(&self, record: &FeatureRecord) -> Result<u8, PredictError> {
        let artifact = self.load()?;
        let frame = record.to_frame();
        let labels = artifact.predict(&frame).map_err(|err| match err {
            ArtifactError::Schema(mismatch) => {
                tracing::error!("Refusing to predict: {mismatch}");
                PredictError::SchemaMismatch(mismatch)
            }
            other => PredictError::ModelInvalid {
                path: self.model_path.clone(),
                reason: other.to_string(),
            },
        })?;
        labels
            .first()
            .copied()
            .ok_or_else(|| PredictError::ModelInvalid {
                path: self.model_path.clone(),
                reason: "classifier returned no label".to_string(),
            })
    }

    /// Predict the outcome for one record.
    pub fn predict(&self, record: &FeatureRecord) -> Result<Outcome, PredictError> {
        let label = self.predict_label(record)?;
        let outcome = Outcome::from_label(label);
        tracing::info!(label, ?outcome, "Prediction complete");
        Ok(outcome)
    }
}

fn load_artifact(path: &Path) -> Result<ClassifierArtifact, PredictError> {
    if !path.exists() {
        tracing::error!("Model file not found at {}", path.display());
        return Err(PredictError::ModelMissing {
            path: path.to_path_buf(),
        });
    }
    match ClassifierArtifact::load_json(path) {
        Ok(artifact) => {
            tracing::info!(
                "Loaded {} classifier from {} ({} features)",
                artifact.classifier.name(),
                path.display(),
                artifact.feature_names.len()
            );
            Ok(artifact)
        }
        Err(err) => {
            tracing::error!("Failed to load model: {err}");
            Err(PredictError::ModelInvalid {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })
        }
    }
}
