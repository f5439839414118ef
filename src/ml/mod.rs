//! Pre-trained binary classifiers and their JSON artifact format.
//!
//! An artifact pairs the ordered feature names a model was trained on with the
//! model parameters. Inference is plain Rust over `ndarray` rows; training
//! happens elsewhere and only the exported parameters are loaded here.

pub mod forest;
pub mod gbdt_stump;
pub mod logreg;

use std::path::{Path, PathBuf};

use ndarray::{ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encoding::{FeatureFrame, SchemaMismatch};

pub use forest::{DecisionTree, RandomForestModel, TreeNode};
pub use gbdt_stump::{GbdtStumpModel, Stump};
pub use logreg::LogRegModel;

/// Artifact format understood by this build.
pub const ARTIFACT_FORMAT_VERSION: i64 = 1;

/// Label predicted for a student who drops out.
pub const LABEL_DROPOUT: u8 = 0;
/// Label predicted for a student who graduates.
pub const LABEL_GRADUATE: u8 = 1;

/// A model that maps one feature row to a 0/1 label.
pub trait BinaryClassifier {
    /// Number of values expected per row.
    fn feature_len(&self) -> usize;

    /// Native binary decision for one row.
    fn predict_row(&self, row: ArrayView1<'_, f64>) -> u8;
}

/// Model parameters, tagged by model family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierKind {
    LogisticRegression(LogRegModel),
    GbdtStump(GbdtStumpModel),
    RandomForest(RandomForestModel),
}

impl ClassifierKind {
    fn as_classifier(&self) -> &dyn BinaryClassifier {
        match self {
            ClassifierKind::LogisticRegression(model) => model,
            ClassifierKind::GbdtStump(model) => model,
            ClassifierKind::RandomForest(model) => model,
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            ClassifierKind::LogisticRegression(model) => model.validate(),
            ClassifierKind::GbdtStump(model) => model.validate(),
            ClassifierKind::RandomForest(model) => model.validate(),
        }
    }

    /// Short family name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ClassifierKind::LogisticRegression(_) => "logistic_regression",
            ClassifierKind::GbdtStump(_) => "gbdt_stump",
            ClassifierKind::RandomForest(_) => "random_forest",
        }
    }
}

/// Serialized classifier plus the feature schema it was trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub format_version: i64,
    /// Ordered training column names.
    pub feature_names: Vec<String>,
    pub classifier: ClassifierKind,
}

/// Errors raised while reading or using a classifier artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid model JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid model: {0}")]
    Invalid(String),
    #[error("Feature schema mismatch: {0}")]
    Schema(#[from] SchemaMismatch),
}

impl ClassifierArtifact {
    /// Read and validate an artifact from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = std::fs::read(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: Self =
            serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        artifact.validate().map_err(ArtifactError::Invalid)?;
        Ok(artifact)
    }

    /// Validate format version and structural invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(format!(
                "Unsupported format_version {} (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            ));
        }
        if self.feature_names.is_empty() {
            return Err("No feature_names defined".to_string());
        }
        self.classifier.validate()?;
        let expected = self.classifier.as_classifier().feature_len();
        if expected != self.feature_names.len() {
            return Err(format!(
                "Classifier expects {expected} features but feature_names lists {}",
                self.feature_names.len()
            ));
        }
        Ok(())
    }

    /// Predict one label per frame row after checking the frame's columns.
    pub fn predict(&self, frame: &FeatureFrame) -> Result<Vec<u8>, ArtifactError> {
        frame.check_schema(&self.feature_names)?;
        let classifier = self.classifier.as_classifier();
        Ok(frame
            .rows
            .axis_iter(Axis(0))
            .map(|row| classifier.predict_row(row))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{FEATURE_COLUMNS, FEATURE_COUNT, FormInput, encode};

    fn artifact_with_bias(bias: f64) -> ClassifierArtifact {
        ClassifierArtifact {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_names: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            classifier: ClassifierKind::LogisticRegression(LogRegModel {
                weights: vec![0.0; FEATURE_COUNT],
                intercept: bias,
                feature_mean: None,
                feature_std: None,
            }),
        }
    }

    #[test]
    fn predicts_one_label_per_row() {
        let frame = encode(&FormInput::default()).to_frame();
        assert_eq!(artifact_with_bias(1.0).predict(&frame).unwrap(), vec![1]);
        assert_eq!(artifact_with_bias(-1.0).predict(&frame).unwrap(), vec![0]);
    }

    #[test]
    fn rejects_frame_with_foreign_schema() {
        let mut artifact = artifact_with_bias(1.0);
        artifact.feature_names[3] = "Mothers_education".into();
        let frame = encode(&FormInput::default()).to_frame();
        let err = artifact.predict(&frame).unwrap_err();
        assert!(matches!(err, ArtifactError::Schema(_)));
    }

    #[test]
    fn validate_rejects_width_disagreement() {
        let mut artifact = artifact_with_bias(0.0);
        artifact.feature_names.pop();
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_format_version() {
        let mut artifact = artifact_with_bias(0.0);
        artifact.format_version = 7;
        assert!(artifact.validate().unwrap_err().contains("format_version"));
    }

    #[test]
    fn parses_tagged_json() {
        let names: Vec<String> = FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect();
        let json = serde_json::json!({
            "format_version": 1,
            "feature_names": names,
            "classifier": {
                "kind": "logistic_regression",
                "weights": vec![0.0; FEATURE_COUNT],
                "intercept": 0.5
            }
        });
        let artifact: ClassifierArtifact = serde_json::from_value(json).unwrap();
        artifact.validate().unwrap();
        assert_eq!(artifact.classifier.name(), "logistic_regression");
    }
}
