use std::path::{Path, PathBuf};

use dropout_predictor::encoding::{FEATURE_COLUMNS, FEATURE_COUNT};
use dropout_predictor::ml::{
    ARTIFACT_FORMAT_VERSION, ClassifierArtifact, ClassifierKind, LogRegModel,
};

/// Path of the artifact shipped with the repository.
pub fn bundled_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("model")
        .join("model.json")
}

/// Logistic regression that ignores its input and always returns the same label.
pub fn constant_artifact(graduate: bool) -> ClassifierArtifact {
    ClassifierArtifact {
        format_version: ARTIFACT_FORMAT_VERSION,
        feature_names: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        classifier: ClassifierKind::LogisticRegression(LogRegModel {
            weights: vec![0.0; FEATURE_COUNT],
            intercept: if graduate { 1.0 } else { -1.0 },
            feature_mean: None,
            feature_std: None,
        }),
    }
}

pub fn write_artifact(path: &Path, artifact: &ClassifierArtifact) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create model parent dirs");
    }
    let json = serde_json::to_vec_pretty(artifact).expect("serialize artifact");
    std::fs::write(path, json).expect("write artifact");
}
