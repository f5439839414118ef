//! Binary logistic regression over the encoded feature row.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::{BinaryClassifier, LABEL_DROPOUT, LABEL_GRADUATE};

/// Linear decision function with optional per-feature standardization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRegModel {
    /// One weight per feature, in column order.
    pub weights: Vec<f64>,
    pub intercept: f64,
    /// Means subtracted before weighting, when the model was trained on scaled input.
    #[serde(default)]
    pub feature_mean: Option<Vec<f64>>,
    #[serde(default)]
    pub feature_std: Option<Vec<f64>>,
}

impl LogRegModel {
    /// Validate vector lengths and finiteness.
    pub fn validate(&self) -> Result<(), String> {
        let dim = self.weights.len();
        if dim == 0 {
            return Err("No weights defined".to_string());
        }
        if self.weights.iter().any(|w| !w.is_finite()) || !self.intercept.is_finite() {
            return Err("weights and intercept must be finite".to_string());
        }
        match (&self.feature_mean, &self.feature_std) {
            (None, None) => {}
            (Some(mean), Some(std)) => {
                if mean.len() != dim {
                    return Err("feature_mean length mismatch".to_string());
                }
                if std.len() != dim {
                    return Err("feature_std length mismatch".to_string());
                }
            }
            _ => return Err("feature_mean and feature_std must be set together".to_string()),
        }
        Ok(())
    }

    /// Signed distance from the decision boundary.
    pub fn decision_value(&self, row: ArrayView1<'_, f64>) -> f64 {
        let mut sum = self.intercept;
        for (i, (&weight, &value)) in self.weights.iter().zip(row.iter()).enumerate() {
            sum += weight * self.scale(i, value);
        }
        sum
    }

    fn scale(&self, index: usize, value: f64) -> f64 {
        match (&self.feature_mean, &self.feature_std) {
            (Some(mean), Some(std)) => (value - mean[index]) / std[index].max(1e-12),
            _ => value,
        }
    }
}

impl BinaryClassifier for LogRegModel {
    fn feature_len(&self) -> usize {
        self.weights.len()
    }

    fn predict_row(&self, row: ArrayView1<'_, f64>) -> u8 {
        if self.decision_value(row) > 0.0 {
            LABEL_GRADUATE
        } else {
            LABEL_DROPOUT
        }
    }
}
