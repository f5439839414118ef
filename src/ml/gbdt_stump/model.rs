use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::ml::{BinaryClassifier, LABEL_DROPOUT, LABEL_GRADUATE};

/// Single-split decision tree used as a weak learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    /// Feature index used for the split.
    pub feature_index: u16,
    /// Threshold in feature units.
    pub threshold: f64,
    /// Contribution for `feature <= threshold`.
    pub left_value: f64,
    /// Contribution for `feature > threshold`.
    pub right_value: f64,
}

impl Stump {
    /// Predict the stump contribution for a feature row.
    pub fn predict(&self, row: ArrayView1<'_, f64>) -> f64 {
        let value = row.get(self.feature_index as usize).copied().unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Gradient-boosted decision stumps producing a single log-odds score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtStumpModel {
    /// Number of values per feature row.
    pub feature_len: usize,
    /// Learning rate applied to each stump contribution.
    pub learning_rate: f64,
    /// Initial raw score before boosting rounds.
    pub init_raw: f64,
    /// One stump per boosting round.
    pub stumps: Vec<Stump>,
}

impl GbdtStumpModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), String> {
        if self.feature_len == 0 {
            return Err("feature_len must be > 0".to_string());
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err("learning_rate must be > 0".to_string());
        }
        for (round_idx, stump) in self.stumps.iter().enumerate() {
            if stump.feature_index as usize >= self.feature_len {
                return Err(format!(
                    "Round {round_idx} splits on feature {} but only {} exist",
                    stump.feature_index, self.feature_len
                ));
            }
        }
        Ok(())
    }

    /// Raw log-odds score for the graduate label.
    pub fn predict_raw(&self, row: ArrayView1<'_, f64>) -> f64 {
        let mut raw = self.init_raw;
        for stump in &self.stumps {
            raw += self.learning_rate * stump.predict(row);
        }
        raw
    }
}

impl BinaryClassifier for GbdtStumpModel {
    fn feature_len(&self) -> usize {
        self.feature_len
    }

    fn predict_row(&self, row: ArrayView1<'_, f64>) -> u8 {
        if self.predict_raw(row) > 0.0 {
            LABEL_GRADUATE
        } else {
            LABEL_DROPOUT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn stump_predict_branches() {
        let stump = Stump {
            feature_index: 0,
            threshold: 0.5,
            left_value: -1.0,
            right_value: 2.0,
        };
        assert_eq!(stump.predict(array![0.0].view()), -1.0);
        assert_eq!(stump.predict(array![0.5].view()), -1.0);
        assert_eq!(stump.predict(array![0.6].view()), 2.0);
    }

    #[test]
    fn model_sums_rounds_into_label() {
        let model = GbdtStumpModel {
            feature_len: 2,
            learning_rate: 0.5,
            init_raw: -0.25,
            stumps: vec![
                Stump {
                    feature_index: 0,
                    threshold: 0.0,
                    left_value: -1.0,
                    right_value: 1.0,
                },
                Stump {
                    feature_index: 1,
                    threshold: 10.0,
                    left_value: 0.0,
                    right_value: 1.0,
                },
            ],
        };
        model.validate().unwrap();
        assert_eq!(model.predict_row(array![0.0, 0.0].view()), 0);
        assert_eq!(model.predict_row(array![1.0, 0.0].view()), 1);
        assert!((model.predict_raw(array![1.0, 20.0].view()) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_out_of_range_feature() {
        let model = GbdtStumpModel {
            feature_len: 1,
            learning_rate: 1.0,
            init_raw: 0.0,
            stumps: vec![Stump {
                feature_index: 3,
                threshold: 0.0,
                left_value: 0.0,
                right_value: 0.0,
            }],
        };
        assert!(model.validate().is_err());
    }
}
