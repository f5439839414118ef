//! Majority-vote ensemble of binary decision trees.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::{BinaryClassifier, LABEL_DROPOUT, LABEL_GRADUATE};

/// Node of a flattened decision tree. Index 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    /// Go `left` when `row[feature] <= threshold`, otherwise `right`.
    Split {
        feature: u16,
        threshold: f64,
        left: u32,
        right: u32,
    },
    Leaf { label: u8 },
}

/// Flattened binary decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Children always point forward, so traversal terminates.
    fn validate(&self, feature_len: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    threshold,
                } => {
                    if feature as usize >= feature_len {
                        return Err(format!("node {idx} splits on unknown feature {feature}"));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx} has a non-finite threshold"));
                    }
                    for child in [left, right] {
                        let child = child as usize;
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {idx} has invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { label } => {
                    if label != LABEL_DROPOUT && label != LABEL_GRADUATE {
                        return Err(format!("node {idx} has non-binary label {label}"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Label at the leaf reached by `row`.
    pub fn predict(&self, row: ArrayView1<'_, f64>) -> u8 {
        let mut idx = 0usize;
        loop {
            match self.nodes.get(idx) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = row.get(*feature as usize).copied().unwrap_or(0.0);
                    let next = if value <= *threshold { *left } else { *right };
                    idx = next as usize;
                }
                Some(TreeNode::Leaf { label }) => return *label,
                None => return LABEL_DROPOUT,
            }
        }
    }
}

/// Random-forest style ensemble; each tree casts one vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestModel {
    pub feature_len: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForestModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.feature_len == 0 {
            return Err("feature_len must be > 0".to_string());
        }
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_len)
                .map_err(|err| format!("tree {tree_idx}: {err}"))?;
        }
        Ok(())
    }

    /// Number of trees voting for the graduate label.
    pub fn graduate_votes(&self, row: ArrayView1<'_, f64>) -> usize {
        self.trees
            .iter()
            .filter(|tree| tree.predict(row) == LABEL_GRADUATE)
            .count()
    }
}

impl BinaryClassifier for RandomForestModel {
    fn feature_len(&self) -> usize {
        self.feature_len
    }

    /// Ties go to the dropout label.
    fn predict_row(&self, row: ArrayView1<'_, f64>) -> u8 {
        let votes = self.graduate_votes(row);
        if votes * 2 > self.trees.len() {
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

    fn threshold_tree(feature: u16, threshold: f64) -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { label: 0 },
                TreeNode::Leaf { label: 1 },
            ],
        }
    }

    #[test]
    fn tree_walks_to_leaf() {
        let tree = threshold_tree(1, 5.0);
        assert_eq!(tree.predict(array![0.0, 5.0].view()), 0);
        assert_eq!(tree.predict(array![0.0, 5.1].view()), 1);
    }

    #[test]
    fn majority_vote_with_ties_to_dropout() {
        let forest = RandomForestModel {
            feature_len: 2,
            trees: vec![threshold_tree(0, 1.0), threshold_tree(1, 1.0)],
        };
        forest.validate().unwrap();
        assert_eq!(forest.predict_row(array![2.0, 2.0].view()), 1);
        assert_eq!(forest.predict_row(array![2.0, 0.0].view()), 0);
        assert_eq!(forest.graduate_votes(array![2.0, 0.0].view()), 1);
    }

    #[test]
    fn validate_rejects_backward_children() {
        let forest = RandomForestModel {
            feature_len: 1,
            trees: vec![DecisionTree {
                nodes: vec![
                    TreeNode::Split {
                        feature: 0,
                        threshold: 0.0,
                        left: 0,
                        right: 1,
                    },
                    TreeNode::Leaf { label: 1 },
                ],
            }],
        };
        assert!(forest.validate().unwrap_err().contains("invalid child"));
    }

    #[test]
    fn validate_rejects_non_binary_leaf() {
        let forest = RandomForestModel {
            feature_len: 1,
            trees: vec![DecisionTree {
                nodes: vec![TreeNode::Leaf { label: 2 }],
            }],
        };
        assert!(forest.validate().is_err());
    }
}
