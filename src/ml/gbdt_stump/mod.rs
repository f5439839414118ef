//! Binary gradient-boosted decision-stump classifier.
//!
//! The exported model is a sum of single-split trees over the feature row; a
//! positive total score predicts the graduate label.

mod model;

pub use model::{GbdtStumpModel, Stump};
