//! Student dropout prediction: form encoding and classifier inference.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// egui form front end.
pub mod egui_app;
/// Raw form values and the feature record they encode into.
pub mod encoding;
/// Tracing subscriber setup.
pub mod logging;
/// Classifier artifacts and inference.
pub mod ml;
/// Prediction outcome messages.
pub mod outcome;
/// Load-once model handle.
pub mod predictor;
