#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the student dropout prediction form.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use dropout_predictor::config;
use dropout_predictor::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use dropout_predictor::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = match config::load_or_default() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Using default settings: {err}");
            config::AppSettings::default()
        }
    };
    tracing::info!("Model path: {}", settings.model_path.display());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([settings.window.width, settings.window.height])
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_maximized(settings.window.maximized);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Student Dropout Prediction",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(&settings)))),
    )?;
    Ok(())
}
