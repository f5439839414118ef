//! egui renderer for the enrollment form.

mod form_panel;
pub mod style;

use eframe::egui::{self, Frame, Margin, RichText};

use crate::config::AppSettings;
use crate::egui_app::controller::FormController;

/// Smallest window the form still lays out in.
pub const MIN_VIEWPORT_SIZE: [f32; 2] = [480.0, 360.0];

/// Renders the single-screen form using the controller state.
pub struct EguiApp {
    controller: FormController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(settings: &AppSettings) -> Self {
        Self::with_controller(FormController::new(settings))
    }

    pub fn with_controller(controller: FormController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(style::palette().bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        9.0,
                        status.badge_color,
                    );
                    ui.add_space(24.0);
                    ui.label(RichText::new(&status.badge_label).color(egui::Color32::WHITE));
                    ui.separator();
                    ui.label(&status.text);
                });
            });
    }

    fn render_banner(&self, ui: &mut egui::Ui) {
        let Some(banner) = &self.controller.ui.banner else {
            return;
        };
        Frame::new()
            .fill(style::banner_fill(banner.tone))
            .stroke(egui::Stroke::new(1.0, style::status_badge_color(banner.tone)))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&banner.text).strong().size(16.0));
            });
    }

    fn render_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.heading("Student Dropout Prediction");
                    ui.label(
                        "Masukkan data mahasiswa untuk memprediksi kemungkinan dropout atau lulus.",
                    );
                    ui.add_space(12.0);
                    ui.label(RichText::new("Input Data Mahasiswa").size(18.0).strong());
                    ui.add_space(6.0);
                    form_panel::render_form(ui, &mut self.controller.ui.form);
                    ui.add_space(12.0);
                    if form_panel::predict_button(ui) {
                        self.controller.submit();
                    }
                    ui.add_space(8.0);
                    self.render_banner(ui);
                });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        self.render_form(ctx);
    }
}
