//! Shared state types for the egui form.

use egui::Color32;

use crate::egui_app::ui::style::{self, StatusTone};
use crate::encoding::FormInput;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Values currently shown in the form widgets.
    pub form: FormInput,
    /// Result of the last prediction request, if any.
    pub banner: Option<OutcomeBanner>,
    pub status: StatusBarState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            form: FormInput::default(),
            banner: None,
            status: StatusBarState::idle(),
        }
    }
}

/// Message rendered under the predict button.
#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeBanner {
    pub text: String,
    pub tone: StatusTone,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self::new("Model loads on first prediction", "Idle", StatusTone::Idle)
    }

    pub fn new(text: impl Into<String>, badge_label: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: badge_label.into(),
            badge_color: style::status_badge_color(tone),
        }
    }
}
