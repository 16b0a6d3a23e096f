//! About view

use crate::state::DemoState;
use crate::theme::spacing;
use egui::{RichText, Ui};

pub struct AboutView;

impl AboutView {
    pub fn show(ui: &mut Ui, state: &DemoState) {
        ui.vertical_centered(|ui| {
            ui.add_space(spacing::LG);
            ui.heading(RichText::new("Table History Demo").size(26.0));
            ui.add_space(spacing::SM);
            ui.label(RichText::new("Browser history for a tabbed table").weak());
        });
        ui.add_space(spacing::LG);

        ui.label(
            "Every tab switch and row selection is recorded as a history entry. \
             Back and forward restore the recorded view without creating new \
             entries, and the address bar accepts deep links such as:",
        );
        ui.add_space(spacing::SM);
        let base = navsync_core::url::normalize_base(&state.settings.navigation.base_path);
        for example in ["table/", "table/3/", "about/"] {
            ui.label(RichText::new(format!("{base}/{example}")).monospace());
        }
        ui.add_space(spacing::SM);
        ui.label(
            "Malformed links redirect to the application root. Removing a row \
             leaves older entries pointing at it; restoring one of them shows \
             the table with nothing selected.",
        );
    }
}
