//! Settings window.

use super::Settings;
use crate::theme::spacing;
use eframe::egui::{self, RichText};
use navsync_core::InitStrategy;

/// Result of showing the settings window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsResult {
    /// Keep the window open.
    Open,
    /// Apply changes and close.
    Apply,
    /// Cancel changes and close.
    Cancel,
}

#[derive(Default)]
pub struct SettingsWindow;

impl SettingsWindow {
    /// Show the window over the pending copy of the settings.
    pub fn show(&mut self, ctx: &egui::Context, settings: &mut Settings) -> SettingsResult {
        let mut result = SettingsResult::Open;
        let mut open = true;

        egui::Window::new(format!("{} Settings", egui_phosphor::regular::GEAR))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                Self::show_navigation(ui, settings);
                ui.add_space(spacing::MD);
                Self::show_display(ui, settings);
                ui.add_space(spacing::MD);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        result = SettingsResult::Apply;
                    }
                    if ui.button("Cancel").clicked() {
                        result = SettingsResult::Cancel;
                    }
                });
            });

        if !open {
            result = SettingsResult::Cancel;
        }
        result
    }

    fn show_navigation(ui: &mut egui::Ui, settings: &mut Settings) {
        ui.label(RichText::new("Navigation").strong());
        ui.add_space(spacing::XS);
        egui::Grid::new("navigation_settings")
            .num_columns(2)
            .spacing([spacing::MD, spacing::SM])
            .show(ui, |ui| {
                ui.label("Base path");
                ui.text_edit_singleline(&mut settings.navigation.base_path);
                ui.end_row();

                ui.label("First entry");
                egui::ComboBox::from_id_salt("init_strategy")
                    .width(180.0)
                    .selected_text(settings.navigation.strategy.display_name())
                    .show_ui(ui, |ui| {
                        for strategy in InitStrategy::all() {
                            ui.selectable_value(
                                &mut settings.navigation.strategy,
                                *strategy,
                                strategy.display_name(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Start URL");
                ui.text_edit_singleline(&mut settings.start_url);
                ui.end_row();
            });
        ui.label(
            RichText::new("Changing these opens a fresh tab. An empty start URL opens the root.")
                .small()
                .weak(),
        );
    }

    fn show_display(ui: &mut egui::Ui, settings: &mut Settings) {
        let display = &mut settings.display;
        ui.label(RichText::new("Display").strong());
        ui.add_space(spacing::XS);
        ui.checkbox(&mut display.dark_mode, "Dark mode");
        ui.checkbox(&mut display.show_history_panel, "Show history stack");
        ui.horizontal(|ui| {
            ui.label("Table rows");
            ui.add(egui::DragValue::new(&mut display.row_count).range(1..=500));
        });
    }
}
