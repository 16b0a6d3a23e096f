//! Back/forward buttons and the address bar.

use crate::state::DemoState;
use crate::theme::spacing;
use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

/// Requests the bar cannot fulfil on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserBarAction {
    OpenSettings,
}

pub struct BrowserBar;

impl BrowserBar {
    pub fn show(ui: &mut Ui, state: &mut DemoState) -> Option<BrowserBarAction> {
        let mut action = None;
        ui.add_space(spacing::XS);
        ui.horizontal(|ui| {
            let history = state.history();
            let (can_back, can_forward) = (history.can_go_back(), history.can_go_forward());

            if ui
                .add_enabled(can_back, egui::Button::new(icons::ARROW_LEFT))
                .on_hover_text("Back (Alt+Left)")
                .clicked()
            {
                state.back();
            }
            if ui
                .add_enabled(can_forward, egui::Button::new(icons::ARROW_RIGHT))
                .on_hover_text("Forward (Alt+Right)")
                .clicked()
            {
                state.forward();
            }
            if ui
                .button(icons::ARROW_CLOCKWISE)
                .on_hover_text("Reload (F5)")
                .clicked()
            {
                state.reload();
            }

            let settings_clicked = ui
                .with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let clicked = ui.button(icons::GEAR).on_hover_text("Settings").clicked();

                    let mut supported = state.history().is_supported();
                    if ui
                        .checkbox(&mut supported, "pushState")
                        .on_hover_text("Simulate a browser without history support")
                        .changed()
                    {
                        state.set_supported(supported);
                    }

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut state.address)
                            .desired_width(ui.available_width())
                            .font(egui::TextStyle::Monospace),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        let url = state.address.clone();
                        state.navigate(&url);
                    }
                    clicked
                })
                .inner;
            if settings_clicked {
                action = Some(BrowserBarAction::OpenSettings);
            }
        });

        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("State: {}", state.view_state())).small().weak());
            if state.was_redirected() {
                ui.label(RichText::new("redirected to the root").small().weak());
            }
            if state.is_detached() {
                ui.label(
                    RichText::new("history detached")
                        .small()
                        .color(ui.visuals().warn_fg_color),
                );
            }
        });
        ui.add_space(spacing::XS);
        action
    }
}
