//! Error notifications raised by the coordinator.

use crate::state::DemoState;
use crate::theme::{colors, spacing};
use egui::{Color32, RichText, Ui};

pub struct NotificationBar;

impl NotificationBar {
    pub fn show(ui: &mut Ui, state: &mut DemoState) {
        let mut dismissed = None;
        for (index, message) in state.notifications().iter().enumerate() {
            egui::Frame::new()
                .fill(colors::NOTIFICATION_BG)
                .inner_margin(spacing::SM)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let text = format!("{} {message}", egui_phosphor::regular::WARNING);
                        ui.label(RichText::new(text).color(Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button(egui_phosphor::regular::X).clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                });
        }
        if let Some(index) = dismissed {
            state.dismiss_notification(index);
        }
    }
}
