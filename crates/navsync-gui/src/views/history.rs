//! History stack panel.

use crate::state::DemoState;
use crate::theme::{colors, spacing};
use egui::{RichText, Ui};
use navsync_core::codec::from_payload;
use navsync_core::{AnyRow, decode};

pub struct HistoryPanel;

impl HistoryPanel {
    pub fn show(ui: &mut Ui, state: &mut DemoState) {
        ui.add_space(spacing::SM);
        ui.label(
            RichText::new(format!(
                "{} History",
                egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE
            ))
            .strong(),
        );
        let stats = state.history().stats();
        ui.label(
            RichText::new(format!(
                "{} pushed, {} replaced, {} errors",
                stats.pushes, stats.replaces, stats.errors
            ))
            .small()
            .weak(),
        );
        ui.separator();

        let mut jump = None;
        let current = state.history().index();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, entry) in state.history().entries().iter().enumerate().rev() {
                let label = match entry.payload.as_ref() {
                    None => "page load".to_string(),
                    Some(payload) => {
                        match from_payload(payload).and_then(|record| decode(record, &AnyRow)) {
                            Ok(view_state) => view_state.to_string(),
                            Err(_) => payload.to_string(),
                        }
                    }
                };
                let text = RichText::new(format!("{index}. {label}"));
                let text = if index == current {
                    text.color(colors::CURRENT_ENTRY).strong()
                } else {
                    text
                };
                if ui
                    .selectable_label(index == current, text)
                    .on_hover_text(entry.url.as_str())
                    .clicked()
                    && index != current
                {
                    jump = Some(index);
                }
            }
        });
        if let Some(index) = jump {
            state.go_to(index);
        }
    }
}
