//! Table view
//!
//! Clicking a row selects it (clicking again clears the selection); each
//! selection becomes a history entry.

use crate::state::DemoState;
use crate::theme::spacing;
use egui::{RichText, Ui};
use navsync_model::RowId;

pub struct TableView;

impl TableView {
    pub fn show(ui: &mut Ui, state: &mut DemoState) {
        let selected = state.selected_row();
        let mut clicked: Option<RowId> = None;
        let mut removed: Option<RowId> = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{} rows", state.rows().len())).weak());
            if let Some(row) = selected {
                ui.separator();
                ui.label(format!("Selected: {row}"));
                if ui.small_button("Clear").clicked() {
                    state.select_row(None);
                }
            }
        });
        ui.add_space(spacing::SM);

        let text_height = egui::TextStyle::Body.resolve(ui.style()).size;
        let rows = state.rows();

        egui_extras::TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(egui_extras::Column::exact(48.0)) // Id
            .column(egui_extras::Column::remainder().at_least(140.0)) // Name
            .column(egui_extras::Column::exact(110.0)) // Category
            .column(egui_extras::Column::exact(60.0)) // Stock
            .column(egui_extras::Column::exact(32.0)) // Remove
            .header(text_height + 6.0, |mut header| {
                for title in ["Id", "Name", "Category", "Stock", ""] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).small().strong());
                    });
                }
            })
            .body(|body| {
                body.rows(text_height + 8.0, rows.len(), |mut row| {
                    let item = &rows[row.index()];
                    let is_selected = selected == Some(item.id);
                    row.set_selected(is_selected);

                    row.col(|ui| {
                        ui.label(RichText::new(item.id.to_string()).monospace());
                    });
                    row.col(|ui| {
                        if ui.selectable_label(is_selected, item.name.as_str()).clicked() {
                            clicked = Some(item.id);
                        }
                    });
                    row.col(|ui| {
                        ui.label(item.category);
                    });
                    row.col(|ui| {
                        ui.label(item.stock.to_string());
                    });
                    row.col(|ui| {
                        if ui
                            .small_button(egui_phosphor::regular::TRASH)
                            .on_hover_text("Remove row")
                            .clicked()
                        {
                            removed = Some(item.id);
                        }
                    });
                });
            });

        if let Some(id) = removed {
            state.remove_row(id);
        } else if let Some(id) = clicked {
            let next = if selected == Some(id) { None } else { Some(id) };
            state.select_row(next);
        }
    }
}
