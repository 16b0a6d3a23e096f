//! Main application struct and eframe::App implementation

use crate::settings::ui::{SettingsResult, SettingsWindow};
use crate::settings::{Settings, load_settings, save_settings};
use crate::state::DemoState;
use crate::theme::spacing;
use crate::views::{
    AboutView, BrowserBar, BrowserBarAction, HistoryPanel, NotificationBar, TableView,
};
use eframe::egui::{self, RichText};
use navsync_model::ActiveView;

pub struct NavsyncApp {
    state: DemoState,
    settings_window: SettingsWindow,
    /// Edited copy of the settings while the window is open.
    settings_pending: Option<Settings>,
}

impl NavsyncApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings = load_settings();
        tracing::info!(
            "Loaded settings: base_path={}, strategy={}",
            settings.navigation.base_path,
            settings.navigation.strategy.display_name()
        );

        Self {
            state: DemoState::new(settings),
            settings_window: SettingsWindow,
            settings_pending: None,
        }
    }

    fn open_settings(&mut self) {
        if self.settings_pending.is_none() {
            self.settings_pending = Some(self.state.settings.clone());
        }
    }

    fn close_settings(&mut self, apply: bool) {
        let Some(pending) = self.settings_pending.take() else {
            return;
        };
        if !apply {
            return;
        }
        if let Err(e) = save_settings(&pending) {
            tracing::error!("Failed to save settings: {:#}", e);
        }
        self.state.apply_settings(pending);
    }
}

impl eframe::App for NavsyncApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.state.settings.display.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.handle_shortcuts(ctx);

        if let Some(pending) = self.settings_pending.as_mut() {
            match self.settings_window.show(ctx, pending) {
                SettingsResult::Open => {}
                SettingsResult::Apply => self.close_settings(true),
                SettingsResult::Cancel => self.close_settings(false),
            }
        }

        egui::TopBottomPanel::top("browser_bar").show(ctx, |ui| {
            if let Some(BrowserBarAction::OpenSettings) = BrowserBar::show(ui, &mut self.state) {
                self.open_settings();
            }
        });

        if !self.state.notifications().is_empty() {
            egui::TopBottomPanel::bottom("notifications").show(ctx, |ui| {
                NotificationBar::show(ui, &mut self.state);
            });
        }

        if self.state.settings.display.show_history_panel {
            egui::SidePanel::right("history_panel")
                .default_width(240.0)
                .show(ctx, |ui| {
                    HistoryPanel::show(ui, &mut self.state);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let active = self.state.active_view();

            // Tab bar
            ui.horizontal(|ui| {
                for view in ActiveView::all() {
                    let is_active = *view == active;
                    let text = if is_active {
                        RichText::new(view.label()).strong()
                    } else {
                        RichText::new(view.label())
                    };
                    if ui.selectable_label(is_active, text).clicked() && !is_active {
                        self.state.select_view(*view);
                    }
                }
            });
            ui.separator();
            ui.add_space(spacing::SM);

            match self.state.active_view() {
                ActiveView::Table => TableView::show(ui, &mut self.state),
                ActiveView::About => AboutView::show(ui, &self.state),
            }
        });
    }
}

impl NavsyncApp {
    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Leave keys to the address bar while it is being edited
        if ctx.wants_keyboard_input() {
            return;
        }

        let (back, forward, reload, settings, escape) = ctx.input(|i| {
            (
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft),
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::F5),
                i.modifiers.command && i.key_pressed(egui::Key::Comma),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if back {
            self.state.back();
        }
        if forward {
            self.state.forward();
        }
        if reload {
            self.state.reload();
        }
        if settings {
            self.open_settings();
        }
        if escape && self.settings_pending.is_some() {
            self.close_settings(false);
        }
    }
}
