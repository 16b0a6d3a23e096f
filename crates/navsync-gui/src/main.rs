//! Table demo with browser-style history.
//!
//! A tabbed table whose selections are recorded in an in-memory browser
//! history, with an address bar and back/forward navigation.

use eframe::egui;
use navsync_gui::app::NavsyncApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Table History Demo")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Table History Demo",
        options,
        Box::new(|cc| Ok(Box::new(NavsyncApp::new(cc)))),
    )
}
