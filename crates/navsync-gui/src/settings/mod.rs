//! Settings for the table demo.
//!
//! - Navigation (mount path, how the first history entry is seeded)
//! - Display (theme, table size, history panel)
//! - Start URL of the demo tab

mod persistence;
pub mod ui;

pub use persistence::{load_settings, save_settings, settings_path};

use navsync_core::{CoordinatorConfig, canonical_root};
use serde::{Deserialize, Serialize};

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// URL the demo tab opens at. Empty means the canonical root.
    pub start_url: String,
    pub navigation: CoordinatorConfig,
    pub display: DisplaySettings,
}

impl Settings {
    /// The URL a new tab opens at.
    pub fn resolved_start_url(&self) -> String {
        if self.start_url.trim().is_empty() {
            canonical_root(&self.navigation.base_path)
        } else {
            self.start_url.trim().to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// Rows in the demo table.
    pub row_count: u32,
    /// Show the history stack next to the views.
    pub show_history_panel: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            row_count: 25,
            show_history_panel: true,
        }
    }
}
