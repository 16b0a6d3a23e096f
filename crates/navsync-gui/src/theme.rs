//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

/// Colors not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// History entry the tab currently shows
    pub const CURRENT_ENTRY: Color32 = Color32::from_rgb(34, 197, 94);
    /// Background of the notification bar
    pub const NOTIFICATION_BG: Color32 = Color32::from_rgb(127, 29, 29);
}
