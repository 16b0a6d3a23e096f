//! Table demo GUI library.
//!
//! Exposes state and settings for testing.

pub mod app;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
