//! View components

mod about;
mod browser_bar;
mod history;
mod notifications;
mod table;

pub use about::AboutView;
pub use browser_bar::{BrowserBar, BrowserBarAction};
pub use history::HistoryPanel;
pub use notifications::NotificationBar;
pub use table::TableView;
