//! Browser-facing collaborators.

use navsync_model::{Location, TransportError};
use serde_json::Value;

/// Native history manipulation (`pushState` / `replaceState`).
///
/// Calls are fire-and-forget. Failures and back/forward navigation arrive
/// later as [`TransportEvent`]s.
pub trait HistoryTransport {
    /// Add a new entry on top of the current one.
    fn push_state(&mut self, payload: &Value, url: &str);

    /// Overwrite the current entry. `None` keeps the current URL.
    fn replace_state(&mut self, payload: &Value, url: Option<&str>);
}

/// Access to the page location.
pub trait PageNavigator {
    fn location(&self) -> Location;

    /// Hard navigation; the page is loaded again from `url`.
    fn redirect(&mut self, url: &str);
}

/// Everything the coordinator needs from the browser.
pub trait Browser: HistoryTransport + PageNavigator {}

impl<T: HistoryTransport + PageNavigator> Browser for T {}

/// Notification raised by the history transport.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// The user navigated back or forward. `None` for entries created before
    /// the transport was attached.
    Navigated(Option<Value>),
    Error(TransportError),
}
