//! In-process browser history.
//!
//! Behaves like a browser tab's session history: push truncates forward
//! entries, replace overwrites the current entry, back/forward move through
//! the stack and re-deliver the stored payload over the event channel.

use crate::transport::{HistoryTransport, PageNavigator, TransportEvent};
use crossbeam_channel::{Receiver, Sender};
use navsync_model::{Location, TransportError};
use serde_json::Value;

/// One entry of the session history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Stored state. `None` for entries created by a page load.
    pub payload: Option<Value>,
    pub url: String,
}

impl HistoryEntry {
    fn loaded(url: &str) -> Self {
        Self {
            payload: None,
            url: url.to_string(),
        }
    }
}

/// Counters for transport calls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransportStats {
    pub pushes: usize,
    pub replaces: usize,
    pub redirects: usize,
    pub errors: usize,
}

pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
    supported: bool,
    stats: TransportStats,
    events: Sender<TransportEvent>,
}

impl MemoryHistory {
    /// Open a tab at `initial_url`.
    ///
    /// Returns the receiving end of the notification channel.
    pub fn new(initial_url: &str) -> (Self, Receiver<TransportEvent>) {
        let (events, receiver) = crossbeam_channel::unbounded();
        let history = Self {
            entries: vec![HistoryEntry::loaded(initial_url)],
            index: 0,
            supported: true,
            stats: TransportStats::default(),
            events,
        };
        (history, receiver)
    }

    /// Simulate a browser without native history manipulation.
    pub fn set_supported(&mut self, supported: bool) {
        self.supported = supported;
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn stats(&self) -> TransportStats {
        self.stats
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Move `delta` entries through the stack, like `history.go(delta)`.
    pub fn go(&mut self, delta: isize) -> bool {
        let Some(target) = self.index.checked_add_signed(delta) else {
            return false;
        };
        if delta == 0 || target >= self.entries.len() {
            return false;
        }
        self.index = target;
        let payload = self.entries[target].payload.clone();
        tracing::debug!("History traversal to entry {} ({})", target, self.entries[target].url);
        self.emit(TransportEvent::Navigated(payload));
        true
    }

    /// Full page navigation to `url`, as when the address bar is submitted.
    pub fn load(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry::loaded(url));
        self.index = self.entries.len() - 1;
        tracing::debug!("Loaded {}", url);
    }

    fn emit(&self, event: TransportEvent) {
        if self.events.send(event).is_err() {
            tracing::trace!("History event dropped, no listener attached");
        }
    }

    fn reject(&mut self, name: &str) -> bool {
        if self.supported {
            return false;
        }
        self.stats.errors += 1;
        self.emit(TransportEvent::Error(TransportError::unsupported(name)));
        true
    }
}

impl HistoryTransport for MemoryHistory {
    fn push_state(&mut self, payload: &Value, url: &str) {
        if self.reject("pushState") {
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            payload: Some(payload.clone()),
            url: url.to_string(),
        });
        self.index = self.entries.len() - 1;
        self.stats.pushes += 1;
    }

    fn replace_state(&mut self, payload: &Value, url: Option<&str>) {
        if self.reject("replaceState") {
            return;
        }
        let entry = &mut self.entries[self.index];
        entry.payload = Some(payload.clone());
        if let Some(url) = url {
            entry.url = url.to_string();
        }
        self.stats.replaces += 1;
    }
}

impl PageNavigator for MemoryHistory {
    fn location(&self) -> Location {
        Location::parse(&self.current().url)
    }

    fn redirect(&mut self, url: &str) {
        self.stats.redirects += 1;
        self.load(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn push_truncates_forward_entries() {
        let (mut history, _events) = MemoryHistory::new("/App/");
        history.push_state(&json!({"view": 1, "id": 1}), "/App/table/1/");
        history.push_state(&json!({"view": 1, "id": 2}), "/App/table/2/");
        assert!(history.back());
        history.push_state(&json!({"view": 2, "id": -1}), "/App/about/");

        let urls: Vec<_> = history.entries().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["/App/", "/App/table/1/", "/App/about/"]);
        assert_eq!(history.index(), 2);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn replace_twice_modifies_one_entry() {
        let (mut history, _events) = MemoryHistory::new("/App/");
        let payload = json!({"view": 1, "id": -1});
        history.replace_state(&payload, Some("/App/table/"));
        history.replace_state(&payload, Some("/App/table/"));

        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.current().url, "/App/table/");
        assert_eq!(history.current().payload.as_ref(), Some(&payload));
        assert_eq!(history.stats().replaces, 2);
    }

    #[test]
    fn replace_without_url_keeps_location() {
        let (mut history, _events) = MemoryHistory::new("/App/table/3?x=1");
        history.replace_state(&json!({"view": 1, "id": 3}), None);
        assert_eq!(history.location(), Location::parse("/App/table/3?x=1"));
    }

    #[test]
    fn traversal_redelivers_payloads() {
        let (mut history, events) = MemoryHistory::new("/App/");
        let payload = json!({"view": 2, "id": -1});
        history.push_state(&payload, "/App/about/");

        assert!(history.back());
        assert_eq!(events.try_recv().unwrap(), TransportEvent::Navigated(None));
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(
            events.try_recv().unwrap(),
            TransportEvent::Navigated(Some(payload))
        );
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn unsupported_browser_reports_errors() {
        let (mut history, events) = MemoryHistory::new("/App/");
        history.set_supported(false);
        history.push_state(&json!({"view": 2, "id": -1}), "/App/about/");

        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.stats().errors, 1);
        assert!(matches!(
            events.try_recv(),
            Ok(TransportEvent::Error(TransportError { ref name, .. })) if name == "pushState"
        ));
    }

    #[test]
    fn redirect_loads_a_fresh_entry() {
        let (mut history, _events) = MemoryHistory::new("/App/bogus");
        history.redirect("/App/");
        assert_eq!(history.location().path, "/App/");
        assert_eq!(history.current().payload, None);
        assert_eq!(history.stats().redirects, 1);
    }
}
