//! Navigation coordinator
//!
//! Owns the view state and the replay guard. UI selection changes flow out to
//! the history transport; history notifications flow back into the UI.

use crate::codec::{self, DecodedState};
use crate::guard::ReplayGuard;
use crate::initializer::UrlInitializer;
use crate::surface::ViewSurface;
use crate::transport::{Browser, TransportEvent};
use crate::url;
use crossbeam_channel::Receiver;
use navsync_model::{
    ActiveView, MalformedStateError, RowId, SelectionChange, TransportError, ViewState,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default mount path of the table demo.
pub const DEFAULT_BASE_PATH: &str = "/History/TableDemo";

/// How the first history entry is seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitStrategy {
    /// Seed the default view under the current page URL.
    SeedFromDefault,
    /// Parse the initial URL and redirect to the root when it is malformed.
    #[default]
    SeedFromUrl,
}

impl InitStrategy {
    pub const fn all() -> &'static [InitStrategy] {
        &[Self::SeedFromDefault, Self::SeedFromUrl]
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::SeedFromDefault => "Default view",
            Self::SeedFromUrl => "From URL",
        }
    }
}

/// Coordinator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Path the application is mounted at, e.g. `/History/TableDemo`.
    pub base_path: String,
    pub strategy: InitStrategy,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            strategy: InitStrategy::default(),
        }
    }
}

/// Result of [`NavigationCoordinator::start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// The first history entry now holds this state.
    Seeded(ViewState),
    /// The initial URL was malformed; the page is being loaded from this URL.
    Redirected(String),
}

pub struct NavigationCoordinator<B, S> {
    config: CoordinatorConfig,
    browser: B,
    surface: S,
    state: ViewState,
    guard: ReplayGuard,
    detached: bool,
}

impl<B: Browser, S: ViewSurface> NavigationCoordinator<B, S> {
    pub fn new(config: CoordinatorConfig, browser: B, surface: S) -> Self {
        Self {
            config,
            browser,
            surface,
            state: ViewState::default(),
            guard: ReplayGuard::new(),
            detached: false,
        }
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// The view state as last pushed or replayed.
    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut B {
        &mut self.browser
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn guard(&self) -> &ReplayGuard {
        &self.guard
    }

    /// True once the transport reported that history manipulation is unsupported.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Swap in a freshly built surface, as after a page reload.
    ///
    /// Per-page state is reset and the transport is kept. Returns the old surface.
    pub fn remount(&mut self, surface: S) -> S {
        self.state = ViewState::default();
        self.guard = ReplayGuard::new();
        self.detached = false;
        std::mem::replace(&mut self.surface, surface)
    }

    /// Seed the first history entry according to the configured strategy.
    pub fn start(&mut self) -> StartOutcome {
        match self.config.strategy {
            InitStrategy::SeedFromDefault => {
                self.initialize();
                StartOutcome::Seeded(self.state)
            }
            InitStrategy::SeedFromUrl => UrlInitializer::run(self),
        }
    }

    /// Replace the current entry with the current state and page URL, so that
    /// navigating back to the origin restores a known state.
    pub fn initialize(&mut self) {
        let url = self.browser.location().to_string();
        self.replace_current(Some(&url));
    }

    /// A selection change raised by the UI.
    ///
    /// Ignored while a replayed state is being applied.
    pub fn on_user_selection_changed(&mut self, change: SelectionChange) {
        if self.guard.is_held() {
            tracing::trace!("Suppressed selection echo during replay: {:?}", change);
            return;
        }
        self.state = change.into_view_state();
        self.push_current();
    }

    /// A back/forward navigation delivered by the transport.
    ///
    /// A decode failure is shown to the user and leaves the view unchanged.
    pub fn on_history_navigated(
        &mut self,
        payload: Option<&Value>,
    ) -> Result<(), MalformedStateError> {
        let Some(payload) = payload else {
            tracing::debug!("History entry predates the transport, nothing to restore");
            return Ok(());
        };

        let _scope = self.guard.enter();
        let decoded = codec::from_payload(payload)
            .and_then(|record| codec::decode_detailed(record, &self.surface));
        let DecodedState { state, stale_row } = match decoded {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!("Discarding history state {}: {}", payload, err);
                self.surface
                    .notify_error(&format!("Could not restore history state: {err}"));
                return Err(err);
            }
        };
        if let Some(row) = stale_row {
            tracing::debug!("History state refers to row {} which no longer exists", row);
        }

        tracing::debug!("Replaying history state: {}", state);
        self.apply_view_state(state);
        Ok(())
    }

    /// The transport cannot manipulate history.
    ///
    /// Shows a notification and detaches: later navigation no longer touches
    /// the transport.
    pub fn on_transport_error(&mut self, error: &TransportError) {
        tracing::error!("History transport error: {}", error);
        self.surface.notify_error(&format!(
            "Your browser doesn't seem to support pushState properly: {}",
            error.name
        ));
        self.detached = true;
    }

    /// Dispatch one transport event.
    ///
    /// Transport errors are fully handled here and never returned.
    pub fn handle_event(&mut self, event: TransportEvent) -> Result<(), MalformedStateError> {
        match event {
            TransportEvent::Navigated(payload) => self.on_history_navigated(payload.as_ref()),
            TransportEvent::Error(error) => {
                self.on_transport_error(&error);
                Ok(())
            }
        }
    }

    /// Handle every pending transport event. Returns how many were handled.
    pub fn drain_events(&mut self, events: &Receiver<TransportEvent>) -> usize {
        let mut handled = 0;
        while let Ok(event) = events.try_recv() {
            // Failures were already logged and shown by the handlers.
            let _ = self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Switch views as a user action.
    pub fn user_select_view(&mut self, view: ActiveView) {
        let changes = self.surface.select_view(view);
        self.dispatch_user_changes(changes);
    }

    /// Select a row as a user action.
    pub fn user_select_row(&mut self, row: Option<RowId>) {
        let changes = self.surface.select_row(row);
        self.dispatch_user_changes(changes);
    }

    /// Forward notifications raised by a user-driven widget change.
    pub fn dispatch_user_changes(&mut self, changes: impl IntoIterator<Item = SelectionChange>) {
        for change in changes {
            self.on_user_selection_changed(change);
        }
    }

    /// Apply a state to the UI with the guard held.
    pub(crate) fn apply_guarded(&mut self, state: ViewState) {
        let _scope = self.guard.enter();
        self.apply_view_state(state);
    }

    pub(crate) fn redirect(&mut self, url: &str) {
        self.browser.redirect(url);
    }

    pub(crate) fn replace_current(&mut self, url: Option<&str>) {
        if self.detached {
            return;
        }
        let record = codec::encode(self.state);
        tracing::debug!("replaceState {:?} {}", record, url.unwrap_or("(current url)"));
        self.browser.replace_state(&codec::to_payload(record), url);
    }

    fn apply_view_state(&mut self, state: ViewState) {
        debug_assert!(self.guard.is_held());
        let mut echoes = self.surface.select_view(state.active_view());
        echoes.extend(self.surface.select_row(state.selected_row()));
        for echo in echoes {
            self.on_user_selection_changed(echo);
        }
        self.state = state;
    }

    fn push_current(&mut self) {
        if self.detached {
            tracing::debug!("History transport detached, not pushing {}", self.state);
            return;
        }
        let record = codec::encode(self.state);
        let url = url::navigation_url(record, &self.config.base_path, &self.browser.location());
        tracing::debug!("pushState {:?} {}", record, url);
        self.browser.push_state(&codec::to_payload(record), &url);
    }
}
