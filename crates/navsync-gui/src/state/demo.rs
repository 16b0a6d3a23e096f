//! The demo tab.

use crossbeam_channel::Receiver;
use navsync_core::{
    MemoryHistory, NavigationCoordinator, TableSurface, TransportEvent, load_page, reload_page,
};
use navsync_model::{ActiveView, RowId, ViewState};

use super::rows::{DemoRow, demo_rows};
use crate::settings::Settings;

type Coordinator = NavigationCoordinator<MemoryHistory, TableSurface>;

/// One browser tab running the table demo.
///
/// Every mutator leaves pending history events handled, so the UI always
/// renders a settled state.
pub struct DemoState {
    pub settings: Settings,
    coordinator: Coordinator,
    events: Receiver<TransportEvent>,
    rows: Vec<DemoRow>,
    /// Address bar contents. Reset to the current URL after every navigation.
    pub address: String,
    notifications: Vec<String>,
    /// The last page load was redirected.
    redirected: bool,
}

impl DemoState {
    pub fn new(settings: Settings) -> Self {
        let rows = demo_rows(settings.display.row_count);
        let start_url = settings.resolved_start_url();
        tracing::info!("Opening demo tab at {}", start_url);

        let (history, events) = MemoryHistory::new(&start_url);
        let page = load_page(&settings.navigation, history, || surface_for(&rows));
        let mut state = Self {
            settings,
            coordinator: page.coordinator,
            events,
            rows,
            address: String::new(),
            notifications: Vec::new(),
            redirected: page.redirects > 0,
        };
        state.settle();
        state
    }

    pub fn view_state(&self) -> ViewState {
        self.coordinator.state()
    }

    pub fn active_view(&self) -> ActiveView {
        self.coordinator.surface().active_view()
    }

    pub fn selected_row(&self) -> Option<RowId> {
        self.coordinator.surface().selected_row()
    }

    /// Rows still present in the table.
    pub fn rows(&self) -> &[DemoRow] {
        &self.rows
    }

    pub fn history(&self) -> &MemoryHistory {
        self.coordinator.browser()
    }

    pub fn current_url(&self) -> &str {
        &self.history().current().url
    }

    pub fn is_detached(&self) -> bool {
        self.coordinator.is_detached()
    }

    pub fn was_redirected(&self) -> bool {
        self.redirected
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn dismiss_notification(&mut self, index: usize) {
        if index < self.notifications.len() {
            self.notifications.remove(index);
        }
    }

    pub fn select_view(&mut self, view: ActiveView) {
        self.coordinator.user_select_view(view);
        self.settle();
    }

    pub fn select_row(&mut self, row: Option<RowId>) {
        self.coordinator.user_select_row(row);
        self.settle();
    }

    /// Delete a row from the table. History entries that refer to it stay.
    pub fn remove_row(&mut self, id: RowId) {
        self.rows.retain(|row| row.id != id);
        let changes = self.coordinator.surface_mut().remove_row(id);
        self.coordinator.dispatch_user_changes(changes);
        self.settle();
    }

    pub fn back(&mut self) {
        self.coordinator.browser_mut().back();
        self.settle();
    }

    pub fn forward(&mut self) {
        self.coordinator.browser_mut().forward();
        self.settle();
    }

    /// Jump to an entry of the history stack.
    pub fn go_to(&mut self, index: usize) {
        let current = self.history().index();
        let delta = index as isize - current as isize;
        self.coordinator.browser_mut().go(delta);
        self.settle();
    }

    /// Full page load, as when the address bar is submitted.
    pub fn navigate(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        tracing::info!("Navigating to {}", url);
        self.coordinator.browser_mut().load(url);
        self.reload_current();
    }

    /// Reload the current entry.
    pub fn reload(&mut self) {
        tracing::info!("Reloading {}", self.current_url());
        self.reload_current();
    }

    /// Toggle native history support of the simulated browser.
    pub fn set_supported(&mut self, supported: bool) {
        self.coordinator.browser_mut().set_supported(supported);
    }

    /// Replace the settings. Navigation or table changes open a fresh tab.
    pub fn apply_settings(&mut self, settings: Settings) {
        let restart = settings.navigation != self.settings.navigation
            || settings.display.row_count != self.settings.display.row_count
            || settings.start_url != self.settings.start_url;
        if restart {
            let notifications = std::mem::take(&mut self.notifications);
            *self = Self::new(settings);
            self.notifications.splice(0..0, notifications);
        } else {
            self.settings = settings;
        }
    }

    fn reload_current(&mut self) {
        self.collect_notifications();
        let rows = &self.rows;
        let redirects = reload_page(&mut self.coordinator, || surface_for(rows));
        self.redirected = redirects > 0;
        self.settle();
    }

    /// Handle pending history events and bring the address bar up to date.
    fn settle(&mut self) {
        let handled = self.coordinator.drain_events(&self.events);
        if handled > 0 {
            tracing::debug!("Handled {} history events", handled);
        }
        self.collect_notifications();
        self.address = self.current_url().to_string();
    }

    fn collect_notifications(&mut self) {
        let raised = self.coordinator.surface_mut().take_notifications();
        self.notifications.extend(raised);
    }
}

fn surface_for(rows: &[DemoRow]) -> TableSurface {
    TableSurface::new(rows.iter().map(|row| row.id))
}
