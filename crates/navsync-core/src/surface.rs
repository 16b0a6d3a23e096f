//! UI collaborator contract and a headless tabbed table model.

use crate::codec::RowCatalog;
use navsync_model::{ActiveView, RowId, SelectionChange};
use std::collections::BTreeSet;

/// The widgets the coordinator drives during replay.
///
/// Mutators return the "selection changed" notifications the widgets raised
/// synchronously while changing. A mutator that changes nothing raises none.
pub trait ViewSurface: RowCatalog {
    fn select_view(&mut self, view: ActiveView) -> Vec<SelectionChange>;

    /// Select a row, or clear the selection. Unknown rows clear it.
    fn select_row(&mut self, row: Option<RowId>) -> Vec<SelectionChange>;

    /// Show a user-visible error notification.
    fn notify_error(&mut self, message: &str);
}

/// Tab sheet with a table view and an about view.
#[derive(Debug, Clone, Default)]
pub struct TableSurface {
    active_view: ActiveView,
    rows: BTreeSet<RowId>,
    selected: Option<RowId>,
    notifications: Vec<String>,
}

impl TableSurface {
    pub fn new(rows: impl IntoIterator<Item = RowId>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn selected_row(&self) -> Option<RowId> {
        self.selected
    }

    pub fn rows(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows.iter().copied()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn insert_row(&mut self, id: RowId) {
        self.rows.insert(id);
    }

    /// Remove a row. Removing the selected row clears the selection.
    pub fn remove_row(&mut self, id: RowId) -> Vec<SelectionChange> {
        if !self.rows.remove(&id) || self.selected != Some(id) {
            return Vec::new();
        }
        self.selected = None;
        vec![self.selection_change()]
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }

    /// Notification reporting the view on screen and the table selection.
    fn selection_change(&self) -> SelectionChange {
        SelectionChange {
            view: self.active_view,
            row: self.selected,
        }
    }
}

impl RowCatalog for TableSurface {
    fn contains_row(&self, id: RowId) -> bool {
        self.rows.contains(&id)
    }
}

impl ViewSurface for TableSurface {
    fn select_view(&mut self, view: ActiveView) -> Vec<SelectionChange> {
        if self.active_view == view {
            return Vec::new();
        }
        self.active_view = view;
        vec![self.selection_change()]
    }

    fn select_row(&mut self, row: Option<RowId>) -> Vec<SelectionChange> {
        let row = row.filter(|id| self.rows.contains(id));
        if self.selected == row {
            return Vec::new();
        }
        self.selected = row;
        vec![self.selection_change()]
    }

    fn notify_error(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
