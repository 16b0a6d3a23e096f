//! Navigable application state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u32);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for RowId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Top-level views of the application.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Table,
    About,
}

impl ActiveView {
    /// Get display name for the tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::Table => "Table View",
            Self::About => "About this Demo",
        }
    }

    /// Get all views in tab order
    pub fn all() -> &'static [ActiveView] {
        &[Self::Table, Self::About]
    }
}

/// The state reproduced by history navigation and deep links.
///
/// A row selection only exists on the table view; the constructors drop it
/// for every other view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewState {
    active_view: ActiveView,
    selected_row: Option<RowId>,
}

impl ViewState {
    pub fn new(active_view: ActiveView, selected_row: Option<RowId>) -> Self {
        match active_view {
            ActiveView::Table => Self::table(selected_row),
            ActiveView::About => Self::about(),
        }
    }

    pub fn table(selected_row: Option<RowId>) -> Self {
        Self {
            active_view: ActiveView::Table,
            selected_row,
        }
    }

    pub fn about() -> Self {
        Self {
            active_view: ActiveView::About,
            selected_row: None,
        }
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn selected_row(&self) -> Option<RowId> {
        self.selected_row
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.active_view, self.selected_row) {
            (ActiveView::Table, Some(row)) => write!(f, "table (row {row})"),
            (ActiveView::Table, None) => f.write_str("table"),
            (ActiveView::About, _) => f.write_str("about"),
        }
    }
}

/// A "selection changed" notification raised by the UI.
///
/// Carries the view that is now active and the table's current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub view: ActiveView,
    pub row: Option<RowId>,
}

impl SelectionChange {
    pub fn into_view_state(self) -> ViewState {
        ViewState::new(self.view, self.row)
    }
}
