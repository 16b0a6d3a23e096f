//! Versioned history representation of a [`ViewState`](crate::ViewState).

use serde::{Deserialize, Serialize};

/// View tag of the table view.
pub const TABLE_VIEW_TAG: i32 = 1;
/// View tag of the about view.
pub const ABOUT_VIEW_TAG: i32 = 2;
/// Row id stored when no row is selected.
pub const ROW_SENTINEL: i64 = -1;

/// The record stored with every history entry.
///
/// Serialized as `{"view": <tag>, "id": <row id>}`. Records are never edited
/// after creation; replacing an entry stores a fresh record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub view: i32,
    #[serde(rename = "id")]
    pub row_id: i64,
}

impl HistoryRecord {
    pub const fn new(view: i32, row_id: i64) -> Self {
        Self { view, row_id }
    }

    /// Table view with no selected row.
    pub const fn table_unselected() -> Self {
        Self::new(TABLE_VIEW_TAG, ROW_SENTINEL)
    }

    pub const fn has_sentinel_row(&self) -> bool {
        self.row_id == ROW_SENTINEL
    }
}
