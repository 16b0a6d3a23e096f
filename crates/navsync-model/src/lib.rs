pub mod error;
pub mod location;
pub mod record;
pub mod view;

pub use error::{MalformedStateError, NavError, ParseError, Result, TransportError};
pub use location::Location;
pub use record::{ABOUT_VIEW_TAG, HistoryRecord, ROW_SENTINEL, TABLE_VIEW_TAG};
pub use view::{ActiveView, RowId, SelectionChange, ViewState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_state_never_carries_a_row() {
        let state = ViewState::new(ActiveView::About, Some(RowId(4)));
        assert_eq!(state.active_view(), ActiveView::About);
        assert_eq!(state.selected_row(), None);
    }

    #[test]
    fn record_serializes_with_short_keys() {
        let record = HistoryRecord::new(TABLE_VIEW_TAG, 12);
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(json, r#"{"view":1,"id":12}"#);
        let round: HistoryRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
