//! Tests for navsync-model types.

use navsync_model::{
    ActiveView, HistoryRecord, MalformedStateError, NavError, ParseError, ROW_SENTINEL, RowId,
    SelectionChange, TransportError, ViewState,
};

#[test]
fn default_state_is_unselected_table() {
    let state = ViewState::default();
    assert_eq!(state.active_view(), ActiveView::Table);
    assert_eq!(state.selected_row(), None);
    assert_eq!(state.to_string(), "table");
}

#[test]
fn selection_change_normalizes_into_state() {
    let change = SelectionChange {
        view: ActiveView::Table,
        row: Some(RowId(5)),
    };
    assert_eq!(change.into_view_state(), ViewState::table(Some(RowId(5))));

    let change = SelectionChange {
        view: ActiveView::About,
        row: Some(RowId(5)),
    };
    assert_eq!(change.into_view_state(), ViewState::about());
}

#[test]
fn unselected_table_record_uses_sentinel() {
    let record = HistoryRecord::table_unselected();
    assert_eq!(record.row_id, ROW_SENTINEL);
    assert!(record.has_sentinel_row());
}

#[test]
fn record_rejects_payload_without_view() {
    let result: Result<HistoryRecord, _> = serde_json::from_str(r#"{"id":3}"#);
    assert!(result.is_err());
}

#[test]
fn errors_convert_into_nav_error() {
    let error: NavError = MalformedStateError::UnknownViewTag(3).into();
    assert_eq!(error.to_string(), "unknown view tag 3 in history state");

    let error: NavError = ParseError::InvalidRowId("x".to_string()).into();
    assert!(matches!(error, NavError::Parse(ParseError::InvalidRowId(_))));

    let error: NavError = TransportError::unsupported("SecurityError").into();
    assert_eq!(
        error.to_string(),
        "history transport failed: SecurityError: browser does not support history manipulation"
    );
}

#[test]
fn view_labels_follow_tab_order() {
    let labels: Vec<_> = ActiveView::all().iter().map(ActiveView::label).collect();
    assert_eq!(labels, vec!["Table View", "About this Demo"]);
}
