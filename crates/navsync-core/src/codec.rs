//! State codec: view state to history record and back.
//!
//! Records travel through the browser as JSON payloads of the shape
//! `{"view": <tag>, "id": <row id>}`.

use navsync_model::{
    ABOUT_VIEW_TAG, ActiveView, HistoryRecord, MalformedStateError, ROW_SENTINEL, RowId,
    TABLE_VIEW_TAG, ViewState,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};

/// Rows a stored row id can be resolved against when decoding.
pub trait RowCatalog {
    fn contains_row(&self, id: RowId) -> bool;
}

impl RowCatalog for BTreeSet<RowId> {
    fn contains_row(&self, id: RowId) -> bool {
        self.contains(&id)
    }
}

impl RowCatalog for HashSet<RowId> {
    fn contains_row(&self, id: RowId) -> bool {
        self.contains(&id)
    }
}

impl RowCatalog for [RowId] {
    fn contains_row(&self, id: RowId) -> bool {
        self.contains(&id)
    }
}

impl<T: RowCatalog + ?Sized> RowCatalog for &T {
    fn contains_row(&self, id: RowId) -> bool {
        (**self).contains_row(id)
    }
}

/// Catalog that knows every row id.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyRow;

impl RowCatalog for AnyRow {
    fn contains_row(&self, _id: RowId) -> bool {
        true
    }
}

/// Result of [`decode_detailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedState {
    pub state: ViewState,
    /// Row id that was stored but no longer resolves to a known row.
    ///
    /// `None` when the record carried the sentinel or a known row.
    pub stale_row: Option<i64>,
}

/// Encode a view state. Never fails.
pub fn encode(state: ViewState) -> HistoryRecord {
    let view = match state.active_view() {
        ActiveView::Table => TABLE_VIEW_TAG,
        ActiveView::About => ABOUT_VIEW_TAG,
    };
    let row_id = state
        .selected_row()
        .map_or(ROW_SENTINEL, |row| i64::from(row.0));
    HistoryRecord::new(view, row_id)
}

/// Decode a record into a view state.
///
/// Unknown view tags are an error. The sentinel and row ids the catalog does
/// not know both decode to "no selection".
pub fn decode<C>(record: HistoryRecord, catalog: &C) -> Result<ViewState, MalformedStateError>
where
    C: RowCatalog + ?Sized,
{
    decode_detailed(record, catalog).map(|decoded| decoded.state)
}

/// Like [`decode`], but reports a stored row id that no longer resolves.
pub fn decode_detailed<C>(
    record: HistoryRecord,
    catalog: &C,
) -> Result<DecodedState, MalformedStateError>
where
    C: RowCatalog + ?Sized,
{
    match record.view {
        TABLE_VIEW_TAG => {}
        ABOUT_VIEW_TAG => {
            return Ok(DecodedState {
                state: ViewState::about(),
                stale_row: None,
            });
        }
        tag => return Err(MalformedStateError::UnknownViewTag(tag)),
    }

    if record.has_sentinel_row() {
        return Ok(DecodedState {
            state: ViewState::table(None),
            stale_row: None,
        });
    }

    let row = u32::try_from(record.row_id)
        .ok()
        .map(RowId)
        .filter(|id| catalog.contains_row(*id));
    Ok(DecodedState {
        state: ViewState::table(row),
        stale_row: row.is_none().then_some(record.row_id),
    })
}

/// Payload stored with a history entry.
pub fn to_payload(record: HistoryRecord) -> Value {
    serde_json::json!({ "view": record.view, "id": record.row_id })
}

/// Read a record back from a history entry payload.
pub fn from_payload(payload: &Value) -> Result<HistoryRecord, MalformedStateError> {
    HistoryRecord::deserialize(payload)
        .map_err(|e| MalformedStateError::InvalidPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: &[u32]) -> BTreeSet<RowId> {
        ids.iter().copied().map(RowId).collect()
    }

    #[test]
    fn encode_unselected_table_uses_sentinel() {
        let record = encode(ViewState::table(None));
        assert_eq!(record, HistoryRecord::new(TABLE_VIEW_TAG, ROW_SENTINEL));
    }

    #[test]
    fn encode_about() {
        assert_eq!(encode(ViewState::about()), HistoryRecord::new(2, -1));
    }

    #[test]
    fn decode_sentinel_is_unselected_table() {
        let state = decode(HistoryRecord::new(1, -1), &rows(&[1, 2])).unwrap();
        assert_eq!(state, ViewState::table(None));
    }

    #[test]
    fn decode_unknown_tag_fails() {
        let err = decode(HistoryRecord::new(3, 0), &AnyRow).unwrap_err();
        assert_eq!(err, MalformedStateError::UnknownViewTag(3));
    }

    #[test]
    fn decode_unknown_row_is_stale_not_an_error() {
        let decoded = decode_detailed(HistoryRecord::new(1, 9), &rows(&[1, 2])).unwrap();
        assert_eq!(decoded.state, ViewState::table(None));
        assert_eq!(decoded.stale_row, Some(9));
    }

    #[test]
    fn decode_negative_row_is_stale() {
        let decoded = decode_detailed(HistoryRecord::new(1, -7), &AnyRow).unwrap();
        assert_eq!(decoded.state, ViewState::table(None));
        assert_eq!(decoded.stale_row, Some(-7));
    }

    #[test]
    fn decode_about_ignores_row() {
        let decoded = decode_detailed(HistoryRecord::new(2, 5), &rows(&[5])).unwrap();
        assert_eq!(decoded.state, ViewState::about());
        assert_eq!(decoded.stale_row, None);
    }

    #[test]
    fn payload_round_trip() {
        let record = HistoryRecord::new(1, 42);
        let payload = to_payload(record);
        assert_eq!(payload, serde_json::json!({"view": 1, "id": 42}));
        assert_eq!(from_payload(&payload).unwrap(), record);
    }

    #[test]
    fn foreign_payload_is_malformed() {
        let payload = serde_json::json!({"page": "settings"});
        assert!(matches!(
            from_payload(&payload),
            Err(MalformedStateError::InvalidPayload(_))
        ));
        assert!(from_payload(&Value::String("table".to_string())).is_err());
    }
}
