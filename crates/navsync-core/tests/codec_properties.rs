//! Property tests for the state codec and URL mapping.

use std::collections::BTreeSet;

use navsync_core::codec::{from_payload, to_payload};
use navsync_core::{AnyRow, decode, encode, record_to_url, url_to_record};
use navsync_model::{HistoryRecord, MalformedStateError, RowId, ViewState};
use proptest::prelude::*;

fn view_state() -> impl Strategy<Value = ViewState> {
    prop_oneof![
        Just(ViewState::about()),
        Just(ViewState::table(None)),
        any::<u32>().prop_map(|id| ViewState::table(Some(RowId(id)))),
    ]
}

proptest! {
    #[test]
    fn decode_inverts_encode_for_known_rows(state in view_state()) {
        let decoded = decode(encode(state), &AnyRow).unwrap();
        prop_assert_eq!(decoded, state);
    }

    #[test]
    fn decode_drops_rows_missing_from_catalog(id in any::<u32>()) {
        let catalog: BTreeSet<RowId> = BTreeSet::new();
        let decoded = decode(encode(ViewState::table(Some(RowId(id)))), &catalog).unwrap();
        prop_assert_eq!(decoded, ViewState::table(None));
    }

    #[test]
    fn unknown_tags_never_decode(tag in any::<i32>().prop_filter("valid tag", |t| *t != 1 && *t != 2), row in any::<i64>()) {
        let result = decode(HistoryRecord::new(tag, row), &AnyRow);
        prop_assert_eq!(result, Err(MalformedStateError::UnknownViewTag(tag)));
    }

    #[test]
    fn url_of_encoded_state_parses_back(state in view_state(), base in "(/[A-Za-z]{1,8}){0,3}") {
        let record = encode(state);
        let url = record_to_url(record, &base);
        prop_assert!(url.ends_with('/'));
        prop_assert_eq!(url_to_record(&url, &base).unwrap(), record);
    }

    #[test]
    fn payload_preserves_records(view in any::<i32>(), row in any::<i64>()) {
        let record = HistoryRecord::new(view, row);
        prop_assert_eq!(from_payload(&to_payload(record)).unwrap(), record);
    }

    #[test]
    fn non_digit_row_segments_are_rejected(segment in "[0-9]{0,3}[a-z_.-][0-9a-z]{0,3}") {
        let path = format!("/App/table/{segment}");
        prop_assert!(url_to_record(&path, "/App").is_err());
    }
}
