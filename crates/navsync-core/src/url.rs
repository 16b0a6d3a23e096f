//! Mapping between history records and navigation URLs.
//!
//! URL shape: `<base>/table/`, `<base>/table/<row>/` or `<base>/about/`,
//! optionally followed by the page's query string.

use navsync_model::{
    ABOUT_VIEW_TAG, HistoryRecord, Location, ParseError, ROW_SENTINEL, TABLE_VIEW_TAG,
};

/// Base path without trailing slashes.
pub fn normalize_base(base_path: &str) -> &str {
    base_path.trim_end_matches('/')
}

/// Canonical root URL of the application.
pub fn canonical_root(base_path: &str) -> String {
    format!("{}/", normalize_base(base_path))
}

/// Path for a record. The trailing slash is canonical.
///
/// Records that do not come from [`encode`](crate::codec::encode) and carry
/// a tag other than the about view map to the table view.
pub fn record_to_url(record: HistoryRecord, base_path: &str) -> String {
    let base = normalize_base(base_path);
    if record.view == ABOUT_VIEW_TAG {
        format!("{base}/about/")
    } else if record.has_sentinel_row() {
        format!("{base}/table/")
    } else {
        format!("{base}/table/{}/", record.row_id)
    }
}

/// Path for a record with the current location's query appended verbatim.
pub fn navigation_url(record: HistoryRecord, base_path: &str, location: &Location) -> String {
    location.with_query(&record_to_url(record, base_path))
}

/// Parse an initial location path into a record.
///
/// Only used on first load; history notifications carry records directly.
pub fn url_to_record(path: &str, base_path: &str) -> Result<HistoryRecord, ParseError> {
    let base = normalize_base(base_path);
    let rest = path
        .strip_prefix(base)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .ok_or_else(|| ParseError::OutsideBase {
            path: path.to_string(),
            base: base.to_string(),
        })?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);

    let mut segments: Vec<&str> = rest.split('/').collect();
    while segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    match segments.as_slice() {
        [""] | ["table"] => Ok(HistoryRecord::table_unselected()),
        ["about"] => Ok(HistoryRecord::new(ABOUT_VIEW_TAG, ROW_SENTINEL)),
        ["table", row] => parse_row(row).map(|id| HistoryRecord::new(TABLE_VIEW_TAG, id)),
        _ => Err(ParseError::UnknownShape(rest.to_string())),
    }
}

fn parse_row(segment: &str) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidRowId(segment.to_string());
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    segment
        .parse::<u32>()
        .map(i64::from)
        .map_err(|_| invalid())
}
