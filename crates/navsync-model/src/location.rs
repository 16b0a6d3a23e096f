//! Page location as seen by the application.

use std::fmt;

/// Path and query of the current page.
///
/// The query is opaque and passed through verbatim; an empty query (`?` with
/// nothing after it) is kept as `Some("")`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>, query: Option<String>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Split a `path?query#fragment` string. The fragment is dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        match url.split_once('?') {
            Some((path, query)) => Self::new(path, Some(query.to_string())),
            None => Self::new(url, None),
        }
    }

    /// Append this location's query to another path.
    pub fn with_query(&self, path: &str) -> String {
        match &self.query {
            Some(query) => format!("{path}?{query}"),
            None => path.to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.with_query(&self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_query_and_drops_fragment() {
        let location = Location::parse("/App/table/3/?debug&lang=fi#top");
        assert_eq!(location.path, "/App/table/3/");
        assert_eq!(location.query.as_deref(), Some("debug&lang=fi"));
        assert_eq!(location.to_string(), "/App/table/3/?debug&lang=fi");
    }

    #[test]
    fn parse_without_query() {
        let location = Location::parse("/App/about/");
        assert_eq!(location.query, None);
        assert_eq!(location.with_query("/App/table/"), "/App/table/");
    }

    #[test]
    fn empty_query_is_preserved() {
        let location = Location::parse("/App/?");
        assert_eq!(location.query.as_deref(), Some(""));
        assert_eq!(location.with_query("/App/about/"), "/App/about/?");
    }
}
