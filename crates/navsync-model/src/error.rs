use thiserror::Error;

/// A history payload that cannot be turned back into a view.
///
/// Indicates corrupted or foreign history state; the current view is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedStateError {
    #[error("unknown view tag {0} in history state")]
    UnknownViewTag(i32),
    #[error("history payload is not a view record: {0}")]
    InvalidPayload(String),
}

/// An initial location path that does not match any navigation shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("path {path:?} is outside base path {base:?}")]
    OutsideBase { path: String, base: String },
    #[error("unrecognized navigation path {0:?}")]
    UnknownShape(String),
    #[error("row segment {0:?} is not a row id")]
    InvalidRowId(String),
}

/// Failure reported by the history transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {description}")]
pub struct TransportError {
    /// Short error name as reported by the browser.
    pub name: String,
    pub description: String,
}

impl TransportError {
    /// The browser has no native history manipulation.
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: "browser does not support history manipulation".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum NavError {
    #[error(transparent)]
    MalformedState(#[from] MalformedStateError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("history transport failed: {0}")]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, NavError>;
