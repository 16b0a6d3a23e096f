//! Session scripts for `navsync replay`.
//!
//! One step per line, `#` starts a comment:
//!
//! ```text
//! load /History/TableDemo/table/3/   # full page load
//! select-row 5                        # or `select-row none`
//! select-view about
//! remove-row 5
//! back
//! forward
//! go -2
//! unsupported                         # browser stops accepting pushState
//! ```

use std::fmt;

use navsync_model::{ActiveView, RowId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Load(String),
    SelectView(ActiveView),
    SelectRow(Option<RowId>),
    RemoveRow(RowId),
    Back,
    Forward,
    Go(isize),
    Unsupported,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(url) => write!(f, "load {url}"),
            Self::SelectView(ActiveView::Table) => f.write_str("select-view table"),
            Self::SelectView(ActiveView::About) => f.write_str("select-view about"),
            Self::SelectRow(Some(row)) => write!(f, "select-row {row}"),
            Self::SelectRow(None) => f.write_str("select-row none"),
            Self::RemoveRow(row) => write!(f, "remove-row {row}"),
            Self::Back => f.write_str("back"),
            Self::Forward => f.write_str("forward"),
            Self::Go(delta) => write!(f, "go {delta}"),
            Self::Unsupported => f.write_str("unsupported"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` expects {expected}")]
    BadArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },
}

/// Parse a whole script. Blank lines and comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let content = raw.split_once('#').map_or(raw, |(before, _)| before);
        let mut words = content.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();
        steps.push(parse_step(index + 1, command, &args)?);
    }
    Ok(steps)
}

fn parse_step(line: usize, command: &str, args: &[&str]) -> Result<Step, ScriptError> {
    let bad = |expected: &'static str| ScriptError::BadArgument {
        line,
        command: command.to_string(),
        expected,
    };
    let step = match (command, args) {
        ("load", [url]) => Step::Load((*url).to_string()),
        ("load", _) => return Err(bad("a URL")),
        ("select-view", ["table"]) => Step::SelectView(ActiveView::Table),
        ("select-view", ["about"]) => Step::SelectView(ActiveView::About),
        ("select-view", _) => return Err(bad("`table` or `about`")),
        ("select-row", ["none"]) => Step::SelectRow(None),
        ("select-row", [id]) => {
            let row = parse_row(id).ok_or_else(|| bad("a row id or `none`"))?;
            Step::SelectRow(Some(row))
        }
        ("select-row", _) => return Err(bad("a row id or `none`")),
        ("remove-row", [id]) => Step::RemoveRow(parse_row(id).ok_or_else(|| bad("a row id"))?),
        ("remove-row", _) => return Err(bad("a row id")),
        ("back", []) => Step::Back,
        ("forward", []) => Step::Forward,
        ("go", [delta]) => Step::Go(delta.parse().map_err(|_| bad("a signed offset"))?),
        ("go", _) => return Err(bad("a signed offset")),
        ("unsupported", []) => Step::Unsupported,
        ("back" | "forward" | "unsupported", _) => return Err(bad("no arguments")),
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            });
        }
    };
    Ok(step)
}

fn parse_row(text: &str) -> Option<RowId> {
    text.parse().ok().map(RowId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps_and_skips_comments() {
        let steps = parse_script(
            "# demo\nload /App/table/3/\n\nselect-row 5  # pick\nselect-row none\ngo -2\nunsupported\n",
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Load("/App/table/3/".to_string()),
                Step::SelectRow(Some(RowId(5))),
                Step::SelectRow(None),
                Step::Go(-2),
                Step::Unsupported,
            ]
        );
    }

    #[test]
    fn display_matches_script_syntax() {
        let text = "select-view about\nremove-row 4\nback\nforward";
        let steps = parse_script(text).unwrap();
        let rendered: Vec<String> = steps.iter().map(ToString::to_string).collect();
        assert_eq!(rendered.join("\n"), text);
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_script("back\nselect-view settings").unwrap_err();
        assert_eq!(
            err,
            ScriptError::BadArgument {
                line: 2,
                command: "select-view".to_string(),
                expected: "`table` or `about`",
            }
        );
        assert_eq!(
            parse_script("\n\nreload").unwrap_err().to_string(),
            "line 3: unknown command `reload`"
        );
    }

    #[test]
    fn rejects_negative_rows() {
        assert!(parse_script("select-row -1").is_err());
        assert!(parse_script("back 2").is_err());
    }
}
