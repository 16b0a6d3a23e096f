//! Scripted sessions against the in-memory browser history.

use crossbeam_channel::Receiver;
use navsync_core::codec::from_payload;
use navsync_core::{
    CoordinatorConfig, HistoryEntry, MemoryHistory, NavigationCoordinator, TableSurface,
    TransportEvent, TransportStats, canonical_root, load_page, reload_page,
};
use navsync_model::{RowId, ViewState};
use serde_json::Value;

use crate::script::Step;

type Coordinator = NavigationCoordinator<MemoryHistory, TableSurface>;

#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub config: CoordinatorConfig,
    /// The table holds rows `1..=row_count`.
    pub row_count: u32,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            config: CoordinatorConfig::default(),
            row_count: 20,
        }
    }
}

/// What a single step left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: String,
    pub state: ViewState,
    pub url: String,
    pub redirected: bool,
}

#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub steps: Vec<StepRecord>,
    pub entries: Vec<HistoryEntry>,
    pub index: usize,
    pub state: ViewState,
    pub stats: TransportStats,
    pub detached: bool,
    pub notifications: Vec<String>,
}

impl ReplayReport {
    /// One line per step: `N. step => state at url`.
    pub fn render_steps(&self) -> String {
        self.steps
            .iter()
            .enumerate()
            .map(|(number, record)| {
                let mut line = format!(
                    "{number}. {} => {} at {}",
                    record.step, record.state, record.url
                );
                if record.redirected {
                    line.push_str(" [redirected]");
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One line per history entry, the current one marked with `*`.
    pub fn render_stack(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let marker = if position == self.index { '*' } else { '-' };
                format!(
                    "{marker} {position}: {} {}",
                    entry.url,
                    describe_payload(entry.payload.as_ref())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Short form of a stored payload: `view=1 id=5`, or `-` for a page-load entry.
pub fn describe_payload(payload: Option<&Value>) -> String {
    match payload {
        None => "-".to_string(),
        Some(value) => match from_payload(value) {
            Ok(record) => format!("view={} id={}", record.view, record.row_id),
            Err(_) => value.to_string(),
        },
    }
}

/// Run a script from a fresh tab.
///
/// A leading `load` step opens the tab at that URL; otherwise the tab opens
/// at the canonical root of the configured base path.
pub fn run_script(steps: &[Step], options: &ReplayOptions) -> ReplayReport {
    let (opening, rest) = match steps.split_first() {
        Some((Step::Load(url), rest)) => (url.clone(), rest),
        _ => (canonical_root(&options.config.base_path), steps),
    };
    let mut session = Session::open(options, &opening);
    for step in rest {
        session.apply(step);
    }
    session.finish()
}

struct Session<'a> {
    options: &'a ReplayOptions,
    coordinator: Coordinator,
    events: Receiver<TransportEvent>,
    steps: Vec<StepRecord>,
    notifications: Vec<String>,
}

impl<'a> Session<'a> {
    fn open(options: &'a ReplayOptions, url: &str) -> Self {
        let (history, events) = MemoryHistory::new(url);
        let page = load_page(&options.config, history, || table_surface(options.row_count));
        let redirected = page.redirects > 0;
        let mut session = Self {
            options,
            coordinator: page.coordinator,
            events,
            steps: Vec::new(),
            notifications: Vec::new(),
        };
        session.coordinator.drain_events(&session.events);
        session.record(format!("open {url}"), redirected);
        session
    }

    fn apply(&mut self, step: &Step) {
        tracing::info!("Replaying step: {}", step);
        let mut redirected = false;
        match step {
            Step::Load(url) => {
                self.collect_notifications();
                self.coordinator.browser_mut().load(url);
                let row_count = self.options.row_count;
                redirected = reload_page(&mut self.coordinator, || table_surface(row_count)) > 0;
            }
            Step::SelectView(view) => self.coordinator.user_select_view(*view),
            Step::SelectRow(row) => self.coordinator.user_select_row(*row),
            Step::RemoveRow(row) => {
                let changes = self.coordinator.surface_mut().remove_row(*row);
                self.coordinator.dispatch_user_changes(changes);
            }
            Step::Back => {
                self.coordinator.browser_mut().back();
            }
            Step::Forward => {
                self.coordinator.browser_mut().forward();
            }
            Step::Go(delta) => {
                self.coordinator.browser_mut().go(*delta);
            }
            Step::Unsupported => self.coordinator.browser_mut().set_supported(false),
        }
        self.coordinator.drain_events(&self.events);
        self.record(step.to_string(), redirected);
    }

    fn record(&mut self, step: String, redirected: bool) {
        self.steps.push(StepRecord {
            step,
            state: self.coordinator.state(),
            url: self.coordinator.browser().current().url.clone(),
            redirected,
        });
    }

    fn collect_notifications(&mut self) {
        let raised = self.coordinator.surface_mut().take_notifications();
        self.notifications.extend(raised);
    }

    fn finish(mut self) -> ReplayReport {
        self.collect_notifications();
        let history = self.coordinator.browser();
        ReplayReport {
            entries: history.entries().to_vec(),
            index: history.index(),
            state: self.coordinator.state(),
            stats: history.stats(),
            detached: self.coordinator.is_detached(),
            steps: self.steps,
            notifications: self.notifications,
        }
    }
}

fn table_surface(row_count: u32) -> TableSurface {
    TableSurface::new((1..=row_count).map(RowId))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn describe_payload_variants() {
        assert_eq!(describe_payload(None), "-");
        assert_eq!(
            describe_payload(Some(&json!({"view": 1, "id": 5}))),
            "view=1 id=5"
        );
        assert_eq!(describe_payload(Some(&json!("x"))), "\"x\"");
    }

    #[test]
    fn script_without_load_opens_at_root() {
        let options = ReplayOptions::default();
        let report = run_script(&[], &options);
        assert_eq!(report.steps[0].url, "/History/TableDemo/");
        assert_eq!(report.state, ViewState::table(None));
        assert_eq!(report.stats.replaces, 1);
    }
}
