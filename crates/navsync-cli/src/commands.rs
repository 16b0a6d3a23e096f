use std::fs;

use anyhow::{Context, Result};
use navsync_cli::config::load_config;
use navsync_cli::replay::{ReplayOptions, run_script};
use navsync_cli::script::parse_script;
use navsync_core::codec::to_payload;
use navsync_core::url::navigation_url;
use navsync_core::{AnyRow, CoordinatorConfig, InitStrategy, decode, encode, url_to_record};
use navsync_model::{ActiveView, Location, RowId, ViewState};
use tracing::{debug, info};

use crate::cli::{Cli, EncodeArgs, ParseArgs, ReplayArgs, StrategyArg, ViewArg};
use crate::summary::{print_fields, print_replay};

/// Configuration file merged with command line overrides.
pub fn resolve_config(cli: &Cli) -> Result<CoordinatorConfig> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(base) = &cli.base {
        config.base_path.clone_from(base);
    }
    debug!("Using base path {}", config.base_path);
    Ok(config)
}

pub fn run_encode(config: &CoordinatorConfig, args: &EncodeArgs) -> Result<()> {
    let view = match args.view {
        ViewArg::Table => ActiveView::Table,
        ViewArg::About => ActiveView::About,
    };
    let state = ViewState::new(view, args.row.map(RowId));
    let record = encode(state);
    let url = navigation_url(record, &config.base_path, &Location::default());
    print_fields(&[
        ("State", state.to_string()),
        ("Record", format!("view={} id={}", record.view, record.row_id)),
        ("Payload", to_payload(record).to_string()),
        ("URL", url),
    ]);
    Ok(())
}

pub fn run_parse(config: &CoordinatorConfig, args: &ParseArgs) -> Result<()> {
    let location = Location::parse(&args.url);
    let record = url_to_record(&location.path, &config.base_path)
        .with_context(|| format!("parse {}", args.url))?;
    let state = decode(record, &AnyRow).with_context(|| format!("decode {}", args.url))?;
    let canonical = navigation_url(record, &config.base_path, &location);
    print_fields(&[
        ("Path", location.path.clone()),
        ("Query", location.query.clone().unwrap_or_else(|| "-".to_string())),
        ("Record", format!("view={} id={}", record.view, record.row_id)),
        ("State", state.to_string()),
        ("Canonical URL", canonical),
    ]);
    Ok(())
}

/// Returns true when the session ended detached from the transport.
pub fn run_replay(config: CoordinatorConfig, args: &ReplayArgs) -> Result<bool> {
    let text = fs::read_to_string(&args.script)
        .with_context(|| format!("read script {}", args.script.display()))?;
    let steps = parse_script(&text).with_context(|| format!("parse {}", args.script.display()))?;
    let mut options = ReplayOptions {
        config,
        row_count: args.rows,
    };
    if let Some(strategy) = args.strategy {
        options.config.strategy = match strategy {
            StrategyArg::Default => InitStrategy::SeedFromDefault,
            StrategyArg::Url => InitStrategy::SeedFromUrl,
        };
    }
    info!(
        "Replaying {} steps with strategy {}",
        steps.len(),
        options.config.strategy.display_name()
    );
    let report = run_script(&steps, &options);
    print_replay(&report);
    Ok(report.detached)
}
