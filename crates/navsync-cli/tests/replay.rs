//! Integration tests for scripted session replay.

use insta::assert_snapshot;
use navsync_cli::replay::{ReplayOptions, run_script};
use navsync_cli::script::parse_script;
use navsync_core::{CoordinatorConfig, InitStrategy};
use navsync_model::{RowId, ViewState};

fn options(strategy: InitStrategy) -> ReplayOptions {
    ReplayOptions {
        config: CoordinatorConfig {
            base_path: "/App".to_string(),
            strategy,
        },
        row_count: 10,
    }
}

fn replay(script: &str) -> navsync_cli::replay::ReplayReport {
    let steps = parse_script(script).unwrap();
    run_script(&steps, &options(InitStrategy::SeedFromUrl))
}

#[test]
fn back_and_forward_restore_selections() {
    let report = replay(
        "load /App/table/3/
         select-row 5
         select-view about
         back
         back
         forward
         select-row 7",
    );

    assert_snapshot!(report.render_steps(), @r"
    0. open /App/table/3/ => table (row 3) at /App/table/3/
    1. select-row 5 => table (row 5) at /App/table/5/
    2. select-view about => about at /App/about/
    3. back => table (row 5) at /App/table/5/
    4. back => table (row 3) at /App/table/3/
    5. forward => table (row 5) at /App/table/5/
    6. select-row 7 => table (row 7) at /App/table/7/
    ");
    assert_snapshot!(report.render_stack(), @r"
    - 0: /App/table/3/ view=1 id=3
    - 1: /App/table/5/ view=1 id=5
    * 2: /App/table/7/ view=1 id=7
    ");
    assert_eq!(report.stats.pushes, 3);
    assert_eq!(report.stats.replaces, 1);
    assert!(report.notifications.is_empty());
}

#[test]
fn malformed_deep_link_redirects_to_root() {
    let report = replay(
        "load /App/nope/
         select-view about",
    );

    assert_snapshot!(report.render_steps(), @r"
    0. open /App/nope/ => table at /App/ [redirected]
    1. select-view about => about at /App/about/
    ");
    assert_snapshot!(report.render_stack(), @r"
    - 0: /App/nope/ -
    - 1: /App/ view=1 id=-1
    * 2: /App/about/ view=2 id=-1
    ");
    assert_eq!(report.stats.redirects, 1);
}

#[test]
fn default_strategy_keeps_the_opening_url() {
    let steps = parse_script("load /App/anything?x=1\nselect-row 2").unwrap();
    let report = run_script(&steps, &options(InitStrategy::SeedFromDefault));

    assert_snapshot!(report.render_stack(), @r"
    - 0: /App/anything?x=1 view=1 id=-1
    * 1: /App/table/2/?x=1 view=1 id=2
    ");
    assert_eq!(report.stats.redirects, 0);
}

#[test]
fn unsupported_browser_detaches_after_first_error() {
    let report = replay(
        "select-row 2
         unsupported
         select-row 4
         select-row 5",
    );

    assert!(report.detached);
    assert_eq!(report.stats.errors, 1);
    assert_eq!(report.stats.pushes, 1);
    assert_eq!(report.state, ViewState::table(Some(RowId(5))));
    assert_eq!(
        report.notifications,
        vec!["Your browser doesn't seem to support pushState properly: pushState".to_string()]
    );
}

#[test]
fn removing_a_row_keeps_it_in_history_but_not_in_the_view() {
    let report = replay(
        "select-row 4
         select-row 6
         remove-row 4
         back",
    );

    // Removing 4 while 6 is selected raises nothing.
    assert_eq!(report.stats.pushes, 2);
    assert_eq!(report.steps[4].state, ViewState::table(None));
    assert_eq!(report.steps[4].url, "/App/table/4/");
}

#[test]
fn reload_boots_a_fresh_page_on_the_same_stack() {
    let report = replay(
        "select-view about
         load /App/table/9/
         back",
    );

    assert_snapshot!(report.render_steps(), @r"
    0. open /App/ => table at /App/
    1. select-view about => about at /App/about/
    2. load /App/table/9/ => table (row 9) at /App/table/9/
    3. back => about at /App/about/
    ");
    assert_eq!(report.entries.len(), 3);
    assert_eq!(report.index, 1);
}

#[test]
fn row_changes_behind_the_about_view_record_about() {
    let report = replay(
        "select-row 2
         select-view about
         select-row 5
         remove-row 5
         select-view table
         back",
    );

    assert_snapshot!(report.render_steps(), @r"
    0. open /App/ => table at /App/
    1. select-row 2 => table (row 2) at /App/table/2/
    2. select-view about => about at /App/about/
    3. select-row 5 => about at /App/about/
    4. remove-row 5 => about at /App/about/
    5. select-view table => table at /App/table/
    6. back => about at /App/about/
    ");
    assert_snapshot!(report.render_stack(), @r"
    - 0: /App/ view=1 id=-1
    - 1: /App/table/2/ view=1 id=2
    - 2: /App/about/ view=2 id=-1
    - 3: /App/about/ view=2 id=-1
    * 4: /App/about/ view=2 id=-1
    - 5: /App/table/ view=1 id=-1
    ");
    assert_eq!(report.stats.pushes, 5);
}
