//! Page loads in an in-memory tab.

use crate::coordinator::{CoordinatorConfig, NavigationCoordinator, StartOutcome};
use crate::memory::MemoryHistory;
use crate::surface::ViewSurface;

/// Redirects followed by one page load before giving up.
pub const MAX_REDIRECTS: usize = 3;

pub struct LoadedPage<S> {
    pub coordinator: NavigationCoordinator<MemoryHistory, S>,
    /// Redirects followed before the page settled.
    pub redirects: usize,
}

/// Start a page on an existing tab.
///
/// Redirects issued by the URL initializer are followed up to
/// [`MAX_REDIRECTS`] times, each with a surface fresh from `new_surface`.
pub fn load_page<S, F>(
    config: &CoordinatorConfig,
    history: MemoryHistory,
    mut new_surface: F,
) -> LoadedPage<S>
where
    S: ViewSurface,
    F: FnMut() -> S,
{
    let mut coordinator = NavigationCoordinator::new(config.clone(), history, new_surface());
    let redirects = settle(&mut coordinator, new_surface);
    LoadedPage {
        coordinator,
        redirects,
    }
}

/// Reload the page in place: remount a fresh surface and start again.
///
/// Returns the number of redirects followed.
pub fn reload_page<S, F>(
    coordinator: &mut NavigationCoordinator<MemoryHistory, S>,
    mut new_surface: F,
) -> usize
where
    S: ViewSurface,
    F: FnMut() -> S,
{
    coordinator.remount(new_surface());
    settle(coordinator, new_surface)
}

fn settle<S, F>(
    coordinator: &mut NavigationCoordinator<MemoryHistory, S>,
    mut new_surface: F,
) -> usize
where
    S: ViewSurface,
    F: FnMut() -> S,
{
    let mut redirects = 0;
    loop {
        match coordinator.start() {
            StartOutcome::Seeded(state) => {
                tracing::debug!("Page ready in state {}", state);
                return redirects;
            }
            StartOutcome::Redirected(url) if redirects < MAX_REDIRECTS => {
                redirects += 1;
                tracing::debug!("Following redirect {} to {}", redirects, url);
                coordinator.remount(new_surface());
            }
            StartOutcome::Redirected(url) => {
                tracing::warn!("Giving up after {} redirects at {}", redirects, url);
                return redirects;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::InitStrategy;
    use crate::surface::TableSurface;
    use navsync_model::{RowId, ViewState};

    fn config() -> CoordinatorConfig {
        CoordinatorConfig {
            base_path: "/App".to_string(),
            strategy: InitStrategy::SeedFromUrl,
        }
    }

    #[test]
    fn deep_link_settles_without_redirect() {
        let (history, _events) = MemoryHistory::new("/App/table/2/");
        let page = load_page(&config(), history, || TableSurface::new([RowId(2)]));
        assert_eq!(page.redirects, 0);
        assert_eq!(page.coordinator.state(), ViewState::table(Some(RowId(2))));
    }

    #[test]
    fn malformed_link_is_reloaded_at_root() {
        let (history, _events) = MemoryHistory::new("/App/table/two/");
        let mut surfaces = 0;
        let page = load_page(&config(), history, || {
            surfaces += 1;
            TableSurface::default()
        });
        assert_eq!(page.redirects, 1);
        assert_eq!(surfaces, 2);
        let history = page.coordinator.browser();
        assert_eq!(history.current().url, "/App/");
        assert_eq!(history.entries().len(), 2);
    }

    #[test]
    fn redirect_loop_gives_up() {
        // The query is split off the location, so the path never matches the base.
        let config = CoordinatorConfig {
            base_path: "/App?mode=demo".to_string(),
            strategy: InitStrategy::SeedFromUrl,
        };
        let (history, _events) = MemoryHistory::new("/elsewhere");
        let page = load_page(&config, history, TableSurface::default);
        assert_eq!(page.redirects, MAX_REDIRECTS);
    }

    #[test]
    fn reload_resets_page_state_but_keeps_entries() {
        let (history, _events) = MemoryHistory::new("/App/");
        let mut page = load_page(&config(), history, || TableSurface::new([RowId(1)]));
        page.coordinator.user_select_row(Some(RowId(1)));
        page.coordinator.browser_mut().load("/App/about/");

        let redirects = reload_page(&mut page.coordinator, || TableSurface::new([RowId(1)]));
        assert_eq!(redirects, 0);
        assert_eq!(page.coordinator.state(), ViewState::about());
        assert_eq!(page.coordinator.surface().selected_row(), None);
        assert_eq!(page.coordinator.browser().entries().len(), 3);
    }
}
