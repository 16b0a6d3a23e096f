//! First-load initialization from the page URL.

use crate::codec;
use crate::coordinator::{NavigationCoordinator, StartOutcome};
use crate::surface::ViewSurface;
use crate::transport::Browser;
use crate::url;
use navsync_model::NavError;

/// Seeds the first history entry from a deep link.
pub struct UrlInitializer;

impl UrlInitializer {
    /// Parse the current location and apply it.
    ///
    /// A malformed path redirects to the canonical root and does nothing
    /// else; the redirect loads the page again. A valid path is applied
    /// through the guarded replay path and recorded with `replaceState`, so
    /// the deep link does not add a back step.
    pub fn run<B: Browser, S: ViewSurface>(
        coordinator: &mut NavigationCoordinator<B, S>,
    ) -> StartOutcome {
        let location = coordinator.browser().location();
        let base_path = coordinator.config().base_path.clone();

        let decoded = url::url_to_record(&location.path, &base_path)
            .map_err(NavError::from)
            .and_then(|record| {
                codec::decode_detailed(record, coordinator.surface()).map_err(Into::into)
            });
        let decoded = match decoded {
            Ok(decoded) => decoded,
            Err(err) => {
                let root = url::canonical_root(&base_path);
                tracing::info!(
                    "Initial location {} rejected ({}), redirecting to {}",
                    location,
                    err,
                    root
                );
                coordinator.redirect(&root);
                return StartOutcome::Redirected(root);
            }
        };
        if let Some(row) = decoded.stale_row {
            tracing::debug!("Deep link refers to unknown row {}", row);
        }

        tracing::info!("Starting at {} from {}", decoded.state, location);
        coordinator.apply_guarded(decoded.state);
        coordinator.replace_current(None);
        StartOutcome::Seeded(coordinator.state())
    }
}
