//! History state synchronization core.
//!
//! Keeps a tabbed table UI and a browser-style history stack in step:
//! selection changes become `pushState` calls, back/forward notifications
//! are decoded and replayed into the UI, and deep links seed the first entry.

pub mod codec;
pub mod coordinator;
pub mod guard;
pub mod initializer;
pub mod memory;
pub mod page;
pub mod surface;
pub mod transport;
pub mod url;

pub use codec::{AnyRow, DecodedState, RowCatalog, decode, decode_detailed, encode};
pub use coordinator::{
    CoordinatorConfig, DEFAULT_BASE_PATH, InitStrategy, NavigationCoordinator, StartOutcome,
};
pub use guard::{ReplayGuard, ReplayScope};
pub use initializer::UrlInitializer;
pub use memory::{HistoryEntry, MemoryHistory, TransportStats};
pub use page::{LoadedPage, MAX_REDIRECTS, load_page, reload_page};
pub use surface::{TableSurface, ViewSurface};
pub use transport::{Browser, HistoryTransport, PageNavigator, TransportEvent};
pub use url::{canonical_root, record_to_url, url_to_record};
