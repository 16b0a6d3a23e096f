//! Re-entrancy guard for programmatic state application.
//!
//! Applying a replayed state mutates widgets, and widgets raise the same
//! "selection changed" notifications a user would. While a [`ReplayScope`]
//! is alive those notifications must not be treated as user actions.

use std::cell::Cell;
use std::rc::Rc;

/// Shared guard flag. Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct ReplayGuard {
    depth: Rc<Cell<u32>>,
}

impl ReplayGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the guard until the returned scope is dropped.
    ///
    /// Scopes nest; the guard is released when the outermost one ends.
    pub fn enter(&self) -> ReplayScope {
        self.depth.set(self.depth.get() + 1);
        ReplayScope {
            depth: Rc::clone(&self.depth),
        }
    }

    pub fn is_held(&self) -> bool {
        self.depth.get() > 0
    }
}

/// Acquired [`ReplayGuard`]. Releases on drop, including during unwinding.
#[must_use = "the guard is released as soon as the scope is dropped"]
#[derive(Debug)]
pub struct ReplayScope {
    depth: Rc<Cell<u32>>,
}

impl Drop for ReplayScope {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn released_when_scope_ends() {
        let guard = ReplayGuard::new();
        assert!(!guard.is_held());
        {
            let _scope = guard.enter();
            assert!(guard.is_held());
        }
        assert!(!guard.is_held());
    }

    #[test]
    fn nested_scopes_release_at_outermost() {
        let guard = ReplayGuard::new();
        let outer = guard.enter();
        let inner = guard.clone().enter();
        drop(inner);
        assert!(guard.is_held());
        drop(outer);
        assert!(!guard.is_held());
    }

    #[test]
    fn released_on_panic() {
        let guard = ReplayGuard::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _scope = guard.enter();
            panic!("apply failed halfway");
        }));
        assert!(result.is_err());
        assert!(!guard.is_held());
    }
}
