// src/catalog/store.rs

use crate::catalog::state::{CatalogEvent, CatalogState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::warn;

/// Owner of the session's current [`CatalogState`].
///
/// Readers take a cheap `Arc` snapshot. Writers build the next snapshot from
/// the current one under the write lock and swap it in whole, so nobody can
/// observe a half-applied event.
pub struct CatalogStore {
    current: RwLock<Arc<CatalogState>>,
    generation: AtomicU64,
}

impl CatalogStore {
    pub fn new(initial: CatalogState) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
            generation: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> Arc<CatalogState> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Applies `event` and returns the snapshot it produced.
    pub fn dispatch(&self, event: CatalogEvent) -> Arc<CatalogState> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(guard.apply(event));
        *guard = Arc::clone(&next);
        next
    }

    /// Applies `events` in order and publishes only the final snapshot.
    pub fn dispatch_all(&self, events: impl IntoIterator<Item = CatalogEvent>) -> Arc<CatalogState> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(
            events
                .into_iter()
                .fold((**guard).clone(), |state, event| state.apply(event)),
        );
        *guard = Arc::clone(&next);
        next
    }

    /// Token identifying the current session. Asynchronous work captures it
    /// when it starts and hands it back to [`CatalogStore::complete`].
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Applies the result of asynchronous work if its session is still live.
    ///
    /// Returns `false` (and drops the event) when the store was torn down
    /// after the work started.
    pub fn complete(&self, generation: u64, event: CatalogEvent) -> bool {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        // Checked under the write lock so a concurrent teardown cannot slip
        // between the check and the swap.
        let current = self.generation();
        if generation != current {
            warn!(generation, current, "discarding completion for a stale session");
            return false;
        }
        let next = Arc::new(guard.apply(event));
        *guard = next;
        true
    }

    /// Invalidates every in-flight completion.
    pub fn teardown(&self) {
        let _guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(CatalogState::default())
    }
}
