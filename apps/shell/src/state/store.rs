//! # Store State
//!
//! Owns the session's `ListStore` and broadcasts its snapshots.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store State Lifecycle                                │
//! │                                                                         │
//! │   uninitialized() ──► start(store) ──► commands... ──► shutdown()       │
//! │        │                   │                               │            │
//! │        │              publish r0                      publish None      │
//! │        ▼                                                   ▼            │
//! │   NOT_INITIALIZED                                   NOT_INITIALIZED     │
//! │                                                                         │
//! │   with_store_mut(f):                                                    │
//! │     lock ──► f(&mut store) ──► revision moved? ──yes──► publish rN      │
//! │                                       │                                 │
//! │                                       └──no──► (observers stay quiet)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `Arc<Mutex<..>>`: every command is short and most of them write, so a
//! plain mutex is enough. Observers never take the lock; they read published
//! `Snapshot`s from a `tokio::sync::watch` channel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use basket_core::{CoreError, CoreResult, ListStore, Snapshot};
use tokio::sync::watch;
use tracing::{info, warn};

/// Session-scoped store handle. Cheap to clone; clones share the store.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Option<ListStore>>>,
    snapshots: Arc<watch::Sender<Option<Snapshot>>>,
}

impl StoreState {
    /// A handle with no store behind it yet. Every access fails with
    /// `StoreNotInitialized` until [`StoreState::start`].
    pub fn uninitialized() -> Self {
        let (snapshots, _) = watch::channel(None);
        StoreState {
            store: Arc::new(Mutex::new(None)),
            snapshots: Arc::new(snapshots),
        }
    }

    /// Installs `store` and publishes its first snapshot.
    ///
    /// Starting an already started state replaces the old store.
    pub fn start(&self, store: ListStore) {
        let snapshot = store.snapshot();
        let mut slot = self.lock();
        if slot.is_some() {
            warn!("store restarted; previous session discarded");
        }
        *slot = Some(store);
        drop(slot);

        info!(
            lists = snapshot.lists().len(),
            revision = snapshot.revision(),
            "store started"
        );
        self.snapshots.send_replace(Some(snapshot));
    }

    /// Drops the store. Later accesses fail until the next `start`.
    pub fn shutdown(&self) {
        let previous = self.lock().take();
        if previous.is_some() {
            info!("store shut down");
            self.snapshots.send_replace(None);
        }
    }

    pub fn is_started(&self) -> bool {
        self.lock().is_some()
    }

    /// Receives the latest snapshot after every structural change.
    /// `None` means the store is not running.
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.snapshots.subscribe()
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use basket_core::ListStore;
    /// use basket_shell::state::StoreState;
    ///
    /// let state = StoreState::uninitialized();
    /// assert!(state.with_store(|s| s.lists().len()).is_err());
    ///
    /// state.start(ListStore::new());
    /// assert_eq!(state.with_store(|s| s.lists().len()).unwrap(), 0);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&ListStore) -> R,
    {
        let slot = self.lock();
        let store = slot.as_ref().ok_or(CoreError::StoreNotInitialized)?;
        Ok(f(store))
    }

    /// Executes a function with write access to the store, publishing a new
    /// snapshot if the revision moved.
    pub fn with_store_mut<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&mut ListStore) -> R,
    {
        let mut slot = self.lock();
        let store = slot.as_mut().ok_or(CoreError::StoreNotInitialized)?;

        let before = store.revision();
        let result = f(store);
        if store.revision() != before {
            self.snapshots.send_replace(Some(store.snapshot()));
        }
        Ok(result)
    }

    // A panic inside a command closure leaves the store itself consistent:
    // every mutation commits in one step.
    fn lock(&self) -> MutexGuard<'_, Option<ListStore>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::uninitialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::NewItem;

    #[test]
    fn test_access_before_start_fails() {
        let state = StoreState::uninitialized();
        assert!(!state.is_started());
        assert!(matches!(
            state.with_store(|s| s.revision()),
            Err(CoreError::StoreNotInitialized)
        ));
        assert!(matches!(
            state.with_store_mut(|s| s.add_list("x")),
            Err(CoreError::StoreNotInitialized)
        ));
    }

    #[test]
    fn test_access_after_shutdown_fails() {
        let state = StoreState::uninitialized();
        state.start(ListStore::new());
        state.with_store_mut(|s| s.add_list("x")).unwrap();

        state.shutdown();
        assert!(!state.is_started());
        assert!(state.with_store(|s| s.lists().len()).is_err());

        // shutting down twice is harmless
        state.shutdown();
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = StoreState::uninitialized();
        let other = state.clone();
        state.start(ListStore::new());

        other.with_store_mut(|s| s.add_list("Shared")).unwrap();
        assert_eq!(state.with_store(|s| s.lists().len()).unwrap(), 1);
    }

    #[test]
    fn test_start_publishes_initial_snapshot() {
        let state = StoreState::uninitialized();
        let rx = state.subscribe();
        assert!(rx.borrow().is_none());

        state.start(ListStore::new());
        let current = rx.borrow();
        assert_eq!(current.as_ref().map(|s| s.revision()), Some(0));
    }

    #[tokio::test]
    async fn test_mutation_notifies_subscribers() {
        let state = StoreState::uninitialized();
        state.start(ListStore::new());
        let mut rx = state.subscribe();
        rx.borrow_and_update();

        let list_id = state.with_store_mut(|s| s.add_list("Weekly")).unwrap();

        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone().unwrap();
        assert_eq!(snapshot.revision(), 1);
        assert!(snapshot.list(&list_id).is_some());
    }

    #[tokio::test]
    async fn test_noop_mutation_stays_quiet() {
        let state = StoreState::uninitialized();
        state.start(ListStore::new());
        let mut rx = state.subscribe();
        rx.borrow_and_update();

        let added = state
            .with_store_mut(|s| s.add_item("missing", NewItem::named("Milk")))
            .unwrap();
        assert_eq!(added, None);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_shutdown_publishes_none() {
        let state = StoreState::uninitialized();
        state.start(ListStore::new());
        let mut rx = state.subscribe();
        rx.borrow_and_update();

        state.shutdown();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }
}
