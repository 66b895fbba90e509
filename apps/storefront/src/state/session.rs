//! # Session State
//!
//! One visitor session: its own `CatalogStore` plus the change events the
//! front end has not rendered yet.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` so a host that serves several
//! sessions from worker threads can hand each one a `SessionState`. Stores
//! are never shared between sessions; only the immutable catalog is.
//!
//! ## Change Notification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  command ──► with_store_mut(|s| s.add_to_cart(..))                     │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │              CatalogStore emits StoreEvent::CartItemAdded              │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │              session observer: log it + queue it                       │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  console ──► drain_events() ──► re-render the affected views           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use bizideas_core::{Catalog, CatalogStore, StoreEvent};
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

/// A single visitor's storefront state.
#[derive(Debug)]
pub struct SessionState {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    store: Arc<Mutex<CatalogStore>>,
    pending: Arc<Mutex<Vec<StoreEvent>>>,
}

impl SessionState {
    /// Starts a session over `catalog` with a fresh store.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let session_id = Uuid::new_v4();
        let pending = Arc::new(Mutex::new(Vec::new()));

        let mut store = CatalogStore::new(catalog);
        let queue = Arc::clone(&pending);
        store.subscribe(move |event: &StoreEvent| {
            debug!(session_id = %session_id, ?event, "Store changed");
            queue
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        });

        info!(session_id = %session_id, "Session started");

        SessionState {
            session_id,
            started_at: Utc::now(),
            store: Arc::new(Mutex::new(store)),
            pending,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = session.with_store(|s| s.total_price());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CatalogStore) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_store_mut(|s| s.toggle_favorite(id));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CatalogStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }

    /// Takes every change event queued since the last call.
    pub fn drain_events(&self) -> Vec<StoreEvent> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *pending)
    }
}
