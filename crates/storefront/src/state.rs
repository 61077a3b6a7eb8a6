//! Application state shared across the storefront.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::orders::OrderHistory;
use crate::services::auth::AuthService;
use crate::session::SessionStore;
use crate::storage::{JsonFileBucket, MemoryBucket, StorageBucket, StorageError};

/// Application state.
///
/// Cheaply cloneable via `Arc`; ties together the configuration, the menu
/// catalog, the mock order history, and the two storage buckets.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    orders: OrderHistory,
    durable: Arc<dyn StorageBucket>,
    sessions: SessionStore,
}

impl AppState {
    /// Create state over explicit buckets.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        durable: Arc<dyn StorageBucket>,
        tab: Arc<dyn StorageBucket>,
    ) -> Self {
        let sessions = SessionStore::new(durable.clone(), tab);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::sample(),
                orders: OrderHistory::sample(),
                durable,
                sessions,
            }),
        }
    }

    /// State backed by a durable JSON file under the configured data
    /// directory, plus an in-memory tab-scoped bucket.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the durable bucket file cannot be opened.
    pub fn open(config: StorefrontConfig) -> Result<Self, StorageError> {
        let durable = JsonFileBucket::open(config.data_dir.join("storefront.json"))?;
        Ok(Self::new(
            config,
            Arc::new(durable),
            Arc::new(MemoryBucket::new()),
        ))
    }

    /// Fully in-memory state, for tests and walkthroughs.
    #[must_use]
    pub fn in_memory(config: StorefrontConfig) -> Self {
        Self::new(
            config,
            Arc::new(MemoryBucket::new()),
            Arc::new(MemoryBucket::new()),
        )
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The menu catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// The mock order history.
    #[must_use]
    pub fn orders(&self) -> &OrderHistory {
        &self.inner.orders
    }

    /// The session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// An authentication service borrowing from this state.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(
            self.inner.durable.as_ref(),
            &self.inner.sessions,
            self.inner.config.network_delay,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_state_starts_unauthenticated() {
        let state = AppState::in_memory(StorefrontConfig::without_delay());
        assert!(!state.sessions().is_authenticated());
        assert_eq!(state.catalog().items().len(), 6);
        assert_eq!(state.orders().in_transit_count(), 1);
    }

    #[test]
    fn test_state_is_cheaply_cloneable() {
        let state = AppState::in_memory(StorefrontConfig::without_delay());
        let clone = state.clone();
        assert_eq!(
            clone.catalog().items().len(),
            state.catalog().items().len()
        );
    }
}
