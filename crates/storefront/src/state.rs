//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::store::CatalogStore;
use crate::telegram::{TelegramClient, TelegramError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the catalog store, configuration and the order notifier.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: CatalogStore,
    telegram: Option<TelegramClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `store` - Catalog store, possibly already seeded
    ///
    /// # Errors
    ///
    /// Returns an error if Telegram is configured but its client cannot be built.
    pub fn new(config: StorefrontConfig, store: CatalogStore) -> Result<Self, TelegramError> {
        let telegram = config
            .telegram
            .as_ref()
            .map(TelegramClient::new)
            .transpose()?;

        if telegram.is_none() {
            tracing::warn!("Telegram is not configured; order submission is disabled");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                telegram,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.inner.store
    }

    /// Get the Telegram client, if order notifications are configured.
    #[must_use]
    pub fn telegram(&self) -> Option<&TelegramClient> {
        self.inner.telegram.as_ref()
    }
}
