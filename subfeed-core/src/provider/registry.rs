// Provider Registry

use std::collections::HashMap;
use std::sync::Arc;

use super::tmdb::TheMovieDbProvider;
use super::traits::ContentProvider;
use super::twitch::TwitchProvider;
use super::yle::YleProvider;
use crate::config::ProvidersConfig;
use crate::models::Provider;

/// Immutable lookup table from [`Provider`] to its adapter.
///
/// Built once at startup and shared behind the services; there is no
/// runtime registration or removal.
pub struct ProviderRegistry {
    providers: HashMap<Provider, Arc<dyn ContentProvider>>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Registry with all production adapters wired from configuration.
    #[must_use]
    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self::new()
            .with_provider(Arc::new(TwitchProvider::new(&config.twitch)))
            .with_provider(Arc::new(YleProvider::new(&config.yle)))
            .with_provider(Arc::new(TheMovieDbProvider::new(&config.tmdb)))
    }

    /// Register an adapter under the provider it reports. Re-registering
    /// the same provider replaces the previous adapter.
    #[must_use]
    pub fn with_provider(mut self, adapter: Arc<dyn ContentProvider>) -> Self {
        self.providers.insert(adapter.provider(), adapter);
        self
    }

    #[must_use]
    pub fn get(&self, provider: Provider) -> Option<Arc<dyn ContentProvider>> {
        self.providers.get(&provider).cloned()
    }

    #[must_use]
    pub fn registered(&self) -> Vec<Provider> {
        self.providers.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
