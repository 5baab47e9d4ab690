use anyhow::{Context, Result};
use auth::{
    abstract_trait::DynCredentialStore,
    cache::FileCredentialStore,
    di::{DependenciesInject, DependenciesInjectDeps},
};
use prometheus_client::registry::Registry;
use shared::config::Config;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        info!("Using credential file {}", config.session_file.display());
        let store = Arc::new(FileCredentialStore::new(config.session_file.clone()))
            as DynCredentialStore;

        Self::with_store(&config.api_base_url, store)
    }

    /// Builds the state around an existing store; used by tests with an
    /// in-memory store.
    pub fn with_store(api_base_url: &str, store: DynCredentialStore) -> Result<Self> {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(
            DependenciesInjectDeps {
                api_base_url: api_base_url.to_string(),
                store,
            },
            &mut registry,
        )
        .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
        })
    }
}
