//! Application state shared across all handlers.

use std::sync::Arc;

use crate::domain::JobStore;
use crate::infrastructure::config::Config;
use crate::infrastructure::{FileStore, SupabaseStore};

#[derive(Clone)]
pub struct AppState {
    /// The storage backend, chosen once at startup. Handlers never learn
    /// which implementation is behind the trait object.
    pub store: Arc<dyn JobStore>,
    pub admin_email: String,
}

impl AppState {
    /// Pick the backend: hosted when an endpoint URL and access key are both
    /// configured, the file fallback otherwise. Running without hosted
    /// configuration is a valid, expected state.
    pub fn from_config(config: &Config) -> Self {
        let store: Arc<dyn JobStore> = match config.supabase() {
            Some((url, key)) => match SupabaseStore::new(url, key) {
                Ok(store) => {
                    tracing::info!("using hosted database at {}", url);
                    Arc::new(store)
                }
                Err(e) => {
                    tracing::error!(
                        "hosted database client failed to initialize ({}), falling back to file storage",
                        e
                    );
                    Arc::new(FileStore::new(&config.data_dir))
                }
            },
            None => {
                tracing::info!(
                    "no hosted database configured, using file storage at {:?}",
                    config.data_dir
                );
                Arc::new(FileStore::new(&config.data_dir))
            }
        };

        Self::with_store(store, config.admin_email.clone())
    }

    pub fn with_store(store: Arc<dyn JobStore>, admin_email: String) -> Self {
        Self { store, admin_email }
    }
}
