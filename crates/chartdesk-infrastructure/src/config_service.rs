//! Configuration service implementation.
//!
//! Loads the remote service configuration from `config.toml` in the config
//! directory and caches it. Environment variables take precedence so CI and
//! ad-hoc runs can point at another backend without touching the file:
//!
//! - `CHARTDESK_SERVICE_URL`
//! - `CHARTDESK_ANON_KEY`

use crate::paths::ChartdeskPaths;
use crate::storage::atomic_toml::AtomicTomlFile;
use chartdesk_core::error::{ChartdeskError, Result};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Connection settings for the remote auth/data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service (no trailing slash), e.g.
    /// `https://abc.supabase.co`
    pub service_url: String,
    /// Public anon API key sent with every request
    pub anon_key: String,
}

impl ServiceConfig {
    /// Returns the base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.service_url.trim_end_matches('/')
    }
}

/// Configuration service that loads and caches the service configuration.
#[derive(Clone)]
pub struct ConfigService {
    paths: ChartdeskPaths,
    /// Cached configuration, lazily loaded on first access.
    cache: Arc<RwLock<Option<ServiceConfig>>>,
}

impl ConfigService {
    pub fn new(paths: ChartdeskPaths) -> Self {
        Self {
            paths,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the service configuration, loading it if not cached.
    pub fn get(&self) -> Result<ServiceConfig> {
        {
            let read_lock = self
                .cache
                .read()
                .map_err(|e| ChartdeskError::internal(format!("config cache poisoned: {e}")))?;
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load()?;

        let mut write_lock = self
            .cache
            .write()
            .map_err(|e| ChartdeskError::internal(format!("config cache poisoned: {e}")))?;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    fn load(&self) -> Result<ServiceConfig> {
        if let (Ok(service_url), Ok(anon_key)) = (
            std::env::var("CHARTDESK_SERVICE_URL"),
            std::env::var("CHARTDESK_ANON_KEY"),
        ) {
            return Ok(ServiceConfig {
                service_url,
                anon_key,
            });
        }

        let file: AtomicTomlFile<ServiceConfig> = AtomicTomlFile::new(self.paths.config_file()?);
        file.load()?.ok_or_else(|| {
            ChartdeskError::config(
                "No service configuration found. Create config.toml with \
                 service_url and anon_key, or set CHARTDESK_SERVICE_URL and \
                 CHARTDESK_ANON_KEY.",
            )
        })
    }
}
