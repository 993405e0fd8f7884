//! Storage selection from the process environment.
//!
//! - `QUANTRO_DATA_DIR`: local store directory (default `{os_data_dir}/quantro`)
//! - `QUANTRO_REMOTE_URL` + `QUANTRO_REMOTE_KEY`: enable remote sync when both are set

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::StorageResult;
use crate::kv::{FileKeyValueStore, default_data_dir};
use crate::store::{LocalStore, ProductStore};

pub const DATA_DIR_ENV: &str = "QUANTRO_DATA_DIR";
pub const REMOTE_URL_ENV: &str = "QUANTRO_REMOTE_URL";
pub const REMOTE_KEY_ENV: &str = "QUANTRO_REMOTE_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub remote: Option<RemoteConfig>,
}

impl StorageConfig {
    pub fn from_env() -> StorageResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StorageResult<Self> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let data_dir = match var(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let remote = match (var(REMOTE_URL_ENV), var(REMOTE_KEY_ENV)) {
            (Some(base_url), Some(api_key)) => Some(RemoteConfig { base_url, api_key }),
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!("{REMOTE_URL_ENV} and {REMOTE_KEY_ENV} must both be set, remote sync disabled");
                None
            }
            (None, None) => None,
        };

        Ok(Self { data_dir, remote })
    }

    pub fn remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    /// Build the storage strategy this configuration selects.
    pub fn build(&self) -> StorageResult<Arc<dyn ProductStore>> {
        let local = LocalStore::new(FileKeyValueStore::new(&self.data_dir));

        match &self.remote {
            #[cfg(feature = "http")]
            Some(remote) => {
                tracing::info!(data_dir = %self.data_dir.display(), base_url = %remote.base_url, "using synced product store");
                let backend = crate::remote::HttpRemote::new(&remote.base_url, &remote.api_key);
                Ok(Arc::new(crate::store::SyncedStore::new(local, backend)))
            }
            #[cfg(not(feature = "http"))]
            Some(_) => {
                tracing::warn!("remote sync configured but the `http` feature is disabled, using local store");
                Ok(Arc::new(local))
            }
            None => {
                tracing::info!(data_dir = %self.data_dir.display(), "using local product store");
                Ok(Arc::new(local))
            }
        }
    }
}
