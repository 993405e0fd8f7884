//! Tenant-isolated key/value backends holding JSON documents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use quantro_core::TenantId;

use crate::error::{StorageError, StorageResult};

/// Document slots kept per tenant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Products,
    Settings,
    UploadedFiles,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Products => "products",
            StorageKey::Settings => "settings",
            StorageKey::UploadedFiles => "files",
        }
    }
}

/// Raw document storage, one JSON string per (tenant, key).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, tenant_id: TenantId, key: StorageKey) -> StorageResult<Option<String>>;
    fn set(&self, tenant_id: TenantId, key: StorageKey, value: String) -> StorageResult<()>;
    fn remove(&self, tenant_id: TenantId, key: StorageKey) -> StorageResult<()>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, tenant_id: TenantId, key: StorageKey) -> StorageResult<Option<String>> {
        (**self).get(tenant_id, key)
    }

    fn set(&self, tenant_id: TenantId, key: StorageKey, value: String) -> StorageResult<()> {
        (**self).set(tenant_id, key, value)
    }

    fn remove(&self, tenant_id: TenantId, key: StorageKey) -> StorageResult<()> {
        (**self).remove(tenant_id, key)
    }
}

/// In-memory backend for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<(TenantId, StorageKey), String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, tenant_id: TenantId, key: StorageKey) -> StorageResult<Option<String>> {
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(&(tenant_id, key)).cloned())
    }

    fn set(&self, tenant_id: TenantId, key: StorageKey, value: String) -> StorageResult<()> {
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        map.insert((tenant_id, key), value);
        Ok(())
    }

    fn remove(&self, tenant_id: TenantId, key: StorageKey) -> StorageResult<()> {
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        map.remove(&(tenant_id, key));
        Ok(())
    }
}

/// File backend: `{root}/{tenant_id}/{key}.json`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, tenant_id: TenantId, key: StorageKey) -> PathBuf {
        self.root
            .join(tenant_id.to_string())
            .join(format!("{}.json", key.as_str()))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, tenant_id: TenantId, key: StorageKey) -> StorageResult<Option<String>> {
        let path = self.path_for(tenant_id, key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(path, err)),
        }
    }

    fn set(&self, tenant_id: TenantId, key: StorageKey, value: String) -> StorageResult<()> {
        let path = self.path_for(tenant_id, key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        // Write-then-rename so a crash never leaves a half-written document.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| StorageError::io(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| StorageError::io(&path, e))
    }

    fn remove(&self, tenant_id: TenantId, key: StorageKey) -> StorageResult<()> {
        let path = self.path_for(tenant_id, key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::io(path, err)),
        }
    }
}

/// Default local data directory: `{os_data_dir}/quantro`.
pub fn default_data_dir() -> StorageResult<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or_else(|| {
            StorageError::Config(
                "failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share"
                    .to_string(),
            )
        })?;

    Ok(base.join("quantro"))
}
