//! Product persistence strategies.
//!
//! Callers hold a [`ProductStore`] and never branch on which backend is
//! configured:
//! - [`LocalStore`] keeps everything in a local key/value backend.
//! - [`SyncedStore`] prefers the remote backend and falls back to the local
//!   copy whenever the remote fails.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use quantro_core::TenantId;
use quantro_metrics::ProductRecord;

use crate::error::StorageResult;
use crate::kv::{KeyValueStore, StorageKey};
use crate::remote::{RemoteBackend, RemoteProductRow};
use crate::settings::{DashboardSettings, UploadedFile};

/// Tenant-scoped persistence of products, settings and upload history.
pub trait ProductStore: Send + Sync {
    fn load_products(&self, tenant_id: TenantId) -> StorageResult<Vec<ProductRecord>>;
    fn save_products(&self, tenant_id: TenantId, products: &[ProductRecord]) -> StorageResult<()>;
    fn load_settings(&self, tenant_id: TenantId) -> StorageResult<DashboardSettings>;
    fn save_settings(&self, tenant_id: TenantId, settings: &DashboardSettings) -> StorageResult<()>;
    fn load_uploaded_files(&self, tenant_id: TenantId) -> StorageResult<Vec<UploadedFile>>;
    fn save_uploaded_files(&self, tenant_id: TenantId, files: &[UploadedFile]) -> StorageResult<()>;
    /// Remove the tenant's products and upload history. Settings are kept.
    fn clear_tenant(&self, tenant_id: TenantId) -> StorageResult<()>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn load_products(&self, tenant_id: TenantId) -> StorageResult<Vec<ProductRecord>> {
        (**self).load_products(tenant_id)
    }

    fn save_products(&self, tenant_id: TenantId, products: &[ProductRecord]) -> StorageResult<()> {
        (**self).save_products(tenant_id, products)
    }

    fn load_settings(&self, tenant_id: TenantId) -> StorageResult<DashboardSettings> {
        (**self).load_settings(tenant_id)
    }

    fn save_settings(&self, tenant_id: TenantId, settings: &DashboardSettings) -> StorageResult<()> {
        (**self).save_settings(tenant_id, settings)
    }

    fn load_uploaded_files(&self, tenant_id: TenantId) -> StorageResult<Vec<UploadedFile>> {
        (**self).load_uploaded_files(tenant_id)
    }

    fn save_uploaded_files(&self, tenant_id: TenantId, files: &[UploadedFile]) -> StorageResult<()> {
        (**self).save_uploaded_files(tenant_id, files)
    }

    fn clear_tenant(&self, tenant_id: TenantId) -> StorageResult<()> {
        (**self).clear_tenant(tenant_id)
    }
}

/// Local-only strategy over a [`KeyValueStore`].
#[derive(Debug)]
pub struct LocalStore<K> {
    kv: K,
}

impl<K: KeyValueStore> LocalStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    fn read<T: DeserializeOwned + Default>(&self, tenant_id: TenantId, key: StorageKey) -> StorageResult<T> {
        match self.kv.get(tenant_id, key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(T::default()),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, tenant_id: TenantId, key: StorageKey, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value)?;
        self.kv.set(tenant_id, key, raw)
    }
}

impl<K: KeyValueStore> ProductStore for LocalStore<K> {
    fn load_products(&self, tenant_id: TenantId) -> StorageResult<Vec<ProductRecord>> {
        self.read(tenant_id, StorageKey::Products)
    }

    fn save_products(&self, tenant_id: TenantId, products: &[ProductRecord]) -> StorageResult<()> {
        self.write(tenant_id, StorageKey::Products, products)
    }

    /// Unreadable settings are replaced by defaults rather than failing the load.
    fn load_settings(&self, tenant_id: TenantId) -> StorageResult<DashboardSettings> {
        match self.read(tenant_id, StorageKey::Settings) {
            Ok(settings) => Ok(settings),
            Err(crate::StorageError::Serialization(err)) => {
                tracing::warn!(%tenant_id, "stored settings unreadable, using defaults: {err}");
                Ok(DashboardSettings::default())
            }
            Err(err) => Err(err),
        }
    }

    fn save_settings(&self, tenant_id: TenantId, settings: &DashboardSettings) -> StorageResult<()> {
        self.write(tenant_id, StorageKey::Settings, settings)
    }

    fn load_uploaded_files(&self, tenant_id: TenantId) -> StorageResult<Vec<UploadedFile>> {
        self.read(tenant_id, StorageKey::UploadedFiles)
    }

    fn save_uploaded_files(&self, tenant_id: TenantId, files: &[UploadedFile]) -> StorageResult<()> {
        self.write(tenant_id, StorageKey::UploadedFiles, files)
    }

    fn clear_tenant(&self, tenant_id: TenantId) -> StorageResult<()> {
        self.write::<[ProductRecord]>(tenant_id, StorageKey::Products, &[])?;
        self.write::<[UploadedFile]>(tenant_id, StorageKey::UploadedFiles, &[])?;
        tracing::info!(%tenant_id, "cleared local product data");
        Ok(())
    }
}

/// Remote-first strategy with the local store as safety net.
///
/// Writes always land locally first; a failing remote never fails a call,
/// it is logged and the local copy is used instead. Upload history is local
/// only.
#[derive(Debug)]
pub struct SyncedStore<K, R> {
    local: LocalStore<K>,
    remote: R,
}

impl<K: KeyValueStore, R: RemoteBackend> SyncedStore<K, R> {
    pub fn new(local: LocalStore<K>, remote: R) -> Self {
        Self { local, remote }
    }

    pub fn local(&self) -> &LocalStore<K> {
        &self.local
    }
}

impl<K: KeyValueStore, R: RemoteBackend> ProductStore for SyncedStore<K, R> {
    fn load_products(&self, tenant_id: TenantId) -> StorageResult<Vec<ProductRecord>> {
        match self.remote.fetch_products(tenant_id) {
            Ok(rows) => Ok(rows.into_iter().map(ProductRecord::from).collect()),
            Err(err) => {
                tracing::warn!(%tenant_id, "remote product fetch failed, using local copy: {err}");
                self.local.load_products(tenant_id)
            }
        }
    }

    fn save_products(&self, tenant_id: TenantId, products: &[ProductRecord]) -> StorageResult<()> {
        self.local.save_products(tenant_id, products)?;

        let rows: Vec<RemoteProductRow> = products
            .iter()
            .map(|p| RemoteProductRow::from_record(tenant_id, p))
            .collect();
        match self.remote.upsert_products(tenant_id, &rows) {
            Ok(()) => tracing::debug!(%tenant_id, rows = rows.len(), "synced products to remote"),
            Err(err) => tracing::error!(%tenant_id, "remote product sync failed: {err}"),
        }
        Ok(())
    }

    fn load_settings(&self, tenant_id: TenantId) -> StorageResult<DashboardSettings> {
        match self.remote.fetch_settings(tenant_id) {
            Ok(Some(settings)) => Ok(settings),
            Ok(None) => self.local.load_settings(tenant_id),
            Err(err) => {
                tracing::warn!(%tenant_id, "remote settings fetch failed, using local copy: {err}");
                self.local.load_settings(tenant_id)
            }
        }
    }

    fn save_settings(&self, tenant_id: TenantId, settings: &DashboardSettings) -> StorageResult<()> {
        self.local.save_settings(tenant_id, settings)?;
        if let Err(err) = self.remote.upsert_settings(tenant_id, settings) {
            tracing::error!(%tenant_id, "remote settings sync failed: {err}");
        }
        Ok(())
    }

    fn load_uploaded_files(&self, tenant_id: TenantId) -> StorageResult<Vec<UploadedFile>> {
        self.local.load_uploaded_files(tenant_id)
    }

    fn save_uploaded_files(&self, tenant_id: TenantId, files: &[UploadedFile]) -> StorageResult<()> {
        self.local.save_uploaded_files(tenant_id, files)
    }

    fn clear_tenant(&self, tenant_id: TenantId) -> StorageResult<()> {
        self.local.clear_tenant(tenant_id)?;
        match self.remote.delete_products(tenant_id) {
            Ok(()) => tracing::info!(%tenant_id, "cleared remote product data"),
            Err(err) => tracing::error!(%tenant_id, "remote clear failed: {err}"),
        }
        Ok(())
    }
}
