//! Persistence for the product dashboard.
//!
//! Everything is scoped by [`TenantId`](quantro_core::TenantId). Callers work
//! against the [`ProductStore`] strategy; [`StorageConfig`] picks the
//! implementation from the environment.

pub mod backup;
pub mod config;
pub mod error;
pub mod kv;
pub mod remote;
pub mod settings;
pub mod store;

pub use backup::{
    BACKUP_VERSION, BackupData, BackupDocument, BackupMeta, backup_file_name, export_tenant, generate_backup,
    parse_backup, restore_tenant,
};
pub use config::{RemoteConfig, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, StorageKey, default_data_dir};
#[cfg(feature = "http")]
pub use remote::HttpRemote;
pub use remote::{InMemoryRemote, RemoteBackend, RemoteProductRow};
pub use settings::{DashboardSettings, UploadedFile};
pub use store::{LocalStore, ProductStore, SyncedStore};
