//! Whole-tenant backup documents ("vault" export/import).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use quantro_core::TenantId;
use quantro_metrics::{ProductRecord, lenient};

use crate::error::{StorageError, StorageResult};
use crate::settings::{DashboardSettings, UploadedFile};
use crate::store::ProductStore;

pub const BACKUP_VERSION: &str = "1.0";

/// Export stamp. Every field is informational and may be missing on import.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupMeta {
    #[serde(deserialize_with = "lenient::text")]
    pub version: String,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::text")]
    pub user: String,
}

/// Sections other than `products` read as their defaults when missing or `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    pub products: Vec<ProductRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: DashboardSettings,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uploaded_files: Vec<UploadedFile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferences: Map<String, Value>,
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub meta: BackupMeta,
    pub data: BackupData,
}

impl BackupDocument {
    /// Snapshot `data`, stamped now. An empty `user` is recorded as `Guest`.
    pub fn new(data: BackupData, user: Option<&str>) -> Self {
        let user = user.filter(|u| !u.is_empty()).unwrap_or("Guest");
        Self {
            meta: BackupMeta {
                version: BACKUP_VERSION.to_string(),
                exported_at: Some(Utc::now()),
                user: user.to_string(),
            },
            data,
        }
    }
}

/// Serialize a backup as pretty-printed JSON.
pub fn generate_backup(data: BackupData, user: Option<&str>) -> StorageResult<String> {
    let doc = BackupDocument::new(data, user);
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse and validate a backup, returning its data section.
///
/// The document must carry a non-empty `meta` and a `data.products` array;
/// anything else is [`StorageError::InvalidBackup`]. The contents of `meta`
/// are not inspected.
pub fn parse_backup(json: &str) -> StorageResult<BackupData> {
    let mut value: Value =
        serde_json::from_str(json).map_err(|e| StorageError::InvalidBackup(format!("not JSON: {e}")))?;

    let has_meta = value.get("meta").is_some_and(is_truthy);
    let has_products = value
        .get("data")
        .and_then(|d| d.get("products"))
        .is_some_and(Value::is_array);
    if !has_meta || !has_products {
        return Err(StorageError::InvalidBackup("invalid backup format".to_string()));
    }

    let data = value.get_mut("data").map(Value::take).unwrap_or_default();
    serde_json::from_value(data).map_err(|e| StorageError::InvalidBackup(e.to_string()))
}

/// Whether a JSON value counts as present (`null`, `false`, `0` and `""` do not).
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `quantro_vault_backup_YYYY-MM-DD.json`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("quantro_vault_backup_{}.json", date.format("%Y-%m-%d"))
}

/// Export everything a tenant has in `store`.
pub fn export_tenant(store: &dyn ProductStore, tenant_id: TenantId, user: Option<&str>) -> StorageResult<String> {
    let data = BackupData {
        products: store.load_products(tenant_id)?,
        settings: store.load_settings(tenant_id)?,
        uploaded_files: store.load_uploaded_files(tenant_id)?,
        preferences: Map::new(),
    };
    tracing::info!(%tenant_id, products = data.products.len(), "exported backup");
    generate_backup(data, user)
}

/// Replace a tenant's data with the contents of a backup.
///
/// The document is validated before anything is written.
pub fn restore_tenant(store: &dyn ProductStore, tenant_id: TenantId, json: &str) -> StorageResult<BackupData> {
    let data = parse_backup(json)?;
    store.save_products(tenant_id, &data.products)?;
    store.save_settings(tenant_id, &data.settings)?;
    store.save_uploaded_files(tenant_id, &data.uploaded_files)?;
    tracing::info!(%tenant_id, products = data.products.len(), "restored backup");
    Ok(data)
}
