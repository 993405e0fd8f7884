//! Remote (cloud) backend seam and the row shape it stores.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use quantro_core::TenantId;
use quantro_metrics::{ProductRecord, lenient};

use crate::error::{StorageError, StorageResult};
use crate::settings::DashboardSettings;

/// Product row as stored in the remote `products` table.
///
/// Column names differ from [`ProductRecord`]: `revenue` holds GMV and
/// `sales` holds items sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteProductRow {
    pub user_id: TenantId,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub stock: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub sales: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub platform: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub image: Option<String>,
    /// Server-managed columns (`id`, timestamps) passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RemoteProductRow {
    /// Map an app record to its remote row.
    ///
    /// `sku` falls back to the record id, price is derived as GMV per item
    /// sold (one item when none were sold), and empty platform/status become
    /// `"Unknown"`/`"Active"`.
    pub fn from_record(tenant_id: TenantId, record: &ProductRecord) -> Self {
        let items = if record.items_sold == 0.0 { 1.0 } else { record.items_sold };
        Self {
            user_id: tenant_id,
            sku: record.sku.clone().or_else(|| record.id.clone()),
            name: record.name.clone(),
            price: record.gmv / items,
            stock: record.stock.unwrap_or(0.0),
            sales: record.items_sold,
            revenue: record.gmv,
            platform: non_empty_or(&record.platform, "Unknown"),
            status: non_empty_or(&record.status, "Active"),
            image: record.image.clone(),
            extra: Map::new(),
        }
    }
}

impl From<RemoteProductRow> for ProductRecord {
    fn from(row: RemoteProductRow) -> Self {
        let mut extra = row.extra;
        let id = match extra.remove("id") {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        ProductRecord {
            id,
            sku: row.sku,
            name: row.name,
            platform: row.platform,
            status: row.status,
            gmv: row.revenue,
            items_sold: row.sales,
            price: Some(row.price),
            stock: Some(row.stock),
            image: row.image,
            extra,
            ..ProductRecord::default()
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Cloud persistence for one tenant's products and settings.
pub trait RemoteBackend: Send + Sync {
    fn fetch_products(&self, tenant_id: TenantId) -> StorageResult<Vec<RemoteProductRow>>;
    fn upsert_products(&self, tenant_id: TenantId, rows: &[RemoteProductRow]) -> StorageResult<()>;
    fn fetch_settings(&self, tenant_id: TenantId) -> StorageResult<Option<DashboardSettings>>;
    fn upsert_settings(&self, tenant_id: TenantId, settings: &DashboardSettings) -> StorageResult<()>;
    fn delete_products(&self, tenant_id: TenantId) -> StorageResult<()>;
}

impl<R> RemoteBackend for Arc<R>
where
    R: RemoteBackend + ?Sized,
{
    fn fetch_products(&self, tenant_id: TenantId) -> StorageResult<Vec<RemoteProductRow>> {
        (**self).fetch_products(tenant_id)
    }

    fn upsert_products(&self, tenant_id: TenantId, rows: &[RemoteProductRow]) -> StorageResult<()> {
        (**self).upsert_products(tenant_id, rows)
    }

    fn fetch_settings(&self, tenant_id: TenantId) -> StorageResult<Option<DashboardSettings>> {
        (**self).fetch_settings(tenant_id)
    }

    fn upsert_settings(&self, tenant_id: TenantId, settings: &DashboardSettings) -> StorageResult<()> {
        (**self).upsert_settings(tenant_id, settings)
    }

    fn delete_products(&self, tenant_id: TenantId) -> StorageResult<()> {
        (**self).delete_products(tenant_id)
    }
}

#[derive(Debug, Default)]
struct RemoteTenant {
    products: Vec<RemoteProductRow>,
    settings: Option<DashboardSettings>,
}

/// In-memory remote for tests/dev. Can be switched offline to simulate outages.
#[derive(Debug, Default)]
pub struct InMemoryRemote {
    inner: RwLock<HashMap<TenantId, RemoteTenant>>,
    offline: AtomicBool,
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> StorageResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StorageError::remote("remote backend unreachable"))
        } else {
            Ok(())
        }
    }
}

impl RemoteBackend for InMemoryRemote {
    fn fetch_products(&self, tenant_id: TenantId) -> StorageResult<Vec<RemoteProductRow>> {
        self.ensure_online()?;
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(&tenant_id).map(|t| t.products.clone()).unwrap_or_default())
    }

    /// Rows with a known SKU replace the stored row with that SKU; others append.
    fn upsert_products(&self, tenant_id: TenantId, rows: &[RemoteProductRow]) -> StorageResult<()> {
        self.ensure_online()?;
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        let tenant = map.entry(tenant_id).or_default();
        for row in rows {
            let existing = row
                .sku
                .as_ref()
                .and_then(|sku| tenant.products.iter_mut().find(|p| p.sku.as_ref() == Some(sku)));
            match existing {
                Some(slot) => *slot = row.clone(),
                None => tenant.products.push(row.clone()),
            }
        }
        Ok(())
    }

    fn fetch_settings(&self, tenant_id: TenantId) -> StorageResult<Option<DashboardSettings>> {
        self.ensure_online()?;
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(&tenant_id).and_then(|t| t.settings.clone()))
    }

    fn upsert_settings(&self, tenant_id: TenantId, settings: &DashboardSettings) -> StorageResult<()> {
        self.ensure_online()?;
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        map.entry(tenant_id).or_default().settings = Some(settings.clone());
        Ok(())
    }

    fn delete_products(&self, tenant_id: TenantId) -> StorageResult<()> {
        self.ensure_online()?;
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        if let Some(tenant) = map.get_mut(&tenant_id) {
            tenant.products.clear();
        }
        Ok(())
    }
}

#[cfg(feature = "http")]
pub use http::HttpRemote;

#[cfg(feature = "http")]
mod http {
    use super::*;

    use chrono::Utc;
    use reqwest::blocking::{Client, RequestBuilder, Response};

    /// PostgREST-style client (`{base}/rest/v1/{table}`), scoped by `user_id`.
    #[derive(Debug, Clone)]
    pub struct HttpRemote {
        client: Client,
        base_url: String,
        api_key: String,
    }

    impl HttpRemote {
        pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
            Self {
                client: Client::new(),
                base_url: base_url.into().trim_end_matches('/').to_string(),
                api_key: api_key.into(),
            }
        }

        fn table_url(&self, table: &str) -> String {
            format!("{}/rest/v1/{}", self.base_url, table)
        }

        fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
            req.header("apikey", &self.api_key).bearer_auth(&self.api_key)
        }

        fn send(&self, req: RequestBuilder) -> StorageResult<Response> {
            let resp = self
                .authorized(req)
                .send()
                .map_err(|e| StorageError::remote(format!("network error: {e}")))?;

            if !resp.status().is_success() {
                let status = resp.status().as_u16();
                let body = resp.text().unwrap_or_default();
                return Err(StorageError::remote(format!("api error {status}: {body}")));
            }
            Ok(resp)
        }

        fn tenant_filter(tenant_id: TenantId) -> [(&'static str, String); 1] {
            [("user_id", format!("eq.{tenant_id}"))]
        }
    }

    impl RemoteBackend for HttpRemote {
        fn fetch_products(&self, tenant_id: TenantId) -> StorageResult<Vec<RemoteProductRow>> {
            let req = self
                .client
                .get(self.table_url("products"))
                .query(&Self::tenant_filter(tenant_id))
                .query(&[("select", "*")]);
            self.send(req)?
                .json()
                .map_err(|e| StorageError::remote(format!("parse error: {e}")))
        }

        fn upsert_products(&self, _tenant_id: TenantId, rows: &[RemoteProductRow]) -> StorageResult<()> {
            let req = self
                .client
                .post(self.table_url("products"))
                .header("Prefer", "resolution=merge-duplicates")
                .json(rows);
            self.send(req).map(|_| ())
        }

        fn fetch_settings(&self, tenant_id: TenantId) -> StorageResult<Option<DashboardSettings>> {
            let req = self
                .client
                .get(self.table_url("settings"))
                .query(&Self::tenant_filter(tenant_id))
                .query(&[("select", "*"), ("limit", "1")]);
            let rows: Vec<DashboardSettings> = self
                .send(req)?
                .json()
                .map_err(|e| StorageError::remote(format!("parse error: {e}")))?;
            Ok(rows.into_iter().next())
        }

        fn upsert_settings(&self, tenant_id: TenantId, settings: &DashboardSettings) -> StorageResult<()> {
            let mut body = match serde_json::to_value(settings)? {
                Value::Object(map) => map,
                _ => Map::new(),
            };
            body.insert("user_id".into(), Value::String(tenant_id.to_string()));
            body.insert("updated_at".into(), Value::String(Utc::now().to_rfc3339()));

            let req = self
                .client
                .post(self.table_url("settings"))
                .header("Prefer", "resolution=merge-duplicates")
                .json(&body);
            self.send(req).map(|_| ())
        }

        fn delete_products(&self, tenant_id: TenantId) -> StorageResult<()> {
            let req = self
                .client
                .delete(self.table_url("products"))
                .query(&Self::tenant_filter(tenant_id));
            self.send(req).map(|_| ())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> ProductRecord {
        ProductRecord {
            id: Some("p-1".into()),
            name: Some("Serum".into()),
            gmv: 300.0,
            items_sold: 4.0,
            ..ProductRecord::default()
        }
    }

    #[test]
    fn record_maps_to_row_with_fallbacks() {
        let tenant = TenantId::new();

        let row = RemoteProductRow::from_record(tenant, &record());

        assert_eq!(row.user_id, tenant);
        assert_eq!(row.sku.as_deref(), Some("p-1"));
        assert_eq!(row.price, 75.0);
        assert_eq!(row.stock, 0.0);
        assert_eq!(row.sales, 4.0);
        assert_eq!(row.revenue, 300.0);
        assert_eq!(row.platform, "Unknown");
        assert_eq!(row.status, "Active");
    }

    #[test]
    fn price_uses_one_item_when_nothing_sold() {
        let unsold = ProductRecord {
            gmv: 80.0,
            platform: "Shopee".into(),
            ..ProductRecord::default()
        };

        let row = RemoteProductRow::from_record(TenantId::new(), &unsold);

        assert_eq!(row.price, 80.0);
        assert_eq!(row.platform, "Shopee");
        assert_eq!(row.sku, None);
    }

    #[test]
    fn row_maps_back_to_record_columns() {
        let tenant = TenantId::new();
        let row: RemoteProductRow = serde_json::from_value(json!({
            "id": 17,
            "user_id": tenant.to_string(),
            "sku": "SKU-9",
            "name": "Toner",
            "price": 12.5,
            "stock": 40,
            "sales": 8,
            "revenue": 100.0,
            "platform": "Lazada",
            "status": "Active",
            "image": null,
            "created_at": "2024-01-01T00:00:00Z",
        }))
        .unwrap();

        let record = ProductRecord::from(row);

        assert_eq!(record.id.as_deref(), Some("17"));
        assert_eq!(record.gmv, 100.0);
        assert_eq!(record.items_sold, 8.0);
        assert_eq!(record.price, Some(12.5));
        assert_eq!(record.stock, Some(40.0));
        assert_eq!(record.platform, "Lazada");
        assert_eq!(record.extra.get("created_at"), Some(&json!("2024-01-01T00:00:00Z")));
    }

    #[test]
    fn null_columns_read_as_zero_and_empty() {
        let rows: Vec<RemoteProductRow> = serde_json::from_value(json!([
            {
                "user_id": TenantId::new().to_string(),
                "sku": "SKU-1",
                "price": null,
                "stock": null,
                "sales": "12",
                "revenue": null,
                "platform": null,
                "status": null,
            },
            { "user_id": TenantId::new().to_string(), "sku": 55, "revenue": 10 },
        ]))
        .unwrap();

        assert_eq!(rows[0].price, 0.0);
        assert_eq!(rows[0].stock, 0.0);
        assert_eq!(rows[0].sales, 12.0);
        assert_eq!(rows[0].revenue, 0.0);
        assert_eq!(rows[0].platform, "");
        assert_eq!(rows[1].sku.as_deref(), Some("55"));
        assert_eq!(ProductRecord::from(rows[1].clone()).gmv, 10.0);
    }

    #[test]
    fn in_memory_remote_upserts_by_sku() {
        let remote = InMemoryRemote::new();
        let tenant = TenantId::new();
        let mut row = RemoteProductRow::from_record(tenant, &record());

        remote.upsert_products(tenant, &[row.clone()]).unwrap();
        row.revenue = 999.0;
        remote.upsert_products(tenant, &[row]).unwrap();

        let rows = remote.fetch_products(tenant).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].revenue, 999.0);
        assert!(remote.fetch_products(TenantId::new()).unwrap().is_empty());
    }

    #[test]
    fn offline_remote_rejects_every_call() {
        let remote = InMemoryRemote::new();
        let tenant = TenantId::new();
        remote.set_offline(true);

        assert!(matches!(remote.fetch_products(tenant), Err(StorageError::Remote(_))));
        assert!(remote.upsert_settings(tenant, &DashboardSettings::default()).is_err());
        assert!(remote.delete_products(tenant).is_err());

        remote.set_offline(false);
        assert_eq!(remote.fetch_settings(tenant).unwrap(), None);
    }
}
