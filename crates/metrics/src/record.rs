use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;
use crate::parse::parse_percent;

/// One imported product row, as produced by the importers and the storage layer.
///
/// Every field is optional on the wire. Missing or `null` numbers read as `0`,
/// missing strings read as empty, and unknown keys are kept in [`extra`] so a
/// load/save cycle never drops data written by a newer importer.
///
/// [`extra`]: ProductRecord::extra
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRecord {
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub sku: Option<String>,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub import_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::text")]
    pub platform: String,
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(deserialize_with = "lenient::number")]
    pub gmv: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub orders: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub items_sold: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub abc_category: String,
    #[serde(
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_score: Option<f64>,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub cvr: Option<String>,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub ctr: Option<String>,
    #[serde(
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductRecord {
    /// Health score, `0` when the importer did not compute one.
    pub fn health_score(&self) -> f64 {
        self.health_score.unwrap_or(0.0)
    }

    /// Conversion rate in percent (`"3.2%"` → `3.2`), `0` when absent or unparseable.
    pub fn cvr_percent(&self) -> f64 {
        self.cvr.as_deref().map(parse_percent).unwrap_or(0.0)
    }

    /// Click-through rate in percent, same convention as [`cvr_percent`](Self::cvr_percent).
    pub fn ctr_percent(&self) -> f64 {
        self.ctr.as_deref().map(parse_percent).unwrap_or(0.0)
    }

    pub fn health_band(&self) -> HealthBand {
        HealthBand::from_score(self.health_score())
    }
}

/// Traffic-light grouping of health scores used by the dashboard badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// Score of 80 or more.
    Healthy,
    /// Score from 50 up to 80.
    Watch,
    AtRisk,
}

impl HealthBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthBand::Healthy
        } else if score >= 50.0 {
            HealthBand::Watch
        } else {
            HealthBand::AtRisk
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn missing_fields_default_to_zero_and_empty() {
        let record: ProductRecord = serde_json::from_value(json!({})).unwrap();

        assert_eq!(record.gmv, 0.0);
        assert_eq!(record.orders, 0.0);
        assert_eq!(record.items_sold, 0.0);
        assert_eq!(record.platform, "");
        assert_eq!(record.import_date, None);
        assert_eq!(record.health_score(), 0.0);
        assert_eq!(record.cvr_percent(), 0.0);
    }

    #[test]
    fn null_and_string_numbers_are_tolerated() {
        let record: ProductRecord = serde_json::from_value(json!({
            "gmv": null,
            "orders": "1,204",
            "itemsSold": 7,
            "healthScore": null,
        }))
        .unwrap();

        assert_eq!(record.gmv, 0.0);
        assert_eq!(record.orders, 1204.0);
        assert_eq!(record.items_sold, 7.0);
        assert_eq!(record.health_score, None);
    }

    #[test]
    fn null_and_numeric_labels_read_as_text() {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": 981,
            "platform": null,
            "status": 1,
            "abcCategory": null,
            "gmv": 5,
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("981"));
        assert_eq!(record.platform, "");
        assert_eq!(record.status, "1");
        assert_eq!(record.abc_category, "");
        assert_eq!(record.gmv, 5.0);
    }

    #[test]
    fn one_odd_record_does_not_reject_the_list() {
        let records: Vec<ProductRecord> = serde_json::from_value(json!([
            { "platform": "TikTok", "gmv": 10 },
            { "platform": null, "status": false, "abcCategory": 3 },
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].status, "false");
        assert_eq!(records[1].abc_category, "3");
    }

    #[test]
    fn import_date_accepts_rfc3339_plain_dates_and_epoch_millis() {
        let rfc: ProductRecord =
            serde_json::from_value(json!({ "importDate": "2024-03-05T10:00:00+07:00" })).unwrap();
        let plain: ProductRecord = serde_json::from_value(json!({ "importDate": "2024-03-05" })).unwrap();
        let millis: ProductRecord = serde_json::from_value(json!({ "importDate": 0 })).unwrap();
        let junk: ProductRecord = serde_json::from_value(json!({ "importDate": "yesterday" })).unwrap();

        assert_eq!(
            rfc.import_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 3, 0, 0).unwrap())
        );
        assert_eq!(
            plain.import_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap())
        );
        assert_eq!(millis.import_date, Some(Utc.timestamp_millis_opt(0).unwrap()));
        assert_eq!(junk.import_date, None);
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let input = json!({
            "platform": "Shopee",
            "gmv": 10.5,
            "cvr": "2.5%",
            "campaignTag": "11.11",
        });

        let record: ProductRecord = serde_json::from_value(input).unwrap();
        assert_eq!(record.extra.get("campaignTag"), Some(&json!("11.11")));

        let output = serde_json::to_value(&record).unwrap();
        assert_eq!(output["campaignTag"], json!("11.11"));
        assert_eq!(output["cvr"], json!("2.5%"));
        assert_eq!(output["itemsSold"], json!(0.0));
    }

    #[test]
    fn numeric_rates_are_read_as_text() {
        let record: ProductRecord = serde_json::from_value(json!({ "ctr": 1.75 })).unwrap();
        assert_eq!(record.ctr.as_deref(), Some("1.75"));
        assert_eq!(record.ctr_percent(), 1.75);
    }

    #[test]
    fn health_bands_follow_dashboard_thresholds() {
        assert_eq!(HealthBand::from_score(80.0), HealthBand::Healthy);
        assert_eq!(HealthBand::from_score(79.9), HealthBand::Watch);
        assert_eq!(HealthBand::from_score(50.0), HealthBand::Watch);
        assert_eq!(HealthBand::from_score(49.0), HealthBand::AtRisk);
        assert_eq!(ProductRecord::default().health_band(), HealthBand::AtRisk);
    }
}
