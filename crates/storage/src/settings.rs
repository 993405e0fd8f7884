//! Per-tenant dashboard settings and upload history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use quantro_i18n::Language;
use quantro_metrics::{DEFAULT_CURRENCY_SYMBOL, ProductRecord};

/// Dashboard preferences and smart-assistant thresholds.
///
/// Unknown keys are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSettings {
    pub currency: String,
    pub user_name: String,
    pub language: String,
    pub high_view_threshold: f64,
    pub low_cvr_threshold: f64,
    pub hidden_gem_cvr: f64,
    pub dead_stock_threshold: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY_SYMBOL.to_string(),
            user_name: "Manager".to_string(),
            language: Language::En.code().to_string(),
            high_view_threshold: 500.0,
            low_cvr_threshold: 0.5,
            hidden_gem_cvr: 3.0,
            dead_stock_threshold: 0.0,
            extra: Map::new(),
        }
    }
}

impl DashboardSettings {
    /// UI language; unknown codes read as English.
    pub fn language(&self) -> Language {
        Language::from_code_or_default(&self.language)
    }
}

/// One imported spreadsheet, as listed on the data-sources page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadedFile {
    pub name: String,
    pub date: Option<DateTime<Utc>>,
    pub platform: String,
    pub currency: Option<String>,
    pub status: String,
    pub records_imported: usize,
    pub imported_data: Vec<ProductRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
