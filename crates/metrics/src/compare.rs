//! Period-over-period and platform-by-platform aggregates.

use serde::{Serialize, Serializer};

use crate::filter::{DateRange, platform_admits};
use crate::record::ProductRecord;

/// Platforms compared when the caller does not name any.
pub const DEFAULT_PLATFORMS: [&str; 3] = ["TikTok", "Lazada", "Shopee"];

/// Aggregates for one date-range partition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMetrics {
    #[serde(rename = "totalGMV")]
    pub total_gmv: f64,
    pub total_orders: f64,
    pub total_items: f64,
    pub count: usize,
    #[serde(rename = "avgCVR")]
    pub avg_cvr: f64,
}

/// Change from the first period to the second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSummary {
    /// Percent; see [`growth_percent`] for the zero-baseline rule.
    pub gmv_growth: f64,
    pub order_growth: f64,
    pub items_growth: f64,
    /// Difference in average CVR, in percentage points.
    pub cvr_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MetricsComparison {
    pub period1: PeriodMetrics,
    pub period2: PeriodMetrics,
    pub comparison: GrowthSummary,
}

/// Aggregates for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetrics {
    #[serde(rename = "totalGMV")]
    pub total_gmv: f64,
    pub total_orders: f64,
    pub total_items: f64,
    pub count: usize,
    #[serde(rename = "avgGMVPerProduct")]
    pub avg_gmv_per_product: f64,
    #[serde(rename = "avgCVR")]
    pub avg_cvr: f64,
    #[serde(rename = "avgCTR")]
    pub avg_ctr: f64,
}

/// Per-platform metrics in the order the platforms were requested.
///
/// Serializes as a JSON object keyed by platform name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlatformComparison {
    entries: Vec<(String, PlatformMetrics)>,
}

impl PlatformComparison {
    pub fn get(&self, platform: &str) -> Option<&PlatformMetrics> {
        self.entries
            .iter()
            .find(|(name, _)| name == platform)
            .map(|(_, metrics)| metrics)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlatformMetrics)> {
        self.entries.iter().map(|(name, metrics)| (name.as_str(), metrics))
    }

    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PlatformComparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, metrics)| (name, metrics)))
    }
}

/// Running sums over a partition.
#[derive(Debug, Default)]
struct Totals {
    gmv: f64,
    orders: f64,
    items: f64,
    count: usize,
    cvr: f64,
    ctr: f64,
}

impl Totals {
    fn collect<'a>(records: impl IntoIterator<Item = &'a ProductRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut acc, r| {
            acc.gmv += r.gmv;
            acc.orders += r.orders;
            acc.items += r.items_sold;
            acc.count += 1;
            acc.cvr += r.cvr_percent();
            acc.ctr += r.ctr_percent();
            acc
        })
    }

    fn mean(&self, sum: f64) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            sum / self.count as f64
        }
    }
}

impl From<Totals> for PeriodMetrics {
    fn from(t: Totals) -> Self {
        Self {
            total_gmv: t.gmv,
            total_orders: t.orders,
            total_items: t.items,
            count: t.count,
            avg_cvr: t.mean(t.cvr),
        }
    }
}

impl From<Totals> for PlatformMetrics {
    fn from(t: Totals) -> Self {
        Self {
            total_gmv: t.gmv,
            total_orders: t.orders,
            total_items: t.items,
            count: t.count,
            avg_gmv_per_product: t.mean(t.gmv),
            avg_cvr: t.mean(t.cvr),
            avg_ctr: t.mean(t.ctr),
        }
    }
}

/// Percentage change from `baseline` to `current`.
///
/// A zero baseline is replaced by `1`: growth from nothing reads as
/// `current * 100`, never infinity. Figures against a zero baseline are
/// therefore inflated, not undefined.
pub fn growth_percent(baseline: f64, current: f64) -> f64 {
    let denominator = if baseline == 0.0 { 1.0 } else { baseline };
    (current - baseline) / denominator * 100.0
}

/// Compare two date windows of the same product list.
///
/// The windows may overlap; a record inside both counts in both periods. A
/// window missing either bound covers the whole list.
pub fn compare_metrics(
    records: &[ProductRecord],
    range1: &DateRange,
    range2: &DateRange,
) -> MetricsComparison {
    let period1 = PeriodMetrics::from(Totals::collect(records.iter().filter(|r| range1.admits(r))));
    let period2 = PeriodMetrics::from(Totals::collect(records.iter().filter(|r| range2.admits(r))));

    MetricsComparison {
        period1,
        period2,
        comparison: GrowthSummary {
            gmv_growth: growth_percent(period1.total_gmv, period2.total_gmv),
            order_growth: growth_percent(period1.total_orders, period2.total_orders),
            items_growth: growth_percent(period1.total_items, period2.total_items),
            cvr_change: period2.avg_cvr - period1.avg_cvr,
        },
    }
}

/// Aggregate each named platform separately. A platform with no records
/// reports zero everywhere; a repeated name is reported once.
pub fn compare_platforms<S: AsRef<str>>(records: &[ProductRecord], platforms: &[S]) -> PlatformComparison {
    let mut entries: Vec<(String, PlatformMetrics)> = Vec::with_capacity(platforms.len());

    for platform in platforms {
        let platform = platform.as_ref();
        if entries.iter().any(|(name, _)| name == platform) {
            continue;
        }
        let only = [platform];
        let totals = Totals::collect(records.iter().filter(|r| platform_admits(&only, r)));
        entries.push((platform.to_string(), PlatformMetrics::from(totals)));
    }

    PlatformComparison { entries }
}

/// [`compare_platforms`] over [`DEFAULT_PLATFORMS`].
pub fn compare_default_platforms(records: &[ProductRecord]) -> PlatformComparison {
    compare_platforms(records, &DEFAULT_PLATFORMS)
}
