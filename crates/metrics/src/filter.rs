//! Single-criterion filters over a product list.
//!
//! Every filter borrows the input and returns a fresh `Vec` in input order.
//! Empty or absent criteria are no-ops and return the input unchanged.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use quantro_core::ValueObject;

use crate::record::ProductRecord;

/// Status value the dashboard uses for "no status filter".
pub const ALL_STATUSES: &str = "All";

/// Inclusive import-date window. Only bounded when both ends are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, deserialize_with = "crate::lenient::timestamp")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::lenient::timestamp")]
    pub end: Option<DateTime<Utc>>,
}

impl ValueObject for DateRange {}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Whether the record passes this range. An unbounded range admits everything;
    /// a bounded one never admits a record without an import date.
    pub fn admits(&self, record: &ProductRecord) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => record
                .import_date
                .is_some_and(|date| date >= start && date <= end),
            _ => true,
        }
    }
}

/// Calendar month selector. `month` is zero-based (0 = January) and evaluated in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSelector {
    pub year: i32,
    pub month: u32,
}

impl ValueObject for MonthSelector {}

impl MonthSelector {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn admits(&self, record: &ProductRecord) -> bool {
        record
            .import_date
            .is_some_and(|date| date.year() == self.year && date.month0() == self.month)
    }
}

/// Inclusive numeric bounds, used for GMV and health score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueObject for ValueRange {}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub(crate) fn platform_admits<S: AsRef<str>>(platforms: &[S], record: &ProductRecord) -> bool {
    platforms.is_empty() || platforms.iter().any(|p| p.as_ref() == record.platform)
}

pub(crate) fn category_admits<S: AsRef<str>>(categories: &[S], record: &ProductRecord) -> bool {
    categories.is_empty() || categories.iter().any(|c| c.as_ref() == record.abc_category)
}

pub(crate) fn status_is_active(status: Option<&str>) -> bool {
    matches!(status, Some(s) if !s.is_empty() && s != ALL_STATUSES)
}

pub(crate) fn status_admits(status: Option<&str>, record: &ProductRecord) -> bool {
    match status {
        Some(s) if status_is_active(Some(s)) => record.status == s,
        _ => true,
    }
}

fn keep(records: &[ProductRecord], pred: impl Fn(&ProductRecord) -> bool) -> Vec<ProductRecord> {
    records.iter().filter(|r| pred(r)).cloned().collect()
}

/// Records imported within `[start, end]`. No-op unless both bounds are given.
pub fn filter_by_date_range(
    records: &[ProductRecord],
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Vec<ProductRecord> {
    let range = DateRange { start, end };
    keep(records, |r| range.admits(r))
}

/// Records imported in the given year and zero-based month.
pub fn filter_by_month(records: &[ProductRecord], year: i32, month: u32) -> Vec<ProductRecord> {
    let selector = MonthSelector::new(year, month);
    keep(records, |r| selector.admits(r))
}

pub fn filter_by_platform<S: AsRef<str>>(records: &[ProductRecord], platforms: &[S]) -> Vec<ProductRecord> {
    keep(records, |r| platform_admits(platforms, r))
}

/// Records whose status equals `status`. `None`, `""` and `"All"` keep everything.
pub fn filter_by_status(records: &[ProductRecord], status: Option<&str>) -> Vec<ProductRecord> {
    keep(records, |r| status_admits(status, r))
}

pub fn filter_by_gmv_range(records: &[ProductRecord], min: f64, max: f64) -> Vec<ProductRecord> {
    let range = ValueRange::new(min, max);
    keep(records, |r| range.contains(r.gmv))
}

pub fn filter_by_abc_category<S: AsRef<str>>(
    records: &[ProductRecord],
    categories: &[S],
) -> Vec<ProductRecord> {
    keep(records, |r| category_admits(categories, r))
}

/// Records whose health score (absent = 0) lies in `[min, max]`.
pub fn filter_by_health_score(records: &[ProductRecord], min: f64, max: f64) -> Vec<ProductRecord> {
    let range = ValueRange::new(min, max);
    keep(records, |r| range.contains(r.health_score()))
}
