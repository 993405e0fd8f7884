//! Product metrics filtering and comparison.
//!
//! Pure functions over an in-memory list of [`ProductRecord`]s (no IO, no
//! shared state). Filters return new lists in input order; comparisons
//! return aggregate values. Nothing here fails: missing numbers count as `0`
//! and unparseable rates as `0%`.

pub mod compare;
pub mod criteria;
pub mod filter;
pub mod lenient;
pub mod parse;
pub mod record;

#[cfg(test)]
mod test_support;

pub use compare::{
    DEFAULT_PLATFORMS, GrowthSummary, MetricsComparison, PeriodMetrics, PlatformComparison,
    PlatformMetrics, compare_default_platforms, compare_metrics, compare_platforms, growth_percent,
};
pub use criteria::{FilterCriteria, apply_all_filters};
pub use filter::{
    ALL_STATUSES, DateRange, MonthSelector, ValueRange, filter_by_abc_category,
    filter_by_date_range, filter_by_gmv_range, filter_by_health_score, filter_by_month,
    filter_by_platform, filter_by_status,
};
pub use parse::{DEFAULT_CURRENCY_SYMBOL, format_currency, parse_currency, parse_integer, parse_percent};
pub use record::{HealthBand, ProductRecord};
