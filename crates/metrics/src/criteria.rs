//! Composite filtering: all active criteria applied in one pass.

use serde::{Deserialize, Serialize};

use crate::filter::{
    DateRange, MonthSelector, ValueRange, category_admits, platform_admits, status_admits,
    status_is_active,
};
use crate::record::ProductRecord;

/// Filter settings as sent by the dashboard's filter panel.
///
/// Every field is optional; a missing or empty field leaves the list untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Applied only when both bounds are set.
    pub date_range: Option<DateRange>,
    pub month: Option<MonthSelector>,
    pub platforms: Vec<String>,
    /// `"All"` and `""` are treated as absent.
    pub status: Option<String>,
    pub gmv_range: Option<ValueRange>,
    pub abc_categories: Vec<String>,
    pub health_score: Option<ValueRange>,
}

impl FilterCriteria {
    /// True when no criterion would narrow the list.
    pub fn is_empty(&self) -> bool {
        !self.date_range.is_some_and(|r| r.is_bounded())
            && self.month.is_none()
            && self.platforms.is_empty()
            && !status_is_active(self.status.as_deref())
            && self.gmv_range.is_none()
            && self.abc_categories.is_empty()
            && self.health_score.is_none()
    }

    /// Whether a single record passes every active criterion.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        self.date_range.is_none_or(|r| r.admits(record))
            && self.month.is_none_or(|m| m.admits(record))
            && platform_admits(&self.platforms, record)
            && status_admits(self.status.as_deref(), record)
            && self.gmv_range.is_none_or(|r| r.contains(record.gmv))
            && category_admits(&self.abc_categories, record)
            && self.health_score.is_none_or(|r| r.contains(record.health_score()))
    }
}

/// Apply every active criterion to a copy of `records`.
///
/// Stages run in a fixed order (date range, month, platform, status, GMV,
/// category, health score), each narrowing the working set. Because every
/// stage is a pure predicate the result is the intersection of all active
/// criteria, in input order.
pub fn apply_all_filters(records: &[ProductRecord], criteria: &FilterCriteria) -> Vec<ProductRecord> {
    let mut data = records.to_vec();

    if let Some(range) = criteria.date_range.filter(DateRange::is_bounded) {
        data.retain(|r| range.admits(r));
    }

    if let Some(month) = criteria.month {
        data.retain(|r| month.admits(r));
    }

    if !criteria.platforms.is_empty() {
        data.retain(|r| platform_admits(&criteria.platforms, r));
    }

    if status_is_active(criteria.status.as_deref()) {
        data.retain(|r| status_admits(criteria.status.as_deref(), r));
    }

    if let Some(range) = criteria.gmv_range {
        data.retain(|r| range.contains(r.gmv));
    }

    if !criteria.abc_categories.is_empty() {
        data.retain(|r| category_admits(&criteria.abc_categories, r));
    }

    if let Some(range) = criteria.health_score {
        data.retain(|r| range.contains(r.health_score()));
    }

    tracing::debug!(
        input = records.len(),
        output = data.len(),
        "applied product filters"
    );

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_by_abc_category, filter_by_platform, filter_by_status};
    use crate::test_support::{at, record, sample_records};
    use serde_json::json;

    #[test]
    fn empty_criteria_return_the_input_unchanged() {
        let records = sample_records();
        let criteria = FilterCriteria::default();

        assert!(criteria.is_empty());
        assert_eq!(apply_all_filters(&records, &criteria), records);
    }

    #[test]
    fn inactive_fields_do_not_count_as_criteria() {
        let criteria = FilterCriteria {
            date_range: Some(DateRange {
                start: Some(at(2024, 1, 1)),
                end: None,
            }),
            status: Some("All".to_string()),
            ..FilterCriteria::default()
        };

        assert!(criteria.is_empty());
        let records = sample_records();
        assert_eq!(apply_all_filters(&records, &criteria), records);
    }

    #[test]
    fn criteria_deserialize_from_filter_panel_json() {
        let criteria: FilterCriteria = serde_json::from_value(json!({
            "dateRange": { "start": "2024-01-01T00:00:00Z", "end": "2024-01-31T00:00:00Z" },
            "platforms": ["TikTok", "Shopee"],
            "status": "Active",
            "gmvRange": { "min": 100.0, "max": 2000.0 },
            "abcCategories": ["A"],
        }))
        .unwrap();

        assert_eq!(criteria.date_range, Some(DateRange::new(at(2024, 1, 1), at(2024, 1, 31))));
        assert_eq!(criteria.platforms, vec!["TikTok", "Shopee"]);
        assert_eq!(criteria.month, None);
        assert_eq!(criteria.health_score, None);
        assert!(!criteria.is_empty());
    }

    #[test]
    fn combined_criteria_intersect() {
        let records = sample_records();
        let criteria = FilterCriteria {
            platforms: vec!["TikTok".into(), "Shopee".into()],
            status: Some("Active".into()),
            abc_categories: vec!["A".into()],
            ..FilterCriteria::default()
        };

        let kept = apply_all_filters(&records, &criteria);

        let expected = filter_by_abc_category(
            &filter_by_status(&filter_by_platform(&records, &criteria.platforms), Some("Active")),
            &criteria.abc_categories,
        );
        assert_eq!(kept, expected);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn date_range_and_month_stages_apply() {
        let records = sample_records();
        let criteria = FilterCriteria {
            date_range: Some(DateRange::new(at(2024, 1, 1), at(2024, 2, 28))),
            month: Some(MonthSelector::new(2024, 1)),
            ..FilterCriteria::default()
        };

        let kept = apply_all_filters(&records, &criteria);

        let gmvs: Vec<f64> = kept.iter().map(|r| r.gmv).collect();
        assert_eq!(gmvs, vec![45.5, 0.0]);
    }

    #[test]
    fn health_window_treats_missing_score_as_zero() {
        let records = vec![record("TikTok", 1.0), record("TikTok", 2.0).health(55.0)];
        let criteria = FilterCriteria {
            health_score: Some(ValueRange::new(0.0, 10.0)),
            ..FilterCriteria::default()
        };

        let kept = apply_all_filters(&records, &criteria);

        assert_eq!(kept, vec![record("TikTok", 1.0)]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use crate::test_support::arb_records;
        use proptest::prelude::*;

        fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
            (
                prop::option::of((0i64..730, 0i64..120)),
                prop::option::of((2023i32..2025, 0u32..12)),
                prop::collection::vec(prop::sample::select(vec!["TikTok", "Shopee", "Lazada"]), 0..3),
                prop::option::of(prop::sample::select(vec!["All", "Active", "Inactive", ""])),
                prop::option::of((0.0f64..600.0, 0.0f64..600.0)),
                prop::collection::vec(prop::sample::select(vec!["A", "B", "C"]), 0..2),
                prop::option::of((0.0f64..60.0, 0.0f64..60.0)),
            )
                .prop_map(|(dates, month, platforms, status, gmv, categories, health)| FilterCriteria {
                    date_range: dates.map(|(from, len)| {
                        let start = at(2023, 1, 1) + chrono::Duration::days(from);
                        DateRange::new(start, start + chrono::Duration::days(len))
                    }),
                    month: month.map(|(y, m)| MonthSelector::new(y, m)),
                    platforms: platforms.into_iter().map(String::from).collect(),
                    status: status.map(String::from),
                    gmv_range: gmv.map(|(min, span)| ValueRange::new(min, min + span)),
                    abc_categories: categories.into_iter().map(String::from).collect(),
                    health_score: health.map(|(min, span)| ValueRange::new(min, min + span)),
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the staged result equals the per-record intersection.
            #[test]
            fn staged_filters_equal_intersection(records in arb_records(), criteria in arb_criteria()) {
                let staged = apply_all_filters(&records, &criteria);
                let direct: Vec<ProductRecord> =
                    records.iter().filter(|r| criteria.matches(r)).cloned().collect();
                prop_assert_eq!(staged, direct);
            }

            /// Property: applying the composite filter twice changes nothing.
            #[test]
            fn composite_filter_is_idempotent(records in arb_records(), criteria in arb_criteria()) {
                let once = apply_all_filters(&records, &criteria);
                prop_assert_eq!(apply_all_filters(&once, &criteria), once.clone());
            }

            /// Property: adding one more criterion never grows the result.
            #[test]
            fn adding_a_criterion_is_monotone(
                records in arb_records(),
                criteria in arb_criteria(),
                min in 0.0f64..1000.0,
            ) {
                let before = apply_all_filters(&records, &criteria).len();

                let with_gmv = FilterCriteria {
                    gmv_range: Some(match criteria.gmv_range {
                        Some(existing) => ValueRange::new(existing.min.max(min), existing.max),
                        None => ValueRange::new(min, f64::MAX),
                    }),
                    ..criteria.clone()
                };
                prop_assert!(apply_all_filters(&records, &with_gmv).len() <= before);

                let mut with_category = criteria.clone();
                with_category.abc_categories = vec!["A".to_string()];
                if criteria.abc_categories.is_empty() || criteria.abc_categories.iter().any(|c| c == "A") {
                    prop_assert!(apply_all_filters(&records, &with_category).len() <= before);
                }
            }

            /// Property: empty criteria are the identity.
            #[test]
            fn empty_criteria_are_identity(records in arb_records()) {
                prop_assert_eq!(apply_all_filters(&records, &FilterCriteria::default()), records);
            }
        }
    }
}
