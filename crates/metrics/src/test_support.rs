//! Record builders and proptest strategies shared by the unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use crate::record::ProductRecord;

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn record(platform: &str, gmv: f64) -> ProductRecord {
    ProductRecord {
        platform: platform.to_string(),
        gmv,
        ..ProductRecord::default()
    }
}

impl ProductRecord {
    pub fn imported(mut self, date: DateTime<Utc>) -> Self {
        self.import_date = Some(date);
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.abc_category = category.to_string();
        self
    }

    pub fn health(mut self, score: f64) -> Self {
        self.health_score = Some(score);
        self
    }

    pub fn sales(mut self, orders: f64, items_sold: f64) -> Self {
        self.orders = orders;
        self.items_sold = items_sold;
        self
    }

    pub fn rates(mut self, cvr: &str, ctr: &str) -> Self {
        self.cvr = Some(cvr.to_string());
        self.ctr = Some(ctr.to_string());
        self
    }
}

pub fn sample_records() -> Vec<ProductRecord> {
    vec![
        record("TikTok", 1200.0)
            .imported(at(2024, 1, 5))
            .status("Active")
            .category("A")
            .health(92.0)
            .sales(40.0, 52.0)
            .rates("4.1%", "2.0%"),
        record("Shopee", 310.0)
            .imported(at(2024, 1, 20))
            .status("Active")
            .category("B")
            .health(61.0)
            .sales(12.0, 12.0)
            .rates("2.5%", "1.1%"),
        record("Lazada", 45.5)
            .imported(at(2024, 2, 3))
            .status("Inactive")
            .category("C")
            .sales(2.0, 3.0),
        record("TikTok", 0.0)
            .imported(at(2024, 2, 14))
            .status("Inactive")
            .category("C")
            .health(12.0)
            .rates("n/a", ""),
        record("Shopee", 870.25)
            .status("Active")
            .category("A")
            .health(80.0)
            .sales(30.0, 41.0)
            .rates("3.3%", "1.9%"),
    ]
}

prop_compose! {
    pub fn arb_record()(
        platform in prop::sample::select(vec!["TikTok", "Shopee", "Lazada", "Amazon"]),
        status in prop::sample::select(vec!["Active", "Inactive", "Draft"]),
        category in prop::sample::select(vec!["A", "B", "C"]),
        gmv in 0.0f64..1000.0,
        orders in 0u32..50,
        items in 0u32..80,
        health in prop::option::of(0.0f64..100.0),
        cvr in prop::option::of(0.0f64..10.0),
        day_offset in prop::option::of(0i64..730),
    ) -> ProductRecord {
        ProductRecord {
            import_date: day_offset.map(|d| at(2023, 1, 1) + Duration::days(d)),
            platform: platform.to_string(),
            status: status.to_string(),
            gmv,
            orders: f64::from(orders),
            items_sold: f64::from(items),
            abc_category: category.to_string(),
            health_score: health,
            cvr: cvr.map(|v| format!("{v:.1}%")),
            ..ProductRecord::default()
        }
    }
}

pub fn arb_records() -> impl Strategy<Value = Vec<ProductRecord>> {
    prop::collection::vec(arb_record(), 0..40)
}
