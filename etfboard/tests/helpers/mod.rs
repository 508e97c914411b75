// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockSource;

use chrono::{DateTime, NaiveDate};
use etfboard::Dashboard;
use etfboard_core::RawBar;

/// Fixed "today" used across tests so range resolution is deterministic.
pub fn today() -> NaiveDate {
    day(2024, 3, 10)
}

/// Construct a `NaiveDate` from components for readability in tests.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A fully-populated bar at `date` with close `px`.
pub fn bar(date: NaiveDate, px: f64) -> RawBar {
    RawBar {
        date,
        open: Some(px - 0.5),
        high: Some(px + 1.0),
        low: Some(px - 1.0),
        close: Some(px),
        volume: Some(1_000_000),
    }
}

/// One bar per calendar day across the epoch-second window, close `px`.
pub fn bars_for_window(period_start: i64, period_end: i64, px: f64) -> Vec<RawBar> {
    let start = DateTime::from_timestamp(period_start, 0)
        .expect("valid epoch")
        .date_naive();
    let end = DateTime::from_timestamp(period_end, 0)
        .expect("valid epoch")
        .date_naive();
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| bar(d, px))
        .collect()
}

/// Dashboard over `source` with "today" pinned.
pub fn dashboard(source: std::sync::Arc<MockSource>) -> Dashboard {
    Dashboard::builder()
        .with_source(source)
        .today(today())
        .build()
        .expect("source registered")
}
