//! Deterministic daily bars, one per weekday in the requested window.
//!
//! Prices are a pure function of symbol and date: a per-symbol base level
//! plus a slow drift and a small day-of-month wobble. Weekends produce no
//! bars, like a real exchange feed.

use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use etfboard_core::{Etf, RawBar};

const fn base_price(etf: Etf) -> f64 {
    match etf {
        Etf::Spy => 470.0,
        Etf::Iwm => 200.0,
        Etf::Mdy => 520.0,
        Etf::Qqq => 400.0,
        Etf::Shy => 82.0,
        Etf::Tlt => 95.0,
        Etf::Jnk => 36.0,
    }
}

const fn daily_drift(etf: Etf) -> f64 {
    match etf {
        Etf::Spy => 0.18,
        Etf::Iwm => 0.05,
        Etf::Mdy => 0.15,
        Etf::Qqq => 0.22,
        Etf::Shy => 0.002,
        Etf::Tlt => -0.004,
        Etf::Jnk => 0.001,
    }
}

fn close_on(etf: Etf, date: NaiveDate) -> f64 {
    // Anchor the drift so a given (symbol, date) always prices the same.
    let anchor = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid anchor");
    let days = (date - anchor).num_days() as f64;
    let wobble = f64::from(date.day() % 7) * 0.1;
    base_price(etf) + daily_drift(etf) * days + wobble
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub(crate) fn bars(etf: Etf, period_start: i64, period_end: i64) -> Vec<RawBar> {
    let Some(start) = DateTime::from_timestamp(period_start, 0) else {
        return Vec::new();
    };
    let Some(end) = DateTime::from_timestamp(period_end, 0) else {
        return Vec::new();
    };
    let end = end.date_naive();

    start
        .date_naive()
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| !is_weekend(*date))
        .map(|date| {
            let close = close_on(etf, date);
            RawBar {
                date,
                open: Some(close - 0.6),
                high: Some(close + 1.2),
                low: Some(close - 1.4),
                close: Some(close),
                volume: Some(40_000_000 + u64::from(date.day()) * 100_000),
            }
        })
        .collect()
}
