//! Domain data structures shared across the workspace.
//!
//! The tracked instrument set is closed and ordered at compile time; wire
//! shapes (aligned rows, the performance report) serialize with the
//! lower-case symbol keys the dashboard consumes.

use core::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::timeseries::change;

/// The tracked exchange-traded funds, in canonical display order.
///
/// The set is closed: every aligned row carries exactly one value per
/// variant, and the variant order fixes the column order of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Etf {
    /// SPDR S&P 500.
    Spy,
    /// iShares Russell 2000.
    Iwm,
    /// SPDR S&P MidCap 400.
    Mdy,
    /// Invesco QQQ (Nasdaq-100).
    Qqq,
    /// iShares 1-3 Year Treasury.
    Shy,
    /// iShares 20+ Year Treasury.
    Tlt,
    /// SPDR High Yield Bond.
    Jnk,
}

impl Etf {
    /// Number of tracked symbols.
    pub const COUNT: usize = 7;

    /// Every tracked symbol, in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Spy,
        Self::Iwm,
        Self::Mdy,
        Self::Qqq,
        Self::Shy,
        Self::Tlt,
        Self::Jnk,
    ];

    /// Upper-case ticker used when talking to providers.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spy => "SPY",
            Self::Iwm => "IWM",
            Self::Mdy => "MDY",
            Self::Qqq => "QQQ",
            Self::Shy => "SHY",
            Self::Tlt => "TLT",
            Self::Jnk => "JNK",
        }
    }

    /// Lower-case key under which this symbol appears in output rows.
    #[must_use]
    pub const fn column_key(self) -> &'static str {
        match self {
            Self::Spy => "spy",
            Self::Iwm => "iwm",
            Self::Mdy => "mdy",
            Self::Qqq => "qqq",
            Self::Shy => "shy",
            Self::Tlt => "tlt",
            Self::Jnk => "jnk",
        }
    }

    /// Key under which this symbol's percent change appears in change rows.
    #[must_use]
    pub const fn change_key(self) -> &'static str {
        match self {
            Self::Spy => "spyChange",
            Self::Iwm => "iwmChange",
            Self::Mdy => "mdyChange",
            Self::Qqq => "qqqChange",
            Self::Shy => "shyChange",
            Self::Tlt => "tltChange",
            Self::Jnk => "jnkChange",
        }
    }

    /// Position of this symbol in [`Etf::ALL`] and in per-row value arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Etf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Inbound query parameters, prior to range resolution.
///
/// All fields are optional and arrive as raw strings where the wire carries
/// strings; malformed dates are treated as absent during resolution, never
/// as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeQuery {
    /// Trailing window in calendar days, counted back from the end date.
    pub lookback: Option<i64>,
    /// Explicit window start, ISO `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Explicit window end, ISO `YYYY-MM-DD`.
    pub end_date: Option<String>,
}

/// A fully resolved query window.
///
/// Invariants hold by construction: `start <= end` and the span never
/// exceeds the configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    /// First calendar day of the window, inclusive.
    pub start: NaiveDate,
    /// Last calendar day of the window, inclusive.
    pub end: NaiveDate,
}

impl ResolvedRange {
    /// Window start as epoch seconds at midnight UTC, for the connector contract.
    #[must_use]
    pub fn period_start(&self) -> i64 {
        epoch_seconds(self.start)
    }

    /// Window end as epoch seconds at midnight UTC, for the connector contract.
    #[must_use]
    pub fn period_end(&self) -> i64 {
        epoch_seconds(self.end)
    }
}

fn epoch_seconds(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// One raw per-day record as returned by a provider.
///
/// Numeric fields are optional at the wire level; no cleaning has happened
/// yet. See [`crate::normalize`] for the conversion into [`Quote`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBar {
    /// Calendar date of the bar.
    pub date: NaiveDate,
    /// Opening price, if the provider reported one.
    pub open: Option<f64>,
    /// Daily high, if the provider reported one.
    pub high: Option<f64>,
    /// Daily low, if the provider reported one.
    pub low: Option<f64>,
    /// Closing price, if the provider reported one.
    pub close: Option<f64>,
    /// Traded volume, if the provider reported one.
    pub volume: Option<u64>,
}

/// A normalized daily quote for one symbol.
///
/// Produced by [`crate::normalize`]; a quote exists only if at least one of
/// `low`/`high` survived normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Calendar date of the quote.
    pub date: NaiveDate,
    /// Opening price.
    pub open: Option<f64>,
    /// Daily high.
    pub high: Option<f64>,
    /// Daily low.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Traded volume.
    pub volume: Option<u64>,
    /// Canonical per-day price used downstream. The upstream feed carries no
    /// true adjusted close, so this mirrors `close`.
    pub adj_close: Option<f64>,
}

/// One calendar date with a close for every tracked symbol.
///
/// Complete by construction: [`crate::align`] emits a row only when every
/// symbol has a present, finite value. Serializes as
/// `{ "date": "YYYY-MM-DD", "spy": n, ..., "jnk": n }`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow {
    /// Calendar date of the row.
    pub date: NaiveDate,
    /// Per-symbol closes, indexed by [`Etf::index`].
    pub closes: [f64; Etf::COUNT],
}

impl AlignedRow {
    /// Close for one symbol.
    #[must_use]
    pub const fn close(&self, etf: Etf) -> f64 {
        self.closes[etf.index()]
    }
}

impl Serialize for AlignedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + Etf::COUNT))?;
        map.serialize_entry("date", &self.date)?;
        for etf in Etf::ALL {
            map.serialize_entry(etf.column_key(), &self.close(etf))?;
        }
        map.end()
    }
}

/// An [`AlignedRow`] extended with percent change since the first row.
///
/// Serializes with the row's close under each symbol key and the change
/// under `<key>Change`, e.g. `"spy": 512.3, "spyChange": 1.8`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRow {
    /// Calendar date of the row.
    pub date: NaiveDate,
    /// Per-symbol closes, indexed by [`Etf::index`].
    pub closes: [f64; Etf::COUNT],
    /// Per-symbol percent change vs. the first row, indexed by [`Etf::index`].
    pub changes: [f64; Etf::COUNT],
}

impl ChangeRow {
    /// Close for one symbol.
    #[must_use]
    pub const fn close(&self, etf: Etf) -> f64 {
        self.closes[etf.index()]
    }

    /// Percent change for one symbol relative to the first row.
    #[must_use]
    pub const fn change(&self, etf: Etf) -> f64 {
        self.changes[etf.index()]
    }
}

impl Serialize for ChangeRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + 2 * Etf::COUNT))?;
        map.serialize_entry("date", &self.date)?;
        for etf in Etf::ALL {
            map.serialize_entry(etf.column_key(), &self.close(etf))?;
            map.serialize_entry(etf.change_key(), &self.change(etf))?;
        }
        map.end()
    }
}

/// Summary of the window an aligned table was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeMetadata {
    /// Resolved window start.
    pub start_date: NaiveDate,
    /// Resolved window end.
    pub end_date: NaiveDate,
    /// Number of complete rows in the table.
    pub total_days: usize,
}

/// The full response payload: aligned rows plus window metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    /// Dense, complete rows in ascending date order.
    pub data: Vec<AlignedRow>,
    /// Window summary.
    pub metadata: RangeMetadata,
}

impl PerformanceReport {
    /// Derive the percent-change view of this report's rows.
    #[must_use]
    pub fn with_changes(&self) -> Vec<ChangeRow> {
        change::with_changes(&self.data)
    }
}
