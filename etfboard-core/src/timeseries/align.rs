//! Strict inner join of per-symbol quote series on calendar date.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::{AlignedRow, Etf, Quote};

/// Merge per-symbol series into dense rows keyed by calendar date.
///
/// Every date appearing in any series is considered; a row is emitted only
/// when every tracked symbol carries a present, finite adjusted close for
/// that date. Incomplete dates are dropped entirely, never null-filled.
/// Output dates ascend strictly with no duplicates; calendar gaps
/// (weekends, holidays, provider outages) simply do not appear, so
/// consumers must not assume fixed-interval spacing.
///
/// Each symbol's series is indexed by date up front (first quote per date
/// wins on duplicates), making the join O(dates × symbols).
#[must_use]
pub fn align(series: &[(Etf, Vec<Quote>)]) -> Vec<AlignedRow> {
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut by_symbol: BTreeMap<Etf, BTreeMap<NaiveDate, f64>> = BTreeMap::new();

    for (etf, quotes) in series {
        let index = by_symbol.entry(*etf).or_default();
        for quote in quotes {
            dates.insert(quote.date);
            if let Some(px) = quote.adj_close {
                index.entry(quote.date).or_insert(px);
            }
        }
    }

    let mut rows = Vec::with_capacity(dates.len());
    'dates: for date in dates {
        let mut closes = [0.0_f64; Etf::COUNT];
        for etf in Etf::ALL {
            match by_symbol.get(&etf).and_then(|index| index.get(&date)) {
                Some(px) if px.is_finite() => closes[etf.index()] = *px,
                _ => continue 'dates,
            }
        }
        rows.push(AlignedRow { date, closes });
    }
    rows
}
