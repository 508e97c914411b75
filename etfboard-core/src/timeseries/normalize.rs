//! Raw-bar cleaning: the falsy-to-absent price rule and unusable-day drops.

use crate::{Quote, RawBar};

/// Map a possibly-degenerate provider price into an optional value.
///
/// Missing, exactly-zero, and NaN prices all become absent. The upstream
/// feed does not distinguish a zero price from a missing one, so the
/// conflation lives here, in one place, should that contract ever change.
#[must_use]
pub fn opt_price(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Convert raw provider bars into canonical quotes.
///
/// Total over degenerate input: malformed numeric fields become absent
/// rather than errors. A bar with neither a low nor a high after cleaning
/// is unusable and is dropped. `adj_close` mirrors the cleaned close — the
/// feed carries no true adjusted series.
#[must_use]
pub fn normalize(bars: Vec<RawBar>) -> Vec<Quote> {
    bars.into_iter()
        .filter_map(|bar| {
            let low = opt_price(bar.low);
            let high = opt_price(bar.high);
            if low.is_none() && high.is_none() {
                return None;
            }
            let close = opt_price(bar.close);
            Some(Quote {
                date: bar.date,
                open: opt_price(bar.open),
                high,
                low,
                close,
                volume: bar.volume.filter(|v| *v != 0),
                adj_close: close,
            })
        })
        .collect()
}
