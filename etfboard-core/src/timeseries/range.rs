//! Reconciliation of query parameters into a concrete date window.

use chrono::{Duration, NaiveDate};

use crate::{Error, RangeQuery, ResolvedRange};

/// Bounds applied while resolving a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeLimits {
    /// Widest allowed window, in calendar days.
    pub max_span_days: i64,
    /// Window applied when the query carries no range signal at all.
    pub default_lookback_days: i64,
}

impl Default for RangeLimits {
    fn default() -> Self {
        Self {
            // Two years of daily data keeps upstream requests bounded.
            max_span_days: 730,
            default_lookback_days: 90,
        }
    }
}

/// Resolve query parameters into a concrete `[start, end]` window.
///
/// Reconciliation order, in priority:
/// 1. `end` is the supplied end date when it parses, otherwise today.
/// 2. A supplied lookback wins even alongside a custom start date; it is
///    clamped to `[1, max_span_days]` and counted back from `end`.
/// 3. Otherwise a parseable custom start date is used; a span beyond the
///    ceiling is clamped and an inverted range is rejected outright.
/// 4. Otherwise the default lookback applies.
///
/// Malformed date strings are treated as absent and fall through to the
/// next rule.
///
/// # Errors
/// [`Error::InvalidRange`] only when an explicitly supplied start date
/// falls after the resolved end date.
pub fn resolve(
    query: &RangeQuery,
    today: NaiveDate,
    limits: &RangeLimits,
) -> Result<ResolvedRange, Error> {
    let end = query
        .end_date
        .as_deref()
        .and_then(parse_date)
        .unwrap_or(today);

    if let Some(lookback) = query.lookback {
        let lookback = lookback.clamp(1, limits.max_span_days);
        return Ok(ResolvedRange {
            start: end - Duration::days(lookback),
            end,
        });
    }

    if let Some(start) = query.start_date.as_deref().and_then(parse_date) {
        let span = (end - start).num_days();
        if span < 0 {
            return Err(Error::invalid_range(format!(
                "start date {start} is after end date {end}"
            )));
        }
        let start = if span > limits.max_span_days {
            end - Duration::days(limits.max_span_days)
        } else {
            start
        };
        return Ok(ResolvedRange { start, end });
    }

    Ok(ResolvedRange {
        start: end - Duration::days(limits.default_lookback_days),
        end,
    })
}

/// Parse an ISO `YYYY-MM-DD` date; anything malformed is absent.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
