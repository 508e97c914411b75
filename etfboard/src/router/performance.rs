use std::sync::Arc;

use etfboard_core::{
    Error, Etf, PerformanceReport, Quote, RangeMetadata, RangeQuery, align, normalize, resolve,
};

use crate::Dashboard;

impl Dashboard {
    /// Resolve the query, fetch every tracked symbol concurrently, and build
    /// the aligned performance report.
    ///
    /// Behavior:
    /// - One fetch per tracked symbol, joined all-or-nothing. The first
    ///   failure cancels the remaining in-flight fetches and aborts the
    ///   request; a partial symbol subset is never returned.
    /// - Connector failures whose message reads like provider throttling are
    ///   reclassified as [`Error::RateLimited`], so text-only providers
    ///   still surface a 429-class outcome.
    /// - `metadata.total_days` counts the complete rows actually emitted,
    ///   which is usually fewer than the calendar span (weekends, holidays).
    ///
    /// # Errors
    /// - [`Error::InvalidRange`] for contradictory date input.
    /// - [`Error::RateLimited`] when a provider throttled a symbol fetch.
    /// - [`Error::Connector`] when any symbol fetch failed otherwise.
    pub async fn performance(&self, query: &RangeQuery) -> Result<PerformanceReport, Error> {
        let range = resolve(query, self.today(), &self.cfg.limits)?;
        let (period_start, period_end) = (range.period_start(), range.period_end());
        tracing::debug!(
            source = self.source.name(),
            start = %range.start,
            end = %range.end,
            "resolved query window"
        );

        let tasks = Etf::ALL.iter().map(|&etf| {
            let source = Arc::clone(&self.source);
            async move {
                let bars = source
                    .daily_quotes(etf, period_start, period_end)
                    .await
                    .map_err(reclassify_rate_limit)?;
                tracing::debug!(symbol = %etf, bars = bars.len(), "fetched daily bars");
                Ok::<(Etf, Vec<Quote>), Error>((etf, normalize(bars)))
            }
        });
        let series = futures::future::try_join_all(tasks).await?;

        let data = align(&series);
        tracing::debug!(rows = data.len(), "aligned symbol series");
        Ok(PerformanceReport {
            metadata: RangeMetadata {
                start_date: range.start,
                end_date: range.end,
                total_days: data.len(),
            },
            data,
        })
    }
}

/// Reclassify a connector failure that only signals throttling in its text.
fn reclassify_rate_limit(err: Error) -> Error {
    match err {
        Error::Connector {
            connector,
            symbol,
            msg,
        } if looks_rate_limited(&msg) => Error::RateLimited {
            connector,
            msg: format!("{symbol}: {msg}"),
        },
        other => other,
    }
}

fn looks_rate_limited(msg: &str) -> bool {
    let msg = msg.to_ascii_lowercase();
    msg.contains("rate limit") || msg.contains("too many requests")
}
