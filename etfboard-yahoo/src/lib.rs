//! etfboard-yahoo
//!
//! `QuoteSource` implementation backed by the Yahoo Finance v8 chart
//! endpoint. Fetches daily candles for one symbol per request and maps
//! provider failures onto the workspace error taxonomy, with HTTP 429 and
//! throttling payloads surfaced as typed rate-limit errors.
#![warn(missing_docs)]

mod chart;

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use etfboard_core::{Error, Etf, QuoteSource, RawBar};
use reqwest::StatusCode;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const CONNECTOR: &str = "yahoo";

// Yahoo rejects requests without a browser-looking user agent.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36";

/// Price source that fetches daily bars from the Yahoo chart API.
pub struct YahooSource {
    client: reqwest::Client,
    base_url: String,
}

impl YahooSource {
    /// Create a source against the public Yahoo endpoint.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a source against a custom endpoint. Tests point this at a
    /// local mock server.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| Error::Other(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }
}

#[async_trait]
impl QuoteSource for YahooSource {
    fn name(&self) -> &'static str {
        CONNECTOR
    }

    async fn daily_quotes(
        &self,
        etf: Etf,
        period_start: i64,
        period_end: i64,
    ) -> Result<Vec<RawBar>, Error> {
        let symbol = etf.symbol();
        let url = format!("{}/v8/finance/chart/{symbol}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", period_start.to_string().as_str()),
                ("period2", period_end.to_string().as_str()),
                ("interval", "1d"),
            ])
            .send()
            .await
            .map_err(|e| Error::connector(CONNECTOR, symbol, e.to_string()))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::rate_limited(CONNECTOR, format!("{symbol}: http 429")));
        }
        if !response.status().is_success() {
            return Err(Error::connector(
                CONNECTOR,
                symbol,
                format!("http {}", response.status()),
            ));
        }

        let envelope: chart::ChartEnvelope = response
            .json()
            .await
            .map_err(|e| Error::connector(CONNECTOR, symbol, format!("invalid chart payload: {e}")))?;

        if let Some(err) = envelope.chart.error {
            let msg = format!("{}: {}", err.code, err.description);
            if msg.to_ascii_lowercase().contains("too many requests") {
                return Err(Error::rate_limited(CONNECTOR, msg));
            }
            return Err(Error::connector(CONNECTOR, symbol, msg));
        }

        let result = envelope
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| Error::connector(CONNECTOR, symbol, "empty chart result"))?;

        let bars = to_bars(result);
        tracing::debug!(symbol, bars = bars.len(), "fetched daily bars");
        Ok(bars)
    }
}

/// Flatten the position-aligned chart arrays into per-day bars.
///
/// Timestamps that fall outside the representable range are skipped;
/// missing array positions stay absent for the normalizer to judge.
fn to_bars(result: chart::ChartResult) -> Vec<RawBar> {
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .unwrap_or_default();
    result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, ts)| {
            let date = DateTime::from_timestamp(*ts, 0)?.date_naive();
            Some(RawBar {
                date,
                open: value_at(&quote.open, i),
                high: value_at(&quote.high, i),
                low: value_at(&quote.low, i),
                close: value_at(&quote.close, i),
                volume: quote.volume.get(i).copied().flatten(),
            })
        })
        .collect()
}

fn value_at(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}
