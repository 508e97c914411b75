//! Mock etfboard price source. Provides deterministic fixture data for
//! tests, examples, and offline runs.

use async_trait::async_trait;
use etfboard_core::{Error, Etf, QuoteSource, RawBar};

mod fixtures;

/// Mock source for CI-safe tests and demos.
///
/// Bars are a pure function of symbol and date, so repeated calls over the
/// same window return identical data. The `fail`/`rate_limit` switches
/// force typed errors for a chosen symbol, to exercise the all-or-nothing
/// fetch path.
pub struct MockSource {
    /// Symbol whose fetch fails with a connector error.
    pub fail: Option<Etf>,
    /// Symbol whose fetch fails with a rate-limit error.
    pub rate_limit: Option<Etf>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// A source that succeeds for every symbol.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fail: None,
            rate_limit: None,
        }
    }
}

#[async_trait]
impl QuoteSource for MockSource {
    fn name(&self) -> &'static str {
        "etfboard-mock"
    }

    async fn daily_quotes(
        &self,
        etf: Etf,
        period_start: i64,
        period_end: i64,
    ) -> Result<Vec<RawBar>, Error> {
        if self.fail == Some(etf) {
            return Err(Error::connector(
                "etfboard-mock",
                etf.symbol(),
                "forced failure",
            ));
        }
        if self.rate_limit == Some(etf) {
            return Err(Error::rate_limited(
                "etfboard-mock",
                format!("{}: Too Many Requests", etf.symbol()),
            ));
        }
        Ok(fixtures::bars(etf, period_start, period_end))
    }
}
