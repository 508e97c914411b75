use std::sync::Arc;

use async_trait::async_trait;
use etfboard_core::{Error, Etf, QuoteSource, RawBar};

type QuotesFn = Arc<dyn Fn(Etf, i64, i64) -> Result<Vec<RawBar>, Error> + Send + Sync>;

/// Simple in-memory connector used by integration tests.
///
/// Behavior is supplied as a closure over `(symbol, period_start,
/// period_end)` so each test tailors exactly what it needs.
pub struct MockSource {
    pub name: &'static str,
    pub quotes_fn: QuotesFn,
}

impl MockSource {
    pub fn new(
        quotes_fn: impl Fn(Etf, i64, i64) -> Result<Vec<RawBar>, Error> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: "test-mock",
            quotes_fn: Arc::new(quotes_fn),
        })
    }
}

#[async_trait]
impl QuoteSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn daily_quotes(
        &self,
        etf: Etf,
        period_start: i64,
        period_end: i64,
    ) -> Result<Vec<RawBar>, Error> {
        (self.quotes_fn)(etf, period_start, period_end)
    }
}
