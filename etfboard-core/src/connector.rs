//! The connector trait implemented by daily price providers.

use async_trait::async_trait;

use crate::{Error, Etf, RawBar};

/// Per-day price source for the tracked symbols.
///
/// Implementations fetch raw daily bars for one symbol over an epoch-second
/// window resolved upstream; the window bounds are midnights, inclusive on
/// both ends. Implementations return records as the provider reported them —
/// cleaning (zero/NaN coercion, unusable-day drops) happens later in the
/// pipeline, so the same normalization applies to every provider.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Short identifier used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Fetch raw daily bars for `etf` between `period_start` and
    /// `period_end` (epoch seconds at midnight UTC).
    ///
    /// # Errors
    /// - [`Error::RateLimited`] when the provider throttles the request.
    /// - [`Error::Connector`] for any other provider failure (transport,
    ///   unexpected payload, unknown symbol).
    async fn daily_quotes(
        &self,
        etf: Etf,
        period_start: i64,
        period_end: i64,
    ) -> Result<Vec<RawBar>, Error>;
}
