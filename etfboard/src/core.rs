use std::sync::Arc;

use chrono::NaiveDate;
use etfboard_core::{Error, QuoteSource, RangeLimits};

/// Orchestrator that turns range queries into aligned performance reports.
///
/// Holds the registered price connector and the resolution limits; see
/// [`Dashboard::performance`] for the request pipeline.
pub struct Dashboard {
    pub(crate) source: Arc<dyn QuoteSource>,
    pub(crate) cfg: DashboardConfig,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("source", &"Arc<dyn QuoteSource>")
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Configuration applied by [`Dashboard`] when resolving and fetching.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardConfig {
    /// Bounds for range resolution (span ceiling, default lookback).
    pub limits: RangeLimits,
    /// Fixed "today" override. `None` uses the current UTC date; tests pin
    /// this to make resolution deterministic.
    pub today: Option<NaiveDate>,
}

/// Builder for constructing a [`Dashboard`].
pub struct DashboardBuilder {
    source: Option<Arc<dyn QuoteSource>>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with default limits and no connector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: DashboardConfig::default(),
        }
    }

    /// Register the price connector to fetch from.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn QuoteSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Override the widest allowed window, in calendar days.
    #[must_use]
    pub const fn max_span_days(mut self, days: i64) -> Self {
        self.cfg.limits.max_span_days = days;
        self
    }

    /// Override the window applied when a query carries no range signal.
    #[must_use]
    pub const fn default_lookback_days(mut self, days: i64) -> Self {
        self.cfg.limits.default_lookback_days = days;
        self
    }

    /// Pin "today" for deterministic range resolution.
    #[must_use]
    pub const fn today(mut self, date: NaiveDate) -> Self {
        self.cfg.today = Some(date);
        self
    }

    /// Finalize the builder.
    ///
    /// # Errors
    /// Returns an error if no connector was registered.
    pub fn build(self) -> Result<Dashboard, Error> {
        let source = self
            .source
            .ok_or_else(|| Error::Other("no quote source registered".into()))?;
        Ok(Dashboard {
            source,
            cfg: self.cfg,
        })
    }
}

impl Dashboard {
    /// Start building a dashboard.
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.cfg
            .today
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}
