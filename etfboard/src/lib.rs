//! etfboard turns range queries into aligned ETF performance tables.
//!
//! Overview
//! - Resolves query parameters into a bounded calendar window.
//! - Fans out one daily-history fetch per tracked symbol over the registered
//!   [`QuoteSource`](etfboard_core::QuoteSource) and joins all-or-nothing:
//!   the first failure cancels the remaining fetches and fails the request.
//! - Normalizes each symbol's bars, inner-joins them on calendar date, and
//!   returns only complete rows plus window metadata.
//! - Exposes uniform domain types and errors from `etfboard-core`.
//!
//! Everything is request-scoped: no caching, no retries, no state shared
//! between requests.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use etfboard::Dashboard;
//! use etfboard_core::RangeQuery;
//!
//! let dashboard = Dashboard::builder()
//!     .with_source(Arc::new(source))
//!     .build()?;
//!
//! let query = RangeQuery { lookback: Some(30), ..RangeQuery::default() };
//! let report = dashboard.performance(&query).await?;
//! for row in &report.data {
//!     // one complete close per tracked symbol per date
//! }
//! ```
//!
//! See `etfboard/examples/` for runnable demonstrations against the mock
//! connector.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Dashboard, DashboardBuilder, DashboardConfig};

// Re-export core types for convenience
pub use etfboard_core::{
    AlignedRow,
    ChangeRow,
    Error,
    Etf,
    PerformanceReport,
    Quote,
    QuoteSource,
    RangeLimits,
    RangeMetadata,
    RangeQuery,
    RawBar,
    ResolvedRange,
};
