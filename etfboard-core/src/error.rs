//! Unified error type for the etfboard workspace.

use thiserror::Error;

/// Unified error type for the etfboard workspace.
///
/// Wraps contradictory user input, provider-tagged fetch failures, upstream
/// throttling, and data-shape issues. The request boundary maps each variant
/// to an HTTP-equivalent status via [`Error::status`].
#[derive(Debug, Error)]
pub enum Error {
    /// User-supplied dates are contradictory (start after end).
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    /// The upstream provider signalled request throttling.
    #[error("{connector} rate limited: {msg}")]
    RateLimited {
        /// Connector name that was throttled.
        connector: String,
        /// Human-readable provider message.
        msg: String,
    },

    /// A single symbol's fetch failed. Fetches are all-or-nothing, so this
    /// aborts the whole request.
    #[error("{connector} failed for {symbol}: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Ticker whose fetch failed.
        symbol: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl Error {
    /// Helper: build an `InvalidRange` error from any message.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Helper: build a `RateLimited` error with the connector name and message.
    pub fn rate_limited(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::RateLimited {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Connector` error tagged with connector and symbol.
    pub fn connector(
        connector: impl Into<String>,
        symbol: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Connector {
            connector: connector.into(),
            symbol: symbol.into(),
            msg: msg.into(),
        }
    }

    /// HTTP-equivalent status category for the request boundary.
    ///
    /// 400 for contradictory date input, 429 for upstream throttling, 500
    /// for everything else.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::InvalidRange(_) => 400,
            Self::RateLimited { .. } => 429,
            Self::Connector { .. } | Self::Data(_) | Self::Other(_) => 500,
        }
    }
}
