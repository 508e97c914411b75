//! etfboard-core
//!
//! Core types, the connector trait, and the time-series pipeline shared
//! across the etfboard workspace.
//!
//! - `types`: domain data structures (tracked symbols, quotes, aligned rows).
//! - `connector`: the `QuoteSource` trait implemented by price providers.
//! - `timeseries`: range resolution, normalization, alignment, change series.
//!
//! The pipeline stages are pure functions over owned data; only the
//! connector boundary performs I/O. Normalization, alignment, and change
//! computation are total: degenerate input degrades to absent values or
//! dropped rows, never to an error.
#![warn(missing_docs)]

/// The `QuoteSource` trait implemented by daily price providers.
pub mod connector;
/// Error taxonomy and request-boundary status mapping.
pub mod error;
/// Pipeline stages: range resolution, normalization, alignment, changes.
pub mod timeseries;
pub mod types;

pub use connector::QuoteSource;
pub use error::Error;
pub use timeseries::align::align;
pub use timeseries::change::with_changes;
pub use timeseries::normalize::{normalize, opt_price};
pub use timeseries::range::{RangeLimits, resolve};
pub use types::*;
