//! Time-series pipeline stages.
//!
//! Data flows `range` → connector fetch → `normalize` → `align` →
//! (optionally) `change`. Only `range` can fail; the rest are total
//! functions over possibly-degenerate input.

/// Strict inner join of per-symbol series on calendar date.
pub mod align;
/// Percent-change-from-first-row series.
pub mod change;
/// Raw-bar cleaning and the falsy-to-absent price rule.
pub mod normalize;
/// Query-parameter reconciliation into a bounded date window.
pub mod range;
