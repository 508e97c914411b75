//! Percent-change series relative to the first observation.

use crate::{AlignedRow, ChangeRow, Etf};

/// Extend aligned rows with percent change since the first row.
///
/// The first row is the baseline for every symbol, so its changes are all
/// zero. Empty input yields empty output. A zero baseline follows IEEE
/// arithmetic (`inf`/`NaN`); the normalizer never emits zero closes, so a
/// full pipeline run cannot reach that case.
#[must_use]
pub fn with_changes(rows: &[AlignedRow]) -> Vec<ChangeRow> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    rows.iter()
        .map(|row| {
            let mut changes = [0.0_f64; Etf::COUNT];
            for etf in Etf::ALL {
                let baseline = first.close(etf);
                changes[etf.index()] = (row.close(etf) - baseline) / baseline * 100.0;
            }
            ChangeRow {
                date: row.date,
                closes: row.closes,
                changes,
            }
        })
        .collect()
}
