use std::sync::Arc;

use etfboard_core::QuoteSource;

#[must_use]
pub fn get_source() -> Arc<dyn QuoteSource> {
    println!("--- (Using mock fixture source; no network) ---");
    Arc::new(etfboard_mock::MockSource::new())
}
