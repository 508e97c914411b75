mod common;
use common::get_source;
use etfboard::{Dashboard, Etf, RangeQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = Dashboard::builder().with_source(get_source()).build()?;

    let query = RangeQuery {
        lookback: Some(14),
        ..RangeQuery::default()
    };
    let report = dashboard.performance(&query).await?;

    // Percent change vs. the first complete day in the window.
    for row in report.with_changes() {
        print!("{}", row.date);
        for etf in Etf::ALL {
            print!("  {}={:+.2}%", etf.symbol(), row.change(etf));
        }
        println!();
    }

    Ok(())
}
