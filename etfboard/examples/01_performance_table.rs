mod common;
use common::get_source;
use etfboard::{Dashboard, Etf, RangeQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the dashboard over a price source.
    let dashboard = Dashboard::builder().with_source(get_source()).build()?;

    // 2. Ask for the trailing month.
    let query = RangeQuery {
        lookback: Some(30),
        ..RangeQuery::default()
    };
    let report = dashboard.performance(&query).await?;

    // 3. Print the aligned table.
    println!(
        "{} complete trading days between {} and {}",
        report.metadata.total_days, report.metadata.start_date, report.metadata.end_date
    );
    for row in &report.data {
        print!("{}", row.date);
        for etf in Etf::ALL {
            print!("  {}={:.2}", etf.column_key(), row.close(etf));
        }
        println!();
    }

    Ok(())
}
