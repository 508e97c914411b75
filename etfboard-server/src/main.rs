use std::sync::Arc;

use etfboard::Dashboard;
use etfboard_server::{api, init_tracing};
use etfboard_yahoo::YahooSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let listen_addr =
        std::env::var("ETFBOARD_LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_owned());

    let source = Arc::new(YahooSource::new()?);
    let dashboard = Arc::new(Dashboard::builder().with_source(source).build()?);

    let router = api::app_router(dashboard);
    tracing::info!("Listening on {listen_addr}");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
