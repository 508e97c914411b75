use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use etfboard::{Dashboard, Etf};
use etfboard_mock::MockSource;
use etfboard_server::api::app_router;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn app(source: MockSource) -> Router {
    let dashboard = Dashboard::builder()
        .with_source(Arc::new(source))
        .today(NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date"))
        .build()
        .expect("source registered");
    app_router(Arc::new(dashboard))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn returns_aligned_table_with_metadata() {
    let (status, body) = get(app(MockSource::new()), "/api/etfs?lookback=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["startDate"], "2024-03-05");
    assert_eq!(body["metadata"]["endDate"], "2024-03-10");

    let data = body["data"].as_array().unwrap();
    // Tue 2024-03-05 through Fri 2024-03-08; the weekend yields no bars.
    assert_eq!(data.len(), 4);
    assert_eq!(body["metadata"]["totalDays"], 4);
    for row in data {
        let row = row.as_object().unwrap();
        assert_eq!(row.len(), 1 + Etf::COUNT);
        assert!(row.contains_key("date"));
        assert!(row.contains_key("spy"));
        assert!(row.contains_key("jnk"));
    }
}

#[tokio::test]
async fn custom_range_is_honored() {
    let (status, body) = get(
        app(MockSource::new()),
        "/api/etfs?startDate=2024-02-05&endDate=2024-02-09",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["startDate"], "2024-02-05");
    assert_eq!(body["metadata"]["endDate"], "2024-02-09");
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn inverted_range_returns_400_with_error_payload() {
    let (status, body) = get(
        app(MockSource::new()),
        "/api/etfs?startDate=2024-03-15&endDate=2024-03-01",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid date range"));
}

#[tokio::test]
async fn malformed_start_date_falls_back_to_default_window() {
    let (status, body) = get(app(MockSource::new()), "/api/etfs?startDate=garbage").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["endDate"], "2024-03-10");
    assert_eq!(body["metadata"]["startDate"], "2023-12-11");
}

#[tokio::test]
async fn rate_limited_symbol_returns_429() {
    let source = MockSource {
        rate_limit: Some(Etf::Qqq),
        ..MockSource::new()
    };
    let (status, body) = get(app(source), "/api/etfs?lookback=5").await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn failing_symbol_returns_500_and_no_partial_data() {
    let source = MockSource {
        fail: Some(Etf::Shy),
        ..MockSource::new()
    };
    let (status, body) = get(app(source), "/api/etfs?lookback=5").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("data").is_none());
    assert!(body["error"].as_str().unwrap().contains("SHY"));
}
