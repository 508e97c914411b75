//! Route handlers and the error-to-status mapping.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use etfboard::Dashboard;
use etfboard_core::{Error, PerformanceReport, RangeQuery};
use serde_json::json;
use tower_http::trace::TraceLayer;

/// Build the application router over a configured dashboard.
pub fn app_router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/api/etfs", get(get_performance))
        .layer(TraceLayer::new_for_http())
        .with_state(dashboard)
}

/// Resolve, fetch, align, and return the performance table.
async fn get_performance(
    State(dashboard): State<Arc<Dashboard>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<PerformanceReport>, ApiError> {
    let report = dashboard.performance(&query).await?;
    Ok(Json(report))
}

/// Wrapper mapping pipeline errors onto `{ "error": ... }` responses.
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, status = status.as_u16(), "request rejected");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
