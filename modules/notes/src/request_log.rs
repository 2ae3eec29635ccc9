//! Per-request access log, written before the handler runs.

use crate::routes::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use std::sync::atomic::Ordering;

/// Format: `[2024-05-01T12:00:00.000Z] GET /notes/1`
pub fn access_line(method: &str, uri: &str) -> String {
    format!(
        "[{}] {} {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        method,
        uri
    )
}

pub async fn log_request(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    log::info!("{}", access_line(request.method().as_str(), &request.uri().to_string()));
    next.run(request).await
}
