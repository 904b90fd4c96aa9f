use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use jsmin_filter::ContentKind;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn minify_routes() -> Router<AppState> {
    Router::new().route("/api/v1/minify", post(minify))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Minify the request body. An HTML content type minifies inline scripts,
/// anything else is treated as a script.
async fn minify(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, ApiError> {
    let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let kind = match ContentKind::from_content_type(content_type) {
        ContentKind::Html => ContentKind::Html,
        _ => ContentKind::Script,
    };
    let minified = state.filter.minify_text(kind, &body)?;
    tracing::debug!(before = body.len(), after = minified.len(), "minify request");

    let response_type = match kind {
        ContentKind::Html => "text/html; charset=utf-8",
        _ => "text/javascript; charset=utf-8",
    };
    Ok(([(header::CONTENT_TYPE, response_type)], minified).into_response())
}
