//! API key gate for the HTTP transport
//!
//! Every request except the health checks must carry the configured key in
//! `X-API-Key` or `Authorization: Bearer <key>`. With no key configured the
//! gate is open; startup refuses that combination in production mode.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::state::AppState;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared-secret check applied before any handler runs
#[derive(Debug, Clone)]
pub struct AccessGate {
    api_key: Option<String>,
}

impl AccessGate {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Health checks stay reachable without a key
    pub fn is_exempt(method: &Method, path: &str) -> bool {
        path == "/" || (path == "/mcp" && method == Method::GET)
    }

    pub fn permits(&self, headers: &HeaderMap) -> bool {
        match &self.api_key {
            None => true,
            Some(expected) => presented_key(headers) == Some(expected.as_str()),
        }
    }
}

/// The key a client presented, preferring `X-API-Key` over `Authorization`
fn presented_key(headers: &HeaderMap) -> Option<&str> {
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|key| !key.is_empty());
    if api_key.is_some() {
        return api_key;
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(|value| value.strip_prefix("Bearer ").unwrap_or(value))
}

/// Authentication middleware
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if AccessGate::is_exempt(request.method(), &path) || state.gate.permits(request.headers()) {
        return next.run(request).await;
    }

    tracing::warn!("Rejected request without a valid API key for {}", path);
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Unauthorized",
            "message": "Valid API key required. Provide it in X-API-Key header or Authorization: Bearer <key>",
        })),
    )
        .into_response()
}
