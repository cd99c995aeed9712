//! Content negotiation for the protocol endpoint
//!
//! The streamable HTTP service only answers clients that accept both JSON and
//! an event stream, and always replies with an event stream. Stateless
//! requests produce exactly one JSON-RPC message, so a client that only asks
//! for JSON gets that message back as a plain `application/json` body.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

const JSON_MIME: &str = "application/json";
const EVENT_STREAM_MIME: &str = "text/event-stream";

/// Upper bound on a buffered protocol reply
const MAX_REPLY_BYTES: usize = 4 * 1024 * 1024;

/// Middleware for `POST /mcp` that serves JSON unless the client asked for a stream
pub async fn json_responses(mut request: Request, next: Next) -> Response {
    if request.method() != Method::POST || accepts_event_stream(request.headers()) {
        return next.run(request).await;
    }

    request.headers_mut().insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/event-stream"),
    );

    let response = next.run(request).await;
    if !is_event_stream(response.headers()) {
        return response;
    }

    collapse_event_stream(response).await
}

fn accepts_event_stream(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|value| value.contains(EVENT_STREAM_MIME))
}

fn is_event_stream(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|value| value.starts_with(EVENT_STREAM_MIME))
}

async fn collapse_event_stream(response: Response) -> Response {
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, MAX_REPLY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to read MCP reply: {}", e);
            return reply_unavailable();
        }
    };

    match last_event_data(&String::from_utf8_lossy(&bytes)) {
        Some(data) => (parts.status, [(CONTENT_TYPE, JSON_MIME)], Body::from(data)).into_response(),
        None => {
            tracing::error!("MCP reply carried no message");
            reply_unavailable()
        }
    }
}

fn reply_unavailable() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "message": "The MCP reply could not be produced",
        })),
    )
        .into_response()
}

/// Data of the last event with a non-empty payload
///
/// Multi-line `data:` fields of one event are joined with newlines; priming
/// and keep-alive events carry no data and are skipped.
fn last_event_data(stream: &str) -> Option<String> {
    let mut last = None;

    for event in stream.replace("\r\n", "\n").split("\n\n") {
        let data: Vec<&str> = event
            .lines()
            .filter_map(|line| line.strip_prefix("data:"))
            .map(|value| value.strip_prefix(' ').unwrap_or(value))
            .collect();

        let joined = data.join("\n");
        if !joined.trim().is_empty() {
            last = Some(joined);
        }
    }

    last
}
