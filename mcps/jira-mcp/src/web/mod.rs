//! HTTP transport
//!
//! Serves the MCP endpoint (streamable HTTP, stateless), a plain REST
//! endpoint for clients that don't speak MCP, and health checks, all behind
//! the API key gate.

pub mod api;
pub mod auth;
pub mod negotiate;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::HttpConfig;
use crate::jira::IssueCreator;
use crate::server::JiraMcpServer;
use auth::AccessGate;
use state::AppState;

/// Start the HTTP server and run until Ctrl-C
pub async fn serve(config: HttpConfig, creator: Arc<IssueCreator>) -> Result<()> {
    if config.use_https {
        tracing::warn!(
            "USE_HTTPS is set but TLS is not terminated in-process; \
             serving plain HTTP (terminate TLS in a proxy in front of this server)"
        );
    }

    let gate = AccessGate::new(config.api_key.clone());
    if !gate.is_enabled() {
        tracing::warn!("No API_KEY configured - HTTP endpoints are open (development mode)");
    }

    let app = create_router(AppState::new(creator, gate));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("MCP server running on http://localhost:{}/mcp", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    let mcp_service = create_mcp_service(state.creator.clone());

    Router::new()
        .route("/", get(api::health_check))
        .route(
            "/mcp",
            get(api::mcp_health_check)
                .post_service(mcp_service)
                .layer(middleware::from_fn(negotiate::json_responses)),
        )
        .route("/api/create-issue", post(api::create_issue))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Streamable HTTP service answering each request with a fresh server
///
/// Stateless: no session ids are issued, so every POST stands alone. Replies
/// are event streams; [`negotiate::json_responses`] turns them into plain
/// JSON for clients that don't accept a stream.
fn create_mcp_service(
    creator: Arc<IssueCreator>,
) -> StreamableHttpService<JiraMcpServer, LocalSessionManager> {
    let service_factory =
        move || -> Result<JiraMcpServer, std::io::Error> { Ok(JiraMcpServer::new(creator.clone())) };

    let config = StreamableHttpServerConfig {
        stateful_mode: false,
        ..Default::default()
    };

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
