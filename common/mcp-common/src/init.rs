//! Server initialization utilities
//!
//! Tracing setup shared by every transport, and the pipe (stdio) serving loop.

use rmcp::{transport::stdio, ServerHandler, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for an MCP server process
///
/// Logs always go to stderr: stdout carries protocol frames when the server
/// runs on the pipe transport. `RUST_LOG` adds directives on top of the
/// default `<crate_name>=info`, and `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

/// Serve `server` over stdin/stdout until the peer goes away
///
/// The server is constructed by the caller so it can carry configuration
/// resolved at startup.
pub async fn serve_stdio<S>(server: S, name: &str) -> anyhow::Result<()>
where
    S: ServerHandler,
{
    tracing::info!("Starting {} MCP server on stdio", name);

    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
