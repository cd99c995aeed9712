//! MCP Common - Shared plumbing for the MCP servers in this workspace
//!
//! - **Initialization**: [`init_tracing`] and [`serve_stdio`] for pipe-transport startup
//! - **Results**: helpers for building `CallToolResult` responses, with or
//!   without a structured side channel
//! - **Errors**: shorthand constructors for protocol-level errors
//! - **Embeddable**: [`EmbeddableMcp`] for calling tools in-process
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{serve_stdio, text_with_data};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     mcp_common::init_tracing("my_mcp")?;
//!     serve_stdio(MyServer::new(), "my-mcp").await
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, McpResult};
pub use init::{init_tracing, serve_stdio};
pub use result::{text_success, text_with_data};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
