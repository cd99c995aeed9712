//! Jira MCP Library
//!
//! Creates issues in one configured Jira Cloud project, exposed as the
//! `create_jira_issue` MCP tool over stdio or streamable HTTP, plus a plain
//! REST endpoint on the HTTP transport.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jira_mcp::{config::JiraConfig, jira::IssueCreator, JiraMcpServer};
//!
//! let config = JiraConfig::new(base_url, email, token, "PROJ")?;
//! let server = JiraMcpServer::new(Arc::new(IssueCreator::from_config(&config)?));
//! ```
//!
//! # Configuration
//! `JIRA_BASE_URL`, `JIRA_EMAIL`, `JIRA_API_TOKEN`, `JIRA_PROJECT_KEY` are
//! required; the HTTP transport also reads `PORT`, `API_KEY`, `NODE_ENV`
//! and `USE_HTTPS`.

pub mod config;
pub mod handlers;
pub mod jira;
pub mod params;
pub mod server;
pub mod web;

// Re-export main server type
pub use server::JiraMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
