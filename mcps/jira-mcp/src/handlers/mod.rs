//! Handler implementations for the Jira MCP tool

mod issue;

pub use issue::*;

use mcp_common::{internal_error, invalid_params, McpError};

use crate::jira::JiraError;

/// Convert a JiraError to an MCP error
///
/// Validation problems are the caller's to fix; everything else is reported
/// as an internal error with the upstream status and body in the message.
pub fn jira_to_mcp_error(e: JiraError) -> McpError {
    match e {
        JiraError::Validation(v) => invalid_params(v.to_string()),
        other => internal_error(other.to_string()),
    }
}
