//! Protocol error shorthands
//!
//! Tool handlers report caller mistakes as `invalid_params` and everything
//! else as `internal_error`. Both carry the message verbatim and no data.

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Protocol error for a failure the caller cannot fix by changing arguments
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Protocol error for arguments that failed validation
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
