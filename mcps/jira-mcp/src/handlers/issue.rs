//! Issue handler implementations

use mcp_common::{text_with_data, CallToolResult, McpResult};
use serde_json::json;

use crate::jira::IssueCreator;
use crate::params::CreateIssueParams;

use super::jira_to_mcp_error;

/// Create an issue and report its key, with identifiers as structured content
pub async fn create_issue(
    creator: &IssueCreator,
    params: CreateIssueParams,
) -> McpResult<CallToolResult> {
    let created = creator
        .create_issue(params.into())
        .await
        .map_err(jira_to_mcp_error)?;

    let metadata = json!({
        "issueKey": created.key,
        "issueId": created.id,
        "url": created.self_url,
    });

    Ok(text_with_data(
        format!("Created Jira issue {}", created.key),
        metadata,
    ))
}
