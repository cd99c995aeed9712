//! MCP Server implementation
//!
//! Exposes issue creation as the `create_jira_issue` tool. The same server
//! type backs the stdio transport and each request on the HTTP transport.

use std::sync::Arc;

use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;

use crate::handlers;
use crate::jira::IssueCreator;
use crate::params::CreateIssueParams;

/// The main Jira MCP Server
#[derive(Clone)]
pub struct JiraMcpServer {
    creator: Arc<IssueCreator>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl JiraMcpServer {
    pub fn new(creator: Arc<IssueCreator>) -> Self {
        Self {
            creator,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Create a Jira issue in the configured project")]
    async fn create_jira_issue(
        &self,
        Parameters(params): Parameters<CreateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_issue(&self.creator, params).await
    }
}

#[tool_handler]
impl rmcp::ServerHandler for JiraMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Jira MCP Server - creates issues in the Jira project '{}'. \
                 Descriptions may be plain text or an Atlassian Document Format object.",
                self.creator.project_key()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmbeddableMcp for JiraMcpServer {
    fn server_name(&self) -> &str {
        "jira"
    }

    fn server_description(&self) -> Option<&str> {
        Some("Jira MCP Server - creates issues in the configured Jira project.")
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "create_jira_issue" => {
                let params: CreateIssueParams = serde_json::from_value(params)?;
                self.create_jira_issue(Parameters(params))
                    .await
                    .map_err(Into::into)
            }
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
