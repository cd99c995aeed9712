//! Outbound transport to the Jira REST API
//!
//! The transport only moves bytes: it sends the envelope and hands back the
//! status and raw body. Interpreting the response is the creator's job, so
//! a recording transport can stand in for Jira in tests.

use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use tracing::debug;

use super::error::JiraResult;
use super::types::IssueEnvelope;
use crate::config::JiraConfig;

/// Status and body of a Jira response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerResponse {
    pub status: u16,
    pub body: String,
}

impl TrackerResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a create-issue request to Jira
#[async_trait]
pub trait IssueTransport: Send + Sync {
    async fn post_issue(&self, envelope: &IssueEnvelope) -> JiraResult<TrackerResponse>;
}

/// `reqwest`-backed transport with credentials fixed at construction
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    authorization: String,
}

impl HttpTransport {
    pub fn new(config: &JiraConfig) -> JiraResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("jira-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.issue_endpoint(),
            authorization: config.authorization(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IssueTransport for HttpTransport {
    async fn post_issue(&self, envelope: &IssueEnvelope) -> JiraResult<TrackerResponse> {
        debug!(endpoint = %self.endpoint, "posting issue to Jira");

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.authorization.as_str())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(envelope)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TrackerResponse { status, body })
    }
}
