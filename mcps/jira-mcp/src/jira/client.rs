//! Issue creation against the configured Jira project

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, instrument};

use super::error::{JiraError, JiraResult};
use super::payload::build_payload;
use super::transport::{HttpTransport, IssueTransport};
use super::types::{IssueEnvelope, IssueRequest, IssueResult};
use crate::config::JiraConfig;

/// Validates requests, sends them through a transport, and normalizes the outcome
///
/// Holds only startup configuration, so one instance is shared by every
/// request on every transport.
pub struct IssueCreator {
    project_key: String,
    transport: Arc<dyn IssueTransport>,
}

impl IssueCreator {
    pub fn new(project_key: impl Into<String>, transport: Arc<dyn IssueTransport>) -> Self {
        Self {
            project_key: project_key.into(),
            transport,
        }
    }

    /// Creator backed by the real Jira REST API
    pub fn from_config(config: &JiraConfig) -> JiraResult<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(config.project_key(), Arc::new(transport)))
    }

    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Create one issue; a failed attempt is returned as-is, never retried
    #[instrument(skip_all, fields(project = %self.project_key, issuetype = %request.issuetype))]
    pub async fn create_issue(&self, request: IssueRequest) -> JiraResult<IssueResult> {
        let fields = build_payload(&self.project_key, request)?;
        let envelope = IssueEnvelope { fields };

        let response = self.transport.post_issue(&envelope).await?;

        if !response.is_success() {
            match serde_json::from_str::<Value>(&response.body) {
                Ok(detail) => {
                    let error_messages = detail.get("errorMessages").cloned().unwrap_or_default();
                    let errors = detail.get("errors").cloned().unwrap_or_default();
                    error!(
                        status = response.status,
                        error_messages = %error_messages,
                        errors = %errors,
                        "Jira rejected issue"
                    )
                }
                Err(_) => error!(
                    status = response.status,
                    body = %response.body,
                    "Jira rejected issue"
                ),
            }
            return Err(JiraError::Tracker {
                status: response.status,
                body: response.body,
            });
        }

        let created: IssueResult = serde_json::from_str(&response.body)?;
        info!(key = %created.key, id = %created.id, "created Jira issue");
        Ok(created)
    }
}
