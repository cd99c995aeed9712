//! In-memory transport that records requests and replays a fixed response
//!
//! Used by the test suites to count outbound calls and inspect payloads
//! without a Jira instance.

use std::sync::Mutex;

use async_trait::async_trait;

use super::error::JiraResult;
use super::transport::{IssueTransport, TrackerResponse};
use super::types::IssueEnvelope;

pub struct RecordingTransport {
    response: TrackerResponse,
    requests: Mutex<Vec<IssueEnvelope>>,
}

impl RecordingTransport {
    /// Answer every request with `status` and `body`
    pub fn respond_with(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: TrackerResponse::new(status, body),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer with a typical `201 Created` for `key`
    pub fn created(key: &str, id: &str) -> Self {
        let body = serde_json::json!({
            "key": key,
            "id": id,
            "self": format!("https://jira.example.com/rest/api/3/issue/{}", id),
        });
        Self::respond_with(201, body.to_string())
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn requests(&self) -> Vec<IssueEnvelope> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<IssueEnvelope>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl IssueTransport for RecordingTransport {
    async fn post_issue(&self, envelope: &IssueEnvelope) -> JiraResult<TrackerResponse> {
        self.lock().push(envelope.clone());
        Ok(self.response.clone())
    }
}
