//! Shared state for the HTTP transport

use std::sync::Arc;

use super::auth::AccessGate;
use crate::jira::IssueCreator;

/// Everything handlers need; cloned per request, all of it immutable
#[derive(Clone)]
pub struct AppState {
    pub creator: Arc<IssueCreator>,
    pub gate: Arc<AccessGate>,
}

impl AppState {
    pub fn new(creator: Arc<IssueCreator>, gate: AccessGate) -> Self {
        Self {
            creator,
            gate: Arc::new(gate),
        }
    }
}
