//! Jira Cloud issue creation
//!
//! Validation and payload construction, the outbound transport, and the
//! `IssueCreator` tying them together.

pub mod client;
pub mod error;
pub mod payload;
pub mod recording;
pub mod transport;
pub mod types;

pub use client::IssueCreator;
pub use error::{JiraError, JiraResult, ValidationError};
pub use payload::build_payload;
pub use recording::RecordingTransport;
pub use transport::{HttpTransport, IssueTransport, TrackerResponse};
pub use types::{AdfDocument, Description, IssueEnvelope, IssuePayload, IssueRequest, IssueResult};
