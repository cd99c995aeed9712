//! Validation and payload construction
//!
//! Everything here is pure: a request either becomes an `IssuePayload` or a
//! `ValidationError`, and no network call has happened yet in either case.

use super::error::ValidationError;
use super::types::{AdfDocument, Description, IssuePayload, IssueRequest, KeyRef, NameRef};

/// Check required fields and the document shape, then build the `fields` object
pub fn build_payload(
    project_key: &str,
    request: IssueRequest,
) -> Result<IssuePayload, ValidationError> {
    let mut missing = Vec::new();
    if is_blank(&request.summary) {
        missing.push("summary");
    }
    if matches!(&request.description, Description::Text(text) if is_blank(text)) {
        missing.push("description");
    }
    if is_blank(&request.issuetype) {
        missing.push("issuetype");
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let description = match request.description {
        Description::Text(text) => AdfDocument::paragraph(text),
        Description::Document(object) => AdfDocument::from_object(object)?,
    };

    Ok(IssuePayload {
        project: KeyRef {
            key: project_key.to_string(),
        },
        summary: request.summary,
        description,
        issuetype: NameRef {
            name: request.issuetype,
        },
        parent: request
            .parent_key
            .filter(|key| !is_blank(key))
            .map(|key| KeyRef { key }),
        labels: request.labels.filter(|labels| !labels.is_empty()),
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
