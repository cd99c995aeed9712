//! Request, payload and response types for Jira issue creation
//!
//! `IssueRequest` is what callers hand in; `IssueEnvelope` is what goes on
//! the wire to `POST /rest/api/3/issue`; `IssueResult` is what comes back.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::error::ValidationError;

/// Issue description as supplied by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Description {
    /// Plain text, wrapped into a one-paragraph document before sending
    Text(String),
    /// A pre-built Atlassian Document Format object, sent as-is
    Document(Map<String, Value>),
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::Text(text)
    }
}

/// A rich-text document accepted by the Jira v3 API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AdfDocument(Value);

impl AdfDocument {
    /// Wrap plain text as the single-paragraph document Jira expects
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self(json!({
            "type": "doc",
            "version": 1,
            "content": [
                {
                    "type": "paragraph",
                    "content": [
                        { "type": "text", "text": text.into() }
                    ]
                }
            ]
        }))
    }

    /// Accept a caller-built document after a structural check
    ///
    /// Only the envelope is checked (`type`, `version`, `content`); node
    /// contents are the caller's responsibility.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, ValidationError> {
        let is_doc = object.get("type").and_then(Value::as_str) == Some("doc");
        let is_v1 = object.get("version").and_then(Value::as_f64) == Some(1.0);
        let has_content = object.get("content").is_some_and(Value::is_array);

        if is_doc && is_v1 && has_content {
            Ok(Self(Value::Object(object)))
        } else {
            Err(ValidationError::InvalidDocument)
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Caller-supplied input for creating an issue
#[derive(Debug, Clone, PartialEq)]
pub struct IssueRequest {
    pub summary: String,
    pub description: Description,
    /// Issue type name within the configured project, e.g. "Bug" or "Task"
    pub issuetype: String,
    pub parent_key: Option<String>,
    pub labels: Option<Vec<String>>,
}

impl IssueRequest {
    pub fn new(
        summary: impl Into<String>,
        description: impl Into<Description>,
        issuetype: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            issuetype: issuetype.into(),
            parent_key: None,
            labels: None,
        }
    }

    pub fn with_parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}

/// `{ "key": ... }` reference, used for project and parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRef {
    pub key: String,
}

/// `{ "name": ... }` reference, used for the issue type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRef {
    pub name: String,
}

/// The `fields` object of a create-issue request
///
/// Optional fields are omitted entirely when unset; Jira treats an explicit
/// `null` or `[]` differently from an absent field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssuePayload {
    pub project: KeyRef,
    pub summary: String,
    pub description: AdfDocument,
    pub issuetype: NameRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<KeyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Request body for `POST /rest/api/3/issue`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueEnvelope {
    pub fields: IssuePayload,
}

/// Identifiers Jira assigns to a created issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueResult {
    /// Human-readable key, e.g. "PROJ-123"
    pub key: String,
    pub id: String,
    /// Canonical REST URL of the issue
    #[serde(rename = "self")]
    pub self_url: String,
}
