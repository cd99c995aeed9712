//! Parameter types for the Jira MCP tool

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::jira::{Description, IssueRequest};

/// Parameters for `create_jira_issue`
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
    #[schemars(description = "One-line summary (title) of the issue")]
    pub summary: String,

    #[schemars(
        description = "Issue description: plain text, or an Atlassian Document Format object \
                       ({\"type\": \"doc\", \"version\": 1, \"content\": [...]})"
    )]
    pub description: Description,

    #[schemars(description = "Issue type name in the project (e.g., 'Bug', 'Task', 'Story')")]
    pub issuetype: String,

    #[serde(rename = "parentKey", default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Key of the parent issue for sub-tasks or epic children (e.g., 'PROJ-1')")]
    pub parent_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Labels to attach to the issue")]
    pub labels: Option<Vec<String>>,
}

impl From<CreateIssueParams> for IssueRequest {
    fn from(params: CreateIssueParams) -> Self {
        IssueRequest {
            summary: params.summary,
            description: params.description,
            issuetype: params.issuetype,
            parent_key: params.parent_key,
            labels: params.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parent_key_uses_camel_case() {
        let params: CreateIssueParams = serde_json::from_value(json!({
            "summary": "s",
            "description": "d",
            "issuetype": "Sub-task",
            "parentKey": "PROJ-1",
            "labels": ["a", "b"]
        }))
        .unwrap();

        let request = IssueRequest::from(params);
        assert_eq!(request.parent_key.as_deref(), Some("PROJ-1"));
        assert_eq!(request.labels, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let params: CreateIssueParams = serde_json::from_value(json!({
            "summary": "s",
            "description": { "type": "doc", "version": 1, "content": [] },
            "issuetype": "Task"
        }))
        .unwrap();

        assert!(params.parent_key.is_none());
        assert!(params.labels.is_none());
        assert!(matches!(params.description, Description::Document(_)));
    }

    #[test]
    fn test_schema_requires_the_three_core_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(CreateIssueParams)).unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        assert!(required.contains(&"summary"));
        assert!(required.contains(&"description"));
        assert!(required.contains(&"issuetype"));
        assert!(!required.contains(&"parentKey"));
        assert!(!required.contains(&"labels"));
    }
}
