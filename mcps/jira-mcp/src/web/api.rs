//! REST handlers: health checks and the plain create-issue endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::state::AppState;
use crate::jira::{Description, IssueRequest, JiraError, ValidationError};

/// Service name reported by the health endpoints
pub const SERVICE_NAME: &str = "jira-mcp-server";

const REQUIRED_FIELDS: [&str; 3] = ["summary", "description", "issuetype"];

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Health descriptor for the protocol endpoint
#[derive(Debug, Serialize)]
pub struct McpHealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub endpoint: &'static str,
    pub method: &'static str,
    pub protocol: &'static str,
}

/// `GET /`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

/// `GET /mcp`
pub async fn mcp_health_check() -> Json<McpHealthResponse> {
    Json(McpHealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        endpoint: "/mcp",
        method: "POST",
        protocol: "MCP",
    })
}

/// Create issue request body
///
/// Every field is optional at the JSON level so that absent required fields
/// are reported together by validation instead of one at a time by serde.
#[derive(Debug, Default, Deserialize)]
pub struct CreateIssueBody {
    pub summary: Option<String>,
    pub description: Option<Description>,
    pub issuetype: Option<String>,
    #[serde(rename = "parentKey")]
    pub parent_key: Option<String>,
    pub labels: Option<Vec<String>>,
}

impl From<CreateIssueBody> for IssueRequest {
    fn from(body: CreateIssueBody) -> Self {
        IssueRequest {
            summary: body.summary.unwrap_or_default(),
            description: body
                .description
                .unwrap_or_else(|| Description::Text(String::new())),
            issuetype: body.issuetype.unwrap_or_default(),
            parent_key: body.parent_key,
            labels: body.labels,
        }
    }
}

/// Create issue response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueResponse {
    pub success: bool,
    pub issue_key: String,
    pub issue_id: String,
    pub url: String,
    pub message: String,
}

/// Error envelope for the REST endpoint
#[derive(Debug)]
pub enum ApiError {
    /// Body was not JSON or had the wrong types
    InvalidBody(String),
    Jira(JiraError),
}

impl From<JiraError> for ApiError {
    fn from(e: JiraError) -> Self {
        ApiError::Jira(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidBody(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request body", "message": message }),
            ),
            ApiError::Jira(e) => jira_error_body(e),
        };

        (status, Json(body)).into_response()
    }
}

fn jira_error_body(e: JiraError) -> (StatusCode, Value) {
    let message = e.to_string();

    match e {
        JiraError::Validation(ValidationError::MissingFields(missing)) => (
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Missing required fields",
                "message": message,
                "required": REQUIRED_FIELDS,
                "missing": missing,
            }),
        ),
        JiraError::Validation(ValidationError::InvalidDocument) => (
            StatusCode::BAD_REQUEST,
            json!({
                "error": "Invalid ADF format",
                "message": message,
                "example": {
                    "type": "doc",
                    "version": 1,
                    "content": [{
                        "type": "paragraph",
                        "content": [{ "type": "text", "text": "Description text" }]
                    }]
                },
            }),
        ),
        JiraError::Tracker { status, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "Failed to create Jira issue",
                "message": message,
                "status": status,
            }),
        ),
        JiraError::Transport(_) | JiraError::Decode(_) => {
            tracing::error!("Failed to create Jira issue: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to create Jira issue",
                    "message": "The request to Jira could not be completed",
                }),
            )
        }
    }
}

/// `POST /api/create-issue`
pub async fn create_issue(
    State(state): State<AppState>,
    body: Result<Json<CreateIssueBody>, JsonRejection>,
) -> Result<Json<CreateIssueResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let created = state.creator.create_issue(body.into()).await?;

    Ok(Json(CreateIssueResponse {
        success: true,
        message: format!("Created Jira issue {}", created.key),
        issue_key: created.key,
        issue_id: created.id,
        url: created.self_url,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_become_blank_request() {
        let request = IssueRequest::from(CreateIssueBody::default());
        assert_eq!(request.summary, "");
        assert_eq!(request.description, Description::Text(String::new()));
        assert_eq!(request.issuetype, "");
    }

    #[test]
    fn test_null_fields_deserialize_as_absent() {
        let body: CreateIssueBody = serde_json::from_value(json!({
            "summary": null,
            "description": "d",
            "issuetype": "Bug",
            "labels": ["one"]
        }))
        .unwrap();
        assert!(body.summary.is_none());
        assert_eq!(body.labels, Some(vec!["one".to_string()]));
    }

    #[test]
    fn test_tracker_error_maps_to_500() {
        let response = ApiError::Jira(JiraError::Tracker {
            status: 404,
            body: "nope".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let missing: ApiError =
            JiraError::from(ValidationError::MissingFields(vec!["summary"])).into();
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);

        let invalid: ApiError = JiraError::from(ValidationError::InvalidDocument).into();
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
