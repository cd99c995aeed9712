//! Error types for Jira issue creation

use thiserror::Error;

/// Caller-fixable problems found before any network I/O
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of `summary`, `description`, `issuetype` is absent or blank
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// An object description that is not an ADF document
    #[error(
        "invalid rich-text document: description objects must have type 'doc', \
         version 1 and a content array"
    )]
    InvalidDocument,
}

/// Errors that can occur while creating an issue
#[derive(Error, Debug)]
pub enum JiraError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Jira answered with a non-2xx status
    #[error("Jira error {status}: {body}")]
    Tracker {
        /// HTTP status code from Jira
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The request never produced a response
    #[error("request to Jira failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response without `key`, `id` and `self`
    #[error("unexpected response from Jira: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for Jira operations
pub type JiraResult<T> = Result<T, JiraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_lists_every_field() {
        let err = ValidationError::MissingFields(vec!["summary", "issuetype"]);
        assert_eq!(
            err.to_string(),
            "missing required field(s): summary, issuetype"
        );
    }

    #[test]
    fn test_tracker_error_carries_status_and_body() {
        let err = JiraError::Tracker {
            status: 400,
            body: r#"{"errorMessages":["bad issuetype"]}"#.to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("400"));
        assert!(message.contains(r#"{"errorMessages":["bad issuetype"]}"#));
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: JiraError = ValidationError::InvalidDocument.into();
        assert!(err.to_string().starts_with("invalid rich-text document"));
    }
}
