//! Result helpers for MCP tool responses

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

/// A successful response carrying a single text block
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// A successful text response plus a machine-readable side channel
///
/// `data` is attached as structured content so UIs and agents can read
/// identifiers without parsing the human-readable text.
///
/// ```rust,ignore
/// text_with_data(
///     "Created Jira issue PROJ-1",
///     serde_json::json!({ "issueKey": "PROJ-1" }),
/// )
/// ```
pub fn text_with_data(text: impl Into<String>, data: Value) -> CallToolResult {
    let mut result = text_success(text);
    result.structured_content = Some(data);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_success() {
        let result = text_success("hello world");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
        assert!(result.structured_content.is_none());
    }

    #[test]
    fn test_text_with_data_attaches_structured_content() {
        let result = text_with_data("done", json!({ "issueKey": "PROJ-7" }));
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
        assert_eq!(
            result.structured_content,
            Some(json!({ "issueKey": "PROJ-7" }))
        );
    }
}
