//! Startup configuration
//!
//! Values arrive from the command line or the environment (see `main.rs`)
//! and are validated here exactly once. Nothing reads the environment after
//! startup: the structs below are handed to the components that need them.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;
use url::Url;

/// Errors that stop the process before any transport starts
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value is absent or blank
    #[error("missing required configuration value {0}")]
    Missing(&'static str),

    /// The Jira base URL is not an absolute http(s) URL
    #[error("invalid JIRA_BASE_URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    /// Production deployments must gate the HTTP surface
    #[error("API_KEY is required when running in production mode")]
    ApiKeyRequired,
}

/// Connection settings for the Jira Cloud REST API
#[derive(Clone)]
pub struct JiraConfig {
    base_url: Url,
    email: String,
    api_token: String,
    project_key: String,
}

impl JiraConfig {
    pub fn new(
        base_url: &str,
        email: &str,
        api_token: &str,
        project_key: &str,
    ) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        let email = required("JIRA_EMAIL", email)?;
        let api_token = required("JIRA_API_TOKEN", api_token)?;
        let project_key = required("JIRA_PROJECT_KEY", project_key)?;

        Ok(Self {
            base_url,
            email,
            api_token,
            project_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// `{base}/rest/api/3/issue`, with any trailing slash on the base dropped
    pub fn issue_endpoint(&self) -> String {
        format!(
            "{}/rest/api/3/issue",
            self.base_url.as_str().trim_end_matches('/')
        )
    }

    /// Value for the `Authorization` header
    pub fn authorization(&self) -> String {
        let credentials = format!("{}:{}", self.email, self.api_token);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

impl std::fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraConfig")
            .field("base_url", &self.base_url.as_str())
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .field("project_key", &self.project_key)
            .finish()
    }
}

fn required(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Missing(name));
    }
    Ok(value.to_string())
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let value = required("JIRA_BASE_URL", value)?;
    let url = Url::parse(&value).map_err(|e| ConfigError::InvalidUrl {
        value: value.clone(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            value,
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// Deployment mode, taken from `NODE_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    #[default]
    Development,
    Production,
}

impl DeploymentMode {
    /// Only `production` (any case) selects production; everything else is development
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// Settings for the HTTP transport
#[derive(Clone)]
pub struct HttpConfig {
    pub port: u16,
    pub api_key: Option<String>,
    pub mode: DeploymentMode,
    pub use_https: bool,
}

impl HttpConfig {
    pub fn new(
        port: u16,
        api_key: Option<String>,
        mode: DeploymentMode,
        use_https: bool,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if mode == DeploymentMode::Production && api_key.is_none() {
            return Err(ConfigError::ApiKeyRequired);
        }

        Ok(Self {
            port,
            api_key,
            mode,
            use_https,
        })
    }
}

impl std::fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfig")
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("mode", &self.mode)
            .field("use_https", &self.use_https)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jira() -> JiraConfig {
        JiraConfig::new(
            "https://example.atlassian.net/",
            "dev@example.com",
            "secret-token",
            "PROJ",
        )
        .unwrap()
    }

    #[test]
    fn test_issue_endpoint_drops_trailing_slash() {
        assert_eq!(
            jira().issue_endpoint(),
            "https://example.atlassian.net/rest/api/3/issue"
        );
    }

    #[test]
    fn test_authorization_is_basic_email_and_token() {
        // base64("dev@example.com:secret-token")
        assert_eq!(
            jira().authorization(),
            "Basic ZGV2QGV4YW1wbGUuY29tOnNlY3JldC10b2tlbg=="
        );
    }

    #[test]
    fn test_blank_values_are_missing() {
        let err = JiraConfig::new("https://x.atlassian.net", " ", "t", "P").unwrap_err();
        assert_eq!(err, ConfigError::Missing("JIRA_EMAIL"));

        let err = JiraConfig::new("", "e", "t", "P").unwrap_err();
        assert_eq!(err, ConfigError::Missing("JIRA_BASE_URL"));

        let err = JiraConfig::new("https://x.atlassian.net", "e", "", "P").unwrap_err();
        assert_eq!(err, ConfigError::Missing("JIRA_API_TOKEN"));

        let err = JiraConfig::new("https://x.atlassian.net", "e", "t", "").unwrap_err();
        assert_eq!(err, ConfigError::Missing("JIRA_PROJECT_KEY"));
    }

    #[test]
    fn test_base_url_must_be_http() {
        let err = JiraConfig::new("not a url", "e", "t", "P").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));

        let err = JiraConfig::new("ftp://x.example.com", "e", "t", "P").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", jira());
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("PROJ"));
    }

    #[test]
    fn test_deployment_mode_from_env_value() {
        assert_eq!(
            DeploymentMode::from_env_value("production"),
            DeploymentMode::Production
        );
        assert_eq!(
            DeploymentMode::from_env_value("PRODUCTION"),
            DeploymentMode::Production
        );
        assert_eq!(
            DeploymentMode::from_env_value("staging"),
            DeploymentMode::Development
        );
        assert_eq!(
            DeploymentMode::from_env_value(""),
            DeploymentMode::Development
        );
    }

    #[test]
    fn test_production_requires_api_key() {
        let err = HttpConfig::new(3000, None, DeploymentMode::Production, false).unwrap_err();
        assert_eq!(err, ConfigError::ApiKeyRequired);

        let err = HttpConfig::new(
            3000,
            Some("  ".to_string()),
            DeploymentMode::Production,
            false,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::ApiKeyRequired);

        let config = HttpConfig::new(
            3000,
            Some("k".to_string()),
            DeploymentMode::Production,
            false,
        )
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_development_allows_missing_api_key() {
        let config = HttpConfig::new(8080, None, DeploymentMode::Development, true).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.port, 8080);
        assert!(config.use_https);
    }
}
