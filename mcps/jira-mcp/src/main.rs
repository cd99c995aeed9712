//! Jira MCP Server
//!
//! Creates Jira issues on behalf of MCP clients.
//!
//! ```text
//! jira-mcp            # stdio transport (default)
//! jira-mcp http       # streamable HTTP on $PORT
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use jira_mcp::config::{DeploymentMode, HttpConfig, JiraConfig};
use jira_mcp::jira::IssueCreator;
use jira_mcp::{web, JiraMcpServer};

#[derive(Parser)]
#[command(name = "jira-mcp", version, about = "MCP server that creates Jira issues")]
struct Cli {
    #[command(flatten)]
    jira: JiraArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct JiraArgs {
    /// Jira Cloud site, e.g. https://your-team.atlassian.net
    #[arg(long = "jira-base-url", env = "JIRA_BASE_URL")]
    base_url: String,

    /// Account email used for API token authentication
    #[arg(long = "jira-email", env = "JIRA_EMAIL")]
    email: String,

    #[arg(long = "jira-api-token", env = "JIRA_API_TOKEN", hide_env_values = true)]
    api_token: String,

    /// Project that new issues are created in
    #[arg(long = "jira-project-key", env = "JIRA_PROJECT_KEY")]
    project_key: String,
}

#[derive(Subcommand)]
enum Command {
    /// Serve MCP over stdin/stdout
    Stdio,
    /// Serve MCP and the REST endpoint over HTTP
    Http(HttpArgs),
}

#[derive(Args)]
struct HttpArgs {
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Shared secret required on every non-health request
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Deployment environment; `production` requires an API key
    #[arg(long, env = "NODE_ENV", default_value = "development")]
    environment: String,

    /// Accepts true/false, yes/no, on/off, 1/0
    #[arg(
        long,
        env = "USE_HTTPS",
        default_value_t = false,
        action = clap::ArgAction::Set,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    use_https: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    mcp_common::init_tracing("jira_mcp")?;

    let jira = JiraConfig::new(
        &cli.jira.base_url,
        &cli.jira.email,
        &cli.jira.api_token,
        &cli.jira.project_key,
    )?;
    tracing::info!("Jira site: {}, project: {}", jira.base_url(), jira.project_key());

    let creator = Arc::new(IssueCreator::from_config(&jira)?);

    match cli.command.unwrap_or(Command::Stdio) {
        Command::Stdio => {
            mcp_common::serve_stdio(JiraMcpServer::new(creator), "jira-mcp").await
        }
        Command::Http(args) => {
            let mode = DeploymentMode::from_env_value(&args.environment);
            let config = HttpConfig::new(args.port, args.api_key, mode, args.use_https)?;
            tracing::info!("HTTP transport in {:?} mode", config.mode);
            web::serve(config, creator).await
        }
    }
}
