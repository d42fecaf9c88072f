mod formatter;
mod github;
mod log_sink;
mod report;
use crate::github::prelude::*;
use crate::log_sink::TracingSink;
use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(version, about = "List your most recently created GitHub repositories")]
struct Cli {
    #[arg(
        long,
        value_name = "HOST",
        default_value = "github.com",
        help = "Target GitHub hostname",
        env = "GH_HOST"
    )]
    hostname: String,
    #[arg(
        long,
        value_name = "URL",
        help = "GraphQL endpoint, derived from the hostname when omitted",
        env = "GH_GRAPHQL_URL"
    )]
    endpoint: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let Cli { hostname, endpoint } = Cli::parse();

    let token = fetch_token(&hostname);
    if token.is_none() {
        tracing::warn!(host = %hostname, "no access token found; sending unauthenticated request");
    }
    let endpoint = endpoint.unwrap_or_else(|| graphql_endpoint(&hostname));
    let config = QueryConfig::new(endpoint, token.as_deref(), VIEWER_REPOSITORIES_QUERY);
    tracing::debug!(?config, "querying viewer repositories");

    let transport = HttpTransport::new()?;
    let sink = TracingSink;

    let response = execute_graphql_query(&transport, &sink, &config).await;
    report::handle_graphql_response(&sink, response)
}

fn init_logger() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
