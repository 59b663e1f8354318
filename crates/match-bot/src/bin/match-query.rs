//! One-off latest-match query against the record service.

use clap::Parser;
use match_bot::config::default_matches_url;
use match_client::MatchClient;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "match-query")]
#[command(about = "Fetch a player's latest match record", long_about = None)]
struct Cli {
    /// Player account id
    #[arg(default_value = "417817047")]
    account_id: String,

    /// Base URL of the record service
    #[arg(long, value_name = "URL", default_value_t = default_matches_url())]
    base_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = match MatchClient::new(&cli.base_url, None) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create match client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.latest_match(Some(&cli.account_id)).await {
        Ok(body) => {
            println!("{}", body);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Query failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
