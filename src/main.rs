//! CLI for msgfeed
//!
//! Subcommands:
//! - `fetch`: fetch messages from the selected endpoint (or all of them)
//! - `demo`: print the fixture messages used in demo mode

use std::path::PathBuf;

use clap::Parser;
use msgfeed::config::{Settings, load_config};
use msgfeed::fetcher::service::reqwest_transport;
use msgfeed::fetcher::{MessageFetcher, MessageSource, fetch_all};
use msgfeed::fixture::{FixtureProvider, demo_provider};
use msgfeed::utils::logging;
use serde_json::json;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "msgfeed")]
enum Command {
    /// Fetch messages from the configured endpoint
    Fetch {
        /// Use the endpoint at this position instead of `fetcher.endpoint_index`.
        /// Always fetches live data, even in demo mode.
        #[arg(long)]
        endpoint: Option<usize>,
        /// Fetch from every configured endpoint concurrently
        #[arg(long, conflicts_with = "endpoint")]
        all: bool,
    },
    /// Print the demo fixture messages
    Demo {
        /// Fixture file to load instead of the bundled one
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cmd = Command::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&config.logging.level);

    let result = match cmd {
        Command::Fetch { all: true, .. } => run_fetch_all(&config).await,
        Command::Fetch { endpoint, .. } => run_fetch(&config, endpoint).await,
        Command::Demo { fixture } => run_demo(&config, fixture).await,
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run_fetch(
    config: &Settings,
    endpoint: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    if endpoint.is_none() {
        if let Some(provider) = demo_provider(config)? {
            return print_messages(&provider).await;
        }
    }

    let target = match endpoint {
        Some(index) => config.endpoint(index)?,
        None => config.selected_endpoint()?,
    };
    info!("Fetching messages from {} ({})", target.url, target.source);

    let fetcher = MessageFetcher::new(reqwest_transport(config)?, target.clone());
    print_messages(&fetcher).await
}

async fn run_fetch_all(config: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(provider) = demo_provider(config)? {
        return print_messages(&provider).await;
    }

    let transport = reqwest_transport(config)?;
    let fetchers: Vec<_> = config
        .endpoints
        .iter()
        .map(|endpoint| MessageFetcher::new(transport.clone(), endpoint.clone()))
        .collect();

    let mut output = Vec::new();
    for (source, result) in fetch_all(&fetchers).await {
        output.push(match result {
            Ok(messages) => json!({ "source": source, "messages": messages }),
            Err(e) => json!({ "source": source, "error": e.to_string() }),
        });
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run_demo(
    config: &Settings,
    fixture: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = match fixture {
        Some(path) => FixtureProvider::from_path(path)?,
        None => FixtureProvider::from_settings(config)?,
    };
    print_messages(&provider).await
}

async fn print_messages(source: &dyn MessageSource) -> Result<(), Box<dyn std::error::Error>> {
    let messages = source.fetch_messages().await?;
    println!("{}", serde_json::to_string_pretty(&messages)?);
    Ok(())
}
