use anyhow::{Context, Result};
use std::sync::Arc;

use instacap::cli::{Cli, Commands};
use instacap::core::{config, init_logger};
use instacap::server::handlers::extract_post;
use instacap::{build_router, serve, InstagramClient, PostFetcher};

/// Entry point
///
/// Parses CLI arguments and dispatches to the requested subcommand; with no
/// subcommand the HTTP API is started with HOST/PORT from the environment.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before config is read
    let _ = dotenvy::dotenv();

    init_logger()?;

    let fetcher = PostFetcher::new(Arc::new(InstagramClient::default()));

    match cli.command {
        Some(Commands::Serve { host, port }) => run_server(fetcher, host, port).await,
        Some(Commands::Extract { url }) => run_cli_extract(fetcher, &url).await,
        None => {
            log::info!("No command specified, starting API server");
            run_server(fetcher, None, None).await
        }
    }
}

/// Run the HTTP API until a shutdown signal arrives
async fn run_server(fetcher: PostFetcher, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config::HOST.clone());
    let port = port.unwrap_or(*config::PORT);

    log::info!("Post source: {}", fetcher.source_name());

    let router = build_router(fetcher);
    serve((host.as_str(), port), router)
        .await
        .with_context(|| format!("HTTP server on {}:{} failed", host, port))
}

/// Extract one post and print it to stdout
async fn run_cli_extract(fetcher: PostFetcher, url: &str) -> Result<()> {
    let metadata = extract_post(&fetcher, url).await?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
