//! MovieChain CLI.
//!
//! Movies connected through shared actors: dataset ingestion, bounded
//! path traversal and the API server, from one binary.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Cli;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "moviechain=info,moviechain_graph=info,moviechain_ingest=info,moviechain_web=debug".into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    Cli::parse().execute().await
}
