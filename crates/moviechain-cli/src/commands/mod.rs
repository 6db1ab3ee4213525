//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod ingest;
pub mod paths;
pub mod serve;
pub mod status;
pub mod suggest;

/// MovieChain - movies connected through shared actors
#[derive(Parser)]
#[command(name = "moviechain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run dataset ingestion stages in the given order
    Ingest(ingest::IngestArgs),

    /// Start the API server
    Serve(serve::ServeArgs),

    /// Find actor-linked paths from a movie title
    Paths(paths::PathsArgs),

    /// Look up title suggestions
    Suggest(suggest::SuggestArgs),

    /// Show graph store status
    Status,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Ingest(args) => ingest::execute(args).await,
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Paths(args) => paths::execute(args).await,
            Commands::Suggest(args) => suggest::execute(args).await,
            Commands::Status => status::execute().await,
        }
    }
}
