//! Title suggestion command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use moviechain_graph::{GraphClient, DEFAULT_SUGGESTION_LIMIT};
use moviechain_ingest::IngestConfig;

#[derive(Args)]
pub struct SuggestArgs {
    /// Title fragment to match (case-insensitive substring)
    pub fragment: String,

    /// Maximum number of suggestions
    #[arg(long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    pub limit: usize,

    /// Match against the chunked dataset on disk instead of the store
    #[arg(long)]
    pub offline: bool,

    /// Data directory holding chunk partitions (offline mode)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Print raw JSON instead of the formatted listing
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: SuggestArgs) -> Result<()> {
    let suggestions = if args.offline {
        let mut config = IngestConfig::from_env();
        if let Some(dir) = args.data_dir {
            config.data_dir = dir;
        }
        let graph = moviechain_ingest::build_local_graph(&config)?;
        graph.suggest(&args.fragment, args.limit)
    } else {
        let client = GraphClient::connect_env().await?;
        moviechain_graph::suggest_titles(&client, &args.fragment, args.limit).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("{}", "No matching titles.".dimmed());
        return Ok(());
    }

    for movie in &suggestions {
        let year = movie
            .release_date
            .as_deref()
            .map(|d| d.chars().take(4).collect::<String>())
            .unwrap_or_else(|| "----".to_string());
        println!("  {} {} ({})", "•".dimmed(), movie.title.cyan(), year.dimmed());
    }

    Ok(())
}
