//! Path traversal command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use moviechain_core::{PathEntity, PathRecord, DEFAULT_MAX_HOPS};
use moviechain_graph::GraphClient;
use moviechain_ingest::IngestConfig;

#[derive(Args)]
pub struct PathsArgs {
    /// Start movie title (exact match)
    pub title: String,

    /// Maximum relationship hops from the anchor
    #[arg(long, default_value_t = DEFAULT_MAX_HOPS)]
    pub max_hops: i64,

    /// Cap the number of paths returned
    #[arg(long)]
    pub limit: Option<usize>,

    /// Traverse the chunked dataset on disk instead of the store
    #[arg(long)]
    pub offline: bool,

    /// Data directory holding chunk partitions (offline mode)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Print raw JSON instead of the formatted listing
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: PathsArgs) -> Result<()> {
    let paths = if args.offline {
        let mut config = IngestConfig::from_env();
        if let Some(dir) = args.data_dir {
            config.data_dir = dir;
        }
        let graph = moviechain_ingest::build_local_graph(&config)?;
        println!(
            "{} offline graph: {} movies, {} actors, {} credits",
            "→".blue().bold(),
            graph.movie_count(),
            graph.actor_count(),
            graph.credit_count()
        );
        graph.find_paths(&args.title, args.max_hops, args.limit)?
    } else {
        let client = GraphClient::connect_env().await?;
        moviechain_graph::find_paths(&client, &args.title, args.max_hops, args.limit).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    if paths.is_empty() {
        println!("{}", "No paths found.".dimmed());
        return Ok(());
    }

    println!(
        "{} {} (max {} hops)",
        "Paths from".bold(),
        args.title.cyan(),
        args.max_hops
    );
    println!("{}", "─".repeat(50));
    for path in &paths {
        println!("  {} ({} hops)", render_path(path), path.hops());
    }
    println!("\n{} paths found.", paths.len().to_string().bold());

    Ok(())
}

fn render_path(path: &PathRecord) -> String {
    path.entities
        .iter()
        .map(|entity| match entity {
            PathEntity::Movie { title, .. } => title.cyan().to_string(),
            PathEntity::Actor { name, .. } => name.yellow().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" - ")
}
