//! Dataset ingestion command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use moviechain_graph::GraphClient;
use moviechain_ingest::{IngestConfig, Stage};

#[derive(Args)]
pub struct IngestArgs {
    /// Stages to run, in order
    #[arg(required = true, value_enum)]
    pub stages: Vec<StageArg>,

    /// Data directory (defaults to $MOVIECHAIN_DATA_DIR or data/chunks)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StageArg {
    Download,
    Extract,
    Chunk,
    Load,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Download => Stage::Download,
            StageArg::Extract => Stage::Extract,
            StageArg::Chunk => Stage::Chunk,
            StageArg::Load => Stage::Load,
        }
    }
}

pub async fn execute(args: IngestArgs) -> Result<()> {
    let mut config = IngestConfig::from_env();
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let stages: Vec<Stage> = args.stages.iter().copied().map(Stage::from).collect();

    // The filesystem stages run without a store; only connect when the
    // plan actually loads.
    let client = if stages.contains(&Stage::Load) {
        Some(GraphClient::connect_env().await?)
    } else {
        None
    };

    moviechain_ingest::run_stages(&stages, &config, client.as_ref()).await?;

    let names: Vec<String> = stages.iter().map(ToString::to_string).collect();
    println!(
        "{} Ingestion finished: {}",
        "✓".green().bold(),
        names.join(", ")
    );

    Ok(())
}
