//! # MovieChain Ingest
//!
//! Dataset ingestion pipeline: fetch the raw movie/credits export,
//! unpack it, partition it by decade, and load the partitions into the
//! graph store as Movie/Actor nodes and ACTED_IN relationships.
//!
//! Each stage is independently invocable and idempotent; stages hand
//! work to each other through conventional locations under the data
//! directory, not through parameters.

pub mod chunk;
pub mod dataset;
pub mod download;
pub mod extract;
pub mod load;
pub mod offline;

use std::fmt;
use std::path::PathBuf;

use tracing::info;

use moviechain_core::{ChainError, ChainResult};
use moviechain_graph::GraphClient;

pub use chunk::{chunk, partition_files, ChunkSummary};
pub use dataset::{MovieRow, FALLBACK_PARTITION};
pub use download::download;
pub use extract::extract;
pub use load::{load, LoadSummary};
pub use offline::build_local_graph;

/// File name of the raw dataset inside the downloaded archive.
pub const RAW_DATASET_FILE: &str = "TMDB_all_movies.csv";

const DEFAULT_DATA_DIR: &str = "data/chunks";
const DEFAULT_DATASET_URL: &str =
    "https://www.kaggle.com/api/v1/datasets/download/alanvourch/tmdb-movies-daily-updates";

/// Filesystem and source locations shared by the pipeline stages.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub data_dir: PathBuf,
    pub dataset_url: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            dataset_url: DEFAULT_DATASET_URL.to_string(),
        }
    }
}

impl IngestConfig {
    /// Read locations from `MOVIECHAIN_DATA_DIR` and
    /// `MOVIECHAIN_DATASET_URL`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: std::env::var("MOVIECHAIN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            dataset_url: std::env::var("MOVIECHAIN_DATASET_URL").unwrap_or(defaults.dataset_url),
        }
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Where `download` writes the archive.
    pub fn archive_path(&self) -> PathBuf {
        self.data_dir.join("archive.zip")
    }

    /// Where `extract` leaves the raw dataset.
    pub fn raw_csv_path(&self) -> PathBuf {
        self.data_dir.join(RAW_DATASET_FILE)
    }

    /// Where `chunk` writes a named partition.
    pub fn partition_path(&self, partition: &str) -> PathBuf {
        self.data_dir.join(format!("{partition}_movies.csv"))
    }
}

/// A pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Download,
    Extract,
    Chunk,
    Load,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Download => "download",
            Self::Extract => "extract",
            Self::Chunk => "chunk",
            Self::Load => "load",
        };
        f.write_str(name)
    }
}

/// Run stages in the caller's order.
///
/// `client` is only required when the list contains [`Stage::Load`];
/// the earlier stages are pure filesystem work and run without a store.
pub async fn run_stages(
    stages: &[Stage],
    config: &IngestConfig,
    client: Option<&GraphClient>,
) -> ChainResult<()> {
    for stage in stages {
        info!(stage = %stage, "starting stage");
        match stage {
            Stage::Download => {
                download::download(config).await?;
            }
            Stage::Extract => {
                extract::extract(config)?;
            }
            Stage::Chunk => {
                chunk::chunk(config)?;
            }
            Stage::Load => {
                let store = client.ok_or_else(|| {
                    ChainError::invalid_argument("load stage requires a graph store connection")
                })?;
                load::load(config, store).await?;
            }
        }
        info!(stage = %stage, "completed stage");
    }
    Ok(())
}
