//! Graph load stage.
//!
//! Upserts Movie/Actor nodes and ACTED_IN relationships from the chunk
//! partitions. One partition is one transaction: an interrupted run
//! loses at most the in-flight partition, and because every write is a
//! MERGE keyed on the stable identifiers, re-running after a crash (or
//! on an already-loaded dataset) never duplicates anything.

use std::path::Path;

use indicatif::ProgressBar;
use neo4rs::Query;
use tracing::{error, info};

use moviechain_core::{ChainError, ChainResult};
use moviechain_graph::{classify_store_error, schema, GraphClient};

use crate::chunk::partition_files;
use crate::dataset::MovieRow;
use crate::IngestConfig;

const UPSERT_MOVIE: &str = "MERGE (m:Movie {id: $id})
SET m.title = $title,
    m.overview = $overview,
    m.release_date = $release_date,
    m.popularity = $popularity,
    m.genres = $genres,
    m.poster_path = $poster_path
WITH m
UNWIND $cast AS actor_name
MERGE (a:Actor {name: actor_name})
MERGE (a)-[:ACTED_IN]->(m)";

/// What the load stage wrote.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    pub partitions: usize,
    pub movies: usize,
    pub credits: usize,
}

/// Load every partition into the graph store.
pub async fn load(config: &IngestConfig, client: &GraphClient) -> ChainResult<LoadSummary> {
    schema::initialize_schema(client).await?;

    let files = partition_files(config)?;
    if files.is_empty() {
        return Err(ChainError::format(format!(
            "no partition files in {}; run the chunk stage first",
            config.data_dir.display()
        )));
    }

    let mut summary = LoadSummary::default();
    for file in &files {
        let counts = load_partition(client, file).await.inspect_err(|err| {
            error!(partition = %file.display(), error = %err, "partition load failed");
        })?;
        summary.partitions += 1;
        summary.movies += counts.movies;
        summary.credits += counts.credits;
    }

    info!(
        partitions = summary.partitions,
        movies = summary.movies,
        credits = summary.credits,
        "load complete"
    );
    Ok(summary)
}

struct PartitionCounts {
    movies: usize,
    credits: usize,
}

/// Load one partition inside a single transaction.
async fn load_partition(client: &GraphClient, path: &Path) -> ChainResult<PartitionCounts> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows: Vec<MovieRow> = reader.deserialize().collect::<Result<_, _>>()?;

    info!(partition = %path.display(), rows = rows.len(), "loading partition");
    let bar = ProgressBar::new(rows.len() as u64);

    let mut counts = PartitionCounts {
        movies: 0,
        credits: 0,
    };

    let mut txn = client
        .inner()
        .start_txn()
        .await
        .map_err(classify_store_error)?;

    for row in &rows {
        let cast = row.cast_names();
        txn.run(upsert_movie_query(row, &cast))
            .await
            .map_err(classify_store_error)?;
        counts.movies += 1;
        counts.credits += cast.len();
        bar.inc(1);
    }

    txn.commit().await.map_err(classify_store_error)?;
    bar.finish_and_clear();

    Ok(counts)
}

fn upsert_movie_query(row: &MovieRow, cast: &[String]) -> Query {
    Query::new(UPSERT_MOVIE.to_string())
        .param("id", row.id)
        .param("title", row.title.trim())
        .param("overview", row.overview.trim())
        .param("release_date", row.release_date.trim())
        .param("popularity", row.popularity)
        .param("genres", row.genre_list())
        .param("poster_path", row.poster_path.trim())
        .param("cast", cast.to_vec())
}
