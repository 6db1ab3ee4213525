//! Decade partitioning stage.
//!
//! Splits the raw dataset into one CSV per release decade, sized for a
//! single load transaction each. Rows without a usable release date go
//! to the `undated` fallback partition instead of failing the run. The
//! output is deterministic: fixed column set, rows sorted by id, so
//! re-running `chunk` on the same input rewrites identical files.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use moviechain_core::{ChainError, ChainResult};

use crate::dataset::{MovieRow, FALLBACK_PARTITION};
use crate::IngestConfig;

/// What the chunk stage produced.
#[derive(Debug, Clone, Default)]
pub struct ChunkSummary {
    pub partitions: usize,
    pub rows: usize,
    pub undated: usize,
    pub skipped: usize,
}

/// Partition the raw dataset by decade of release.
pub fn chunk(config: &IngestConfig) -> ChainResult<ChunkSummary> {
    let raw = config.raw_csv_path();
    if !raw.exists() {
        return Err(ChainError::format(format!(
            "{} not found; run the extract stage first",
            raw.display()
        )));
    }

    info!(path = %raw.display(), "partitioning dataset by decade");

    let mut reader = csv::Reader::from_path(&raw)?;
    let mut partitions: BTreeMap<String, Vec<MovieRow>> = BTreeMap::new();
    let mut summary = ChunkSummary::default();

    for (line, result) in reader.deserialize::<MovieRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                warn!(line, error = %err, "skipping unreadable row");
                summary.skipped += 1;
                continue;
            }
        };
        if row.title.trim().is_empty() {
            summary.skipped += 1;
            continue;
        }

        let key = match row.decade() {
            Some(decade) => decade,
            None => {
                summary.undated += 1;
                FALLBACK_PARTITION.to_string()
            }
        };
        summary.rows += 1;
        partitions.entry(key).or_default().push(row);
    }

    if partitions.is_empty() {
        return Err(ChainError::format(
            "no usable rows in dataset; is the source file well-formed?",
        ));
    }

    for (partition, mut rows) in partitions {
        rows.sort_by_key(|row| row.id);
        let path = config.partition_path(&partition);
        let mut writer = csv::Writer::from_path(&path)?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!(partition = %partition, rows = rows.len(), "wrote partition");
        summary.partitions += 1;
    }

    Ok(summary)
}

/// Partition files currently in the data directory, in lexicographic
/// order (the order `load` will process them).
pub fn partition_files(config: &IngestConfig) -> ChainResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(&config.data_dir)? {
        let path = entry?.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if is_partition_name(name) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// `1990s_movies.csv` / `undated_movies.csv` — and not the raw
/// dataset, which also happens to end in `_movies.csv`.
fn is_partition_name(name: &str) -> bool {
    let Some(stem) = name.strip_suffix("_movies.csv") else {
        return false;
    };
    if stem == FALLBACK_PARTITION {
        return true;
    }
    match stem.strip_suffix('s') {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RAW_HEADER: &str = "id,title,release_date,overview,popularity,genres,poster_path,cast,vote_average\n";

    fn write_raw(config: &IngestConfig, body: &str) {
        let mut f = fs::File::create(config.raw_csv_path()).unwrap();
        f.write_all(RAW_HEADER.as_bytes()).unwrap();
        f.write_all(body.as_bytes()).unwrap();
    }

    fn sample(config: &IngestConfig) {
        // vote_average is an extra column the row model ignores.
        write_raw(
            config,
            "3,Heat,1995-12-15,Two cops.,42.5,\"Crime, Drama\",/heat.jpg,\"Al Pacino, Robert De Niro\",8.2\n\
             1,Inception,2010-07-15,A dream heist.,80.1,\"Action, Sci-Fi\",/inc.jpg,\"Leonardo DiCaprio, Elliot Page\",8.8\n\
             2,Mystery Reel,,Lost to time.,,,,\"Nobody Famous\",0\n",
        );
    }

    #[test]
    fn buckets_by_decade_with_undated_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let config = IngestConfig::with_data_dir(dir.path());
        sample(&config);

        let summary = chunk(&config).unwrap();
        assert_eq!(summary.partitions, 3);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.undated, 1);

        assert!(config.partition_path("1990s").exists());
        assert!(config.partition_path("2010s").exists());
        assert!(config.partition_path(FALLBACK_PARTITION).exists());
    }

    #[test]
    fn rechunking_identical_input_is_byte_stable() {
        let dir = tempfile::tempdir().unwrap();
        let config = IngestConfig::with_data_dir(dir.path());
        sample(&config);

        chunk(&config).unwrap();
        let first = fs::read(config.partition_path("1990s")).unwrap();

        chunk(&config).unwrap();
        let second = fs::read(config.partition_path("1990s")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_raw_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = IngestConfig::with_data_dir(dir.path());

        assert!(matches!(chunk(&config), Err(ChainError::Format(_))));
    }

    #[test]
    fn partition_listing_skips_the_raw_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let config = IngestConfig::with_data_dir(dir.path());
        sample(&config);
        chunk(&config).unwrap();

        let files = partition_files(&config).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            names,
            vec!["1990s_movies.csv", "2010s_movies.csv", "undated_movies.csv"]
        );
    }

    #[test]
    fn partition_name_filter() {
        assert!(is_partition_name("1990s_movies.csv"));
        assert!(is_partition_name("undated_movies.csv"));
        assert!(!is_partition_name("TMDB_all_movies.csv"));
        assert!(!is_partition_name("s_movies.csv"));
        assert!(!is_partition_name("1990s_movies.csv.bak"));
    }
}
