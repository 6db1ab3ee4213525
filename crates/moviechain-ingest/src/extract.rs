//! Archive extraction stage.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use moviechain_core::{ChainError, ChainResult};

use crate::{IngestConfig, RAW_DATASET_FILE};

/// Unpack the downloaded archive into the data directory.
///
/// The archive is removed after a successful extraction; a bad zip or
/// an archive that does not contain the raw dataset is a `Format`
/// error.
pub fn extract(config: &IngestConfig) -> ChainResult<PathBuf> {
    let archive_path = config.archive_path();
    if !archive_path.exists() {
        return Err(ChainError::format(format!(
            "{} not found; run the download stage first",
            archive_path.display()
        )));
    }

    info!(path = %archive_path.display(), "unpacking archive");

    let file = fs::File::open(&archive_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| ChainError::format(format!("unreadable archive: {e}")))?;
    archive
        .extract(&config.data_dir)
        .map_err(|e| ChainError::format(format!("extraction failed: {e}")))?;

    let raw = config.raw_csv_path();
    if !raw.exists() {
        return Err(ChainError::format(format!(
            "archive did not contain {RAW_DATASET_FILE}"
        )));
    }

    fs::remove_file(&archive_path)?;
    info!(path = %raw.display(), "extraction complete");

    Ok(raw)
}
