//! Dataset archive download stage.

use std::fs;
use std::path::PathBuf;

use tokio::time::{sleep, Duration};
use tracing::{info, warn};

use moviechain_core::{ChainError, ChainResult};

use crate::IngestConfig;

const DOWNLOAD_ATTEMPTS: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_secs(2);

/// Fetch the dataset archive into the data directory.
///
/// Transport failures and non-2xx responses are `Network` errors and
/// are retried a bounded number of times with doubling backoff; a
/// response that is not a zip archive (or arrives truncated) is an
/// `Integrity` error and is not retried.
pub async fn download(config: &IngestConfig) -> ChainResult<PathBuf> {
    fs::create_dir_all(&config.data_dir)?;

    info!(url = %config.dataset_url, "downloading dataset archive");

    let mut delay = RETRY_BASE_DELAY;
    let mut attempt = 0;
    let bytes = loop {
        attempt += 1;
        match fetch(&config.dataset_url).await {
            Ok(bytes) => break bytes,
            Err(err) if err.is_retryable() && attempt < DOWNLOAD_ATTEMPTS => {
                warn!(attempt, error = %err, "download failed, retrying");
                sleep(delay).await;
                delay *= 2;
            }
            Err(err) => return Err(err),
        }
    };

    // Zip local-file-header magic; anything else means we fetched an
    // error page or a truncated body.
    if bytes.len() < 4 || &bytes[..2] != b"PK" {
        return Err(ChainError::Integrity(
            "downloaded archive is not a zip file".to_string(),
        ));
    }

    let archive = config.archive_path();
    fs::write(&archive, &bytes)?;
    info!(path = %archive.display(), bytes = bytes.len(), "download complete");

    Ok(archive)
}

async fn fetch(url: &str) -> ChainResult<bytes::Bytes> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| ChainError::Network(e.to_string()))?
        .error_for_status()
        .map_err(|e| ChainError::Network(e.to_string()))?;

    let expected = response.content_length();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ChainError::Network(e.to_string()))?;

    if let Some(expected) = expected {
        if bytes.len() as u64 != expected {
            return Err(ChainError::Integrity(format!(
                "truncated download: got {} of {} bytes",
                bytes.len(),
                expected
            )));
        }
    }

    Ok(bytes)
}
