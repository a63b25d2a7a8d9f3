/// Image byte retrieval
///
/// Collections come in two layouts: image binaries on disk next to the
/// tag files, or base64 payloads embedded in the records themselves.
/// The compiled-in [`RetrievalMode`](crate::config::RetrievalMode)
/// decides which path is used.
use base64::Engine;
use std::path::PathBuf;
use tokio::task;

use crate::config::RetrievalMode;
use crate::error::BrowserError;
use crate::media::thumbnail::{self, Thumbnail};
use crate::state::record::TagRecord;

/// Fetch the encoded bytes for one image.
pub async fn load_image_bytes(
    mode: RetrievalMode,
    image_dir: PathBuf,
    id: &str,
    record: &TagRecord,
) -> Result<Vec<u8>, BrowserError> {
    match mode {
        RetrievalMode::Filesystem => read_image_file(image_dir.join(id)).await,
        RetrievalMode::Embedded => decode_embedded(id, record),
    }
}

/// Fetch and decode one grid thumbnail.
///
/// Decoding and resizing are CPU-bound, so they run on the blocking
/// thread pool instead of the UI executor.
pub async fn load_thumbnail(
    mode: RetrievalMode,
    image_dir: PathBuf,
    id: String,
    record: TagRecord,
) -> Result<Thumbnail, BrowserError> {
    let bytes = load_image_bytes(mode, image_dir, &id, &record).await?;

    task::spawn_blocking(move || thumbnail::make_thumbnail(&bytes))
        .await
        .map_err(|e| BrowserError::task_failed(e.to_string()))?
}

/// Read raw image bytes from `<image_dir>/<image_id>`.
async fn read_image_file(path: PathBuf) -> Result<Vec<u8>, BrowserError> {
    if !path.exists() {
        return Err(BrowserError::ImageNotFound { path });
    }

    Ok(tokio::fs::read(&path).await?)
}

/// Decode the record's embedded payload as standard base64.
fn decode_embedded(id: &str, record: &TagRecord) -> Result<Vec<u8>, BrowserError> {
    let encoded = record
        .encoded_bytes
        .as_deref()
        .ok_or_else(|| BrowserError::MissingImageData { id: id.to_string() })?;

    Ok(base64::engine::general_purpose::STANDARD.decode(encoded)?)
}
