//! Persists the model's response text.

use crate::{Error, Result};
use std::path::Path;

/// Write `text` verbatim to `path`, replacing any existing contents.
pub async fn write_response(path: &Path, text: &str) -> Result<()> {
    tokio::fs::write(path, text.as_bytes())
        .await
        .map_err(|source| Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Response saved to '{}'", path.display());
    Ok(())
}
