//! Reads a document from disk and encodes it for inline upload.

use crate::ai::mime::detect_document_mime;
use crate::models::EncodedDocument;
use crate::{Error, Result};
use base64::Engine as _;
use std::path::Path;

/// Read `path` in full and base64-encode it.
///
/// When `mime_type` is `None` the media type is sniffed from the file's
/// leading bytes.
pub async fn encode_document(path: &Path, mime_type: Option<&str>) -> Result<EncodedDocument> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        tracing::error!("Error reading file {}: {}", path.display(), source);
        Error::InputRead {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let document = encode_bytes(&bytes, mime_type);
    tracing::info!(
        "Prepared file: {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        document.mime_type
    );
    Ok(document)
}

pub fn encode_bytes(bytes: &[u8], mime_type: Option<&str>) -> EncodedDocument {
    let mime_type = mime_type
        .map(str::to_string)
        .unwrap_or_else(|| detect_document_mime(bytes).to_string());

    EncodedDocument {
        mime_type,
        data: base64::engine::general_purpose::STANDARD.encode(bytes),
    }
}
