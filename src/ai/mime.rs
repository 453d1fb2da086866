pub fn detect_document_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x25, 0x50, 0x44, 0x46, ..] => "application/pdf",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        _ => {
            tracing::warn!(
                "Unrecognized document format (first 4 bytes: {:02X?}), falling back to application/pdf",
                &bytes[..bytes.len().min(4)]
            );
            "application/pdf"
        }
    }
}
