//! Résumé upload handling: file-type check and PDF text extraction.

use bytes::Bytes;
use tracing::{debug, warn};

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// True when `filename` has an allowed extension (case-insensitive).
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Extracts the text of a PDF.
///
/// Malformed or empty documents yield an empty string, never an error: the
/// caller treats that as "no skills detected". The parser runs on the blocking
/// pool, which also contains any panic it raises on hostile input.
pub async fn extract_text_from_pdf(data: Bytes) -> String {
    let size = data.len();
    let result = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await;

    match result {
        Ok(Ok(text)) => {
            debug!("Extracted {} chars from {size}-byte PDF", text.len());
            text
        }
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {e}");
            String::new()
        }
        Err(e) => {
            warn!("PDF text extraction aborted: {e}");
            String::new()
        }
    }
}
