use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Whole-document text extraction backed by `pdf-extract`.
#[derive(Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8]) -> Result<String, ExtractionError> {
        let data = data.to_vec();

        // On timeout only the wait is abandoned; the blocking task runs to completion
        // in the background and its result is dropped.
        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)),
        )
        .await
        .map_err(|_| ExtractionError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("extraction task failed: {e}")))?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let text = text.trim().to_string();
        tracing::info!(chars = text.chars().count(), "PDF text extraction complete");

        Ok(text)
    }
}
