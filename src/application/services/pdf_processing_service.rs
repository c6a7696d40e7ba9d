use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, ExtractionError, TextExtractor,
};
use crate::domain::{ExtractionResult, StoredArtifact};

/// Persists an uploaded PDF and, when enabled, extracts its text.
pub struct PdfProcessingService<S, E>
where
    S: ArtifactStore + ?Sized,
    E: TextExtractor + ?Sized,
{
    store: Arc<S>,
    extractor: Arc<E>,
    extract_text: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedPdf {
    pub artifact: StoredArtifact,
    pub extraction: ExtractionResult,
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("failed to store PDF: {0}")]
    Storage(#[from] ArtifactStoreError),
    #[error("failed to extract PDF text: {0}")]
    Extraction(#[from] ExtractionError),
}

impl<S, E> PdfProcessingService<S, E>
where
    S: ArtifactStore + ?Sized,
    E: TextExtractor + ?Sized,
{
    pub fn new(store: Arc<S>, extractor: Arc<E>, extract_text: bool) -> Self {
        Self {
            store,
            extractor,
            extract_text,
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn process(
        &self,
        filename: &str,
        data: Bytes,
    ) -> Result<ProcessedPdf, ProcessingError> {
        let artifact = self.store.persist(filename, data.clone()).await?;
        tracing::debug!(path = %artifact, "PDF persisted");

        let extraction = if self.extract_text {
            let text = self.extractor.extract_text(&data).await?;
            tracing::debug!(chars = text.chars().count(), "PDF text extracted");
            ExtractionResult::with_text(text)
        } else {
            ExtractionResult::absent()
        };

        Ok(ProcessedPdf {
            artifact,
            extraction,
        })
    }
}
