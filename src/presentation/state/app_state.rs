use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ArtifactStore, TextExtractor};
use crate::application::services::PdfProcessingService;

/// Directory served read-only under a URL prefix.
#[derive(Debug, Clone)]
pub struct PublicUploads {
    pub dir: PathBuf,
    pub public_prefix: String,
}

pub struct AppState<S, E>
where
    S: ArtifactStore + ?Sized,
    E: TextExtractor + ?Sized,
{
    pub processing_service: Arc<PdfProcessingService<S, E>>,
    pub public_uploads: Option<PublicUploads>,
}

impl<S, E> Clone for AppState<S, E>
where
    S: ArtifactStore + ?Sized,
    E: TextExtractor + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            processing_service: Arc::clone(&self.processing_service),
            public_uploads: self.public_uploads.clone(),
        }
    }
}
