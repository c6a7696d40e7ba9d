use async_trait::async_trait;

use crate::domain::{ExtractionResult, StoredArtifact, UploadedFile};

/// Client side of the PDF processing endpoint.
#[async_trait]
pub trait UploadGateway: Send + Sync {
    async fn upload(&self, file: &UploadedFile) -> Result<UploadReceipt, UploadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    pub artifact: StoredArtifact,
    pub message: String,
    pub extraction: ExtractionResult,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The endpoint answered with a structured failure payload.
    #[error("{0}")]
    Rejected(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("network failure: {0}")]
    Network(String),
}
