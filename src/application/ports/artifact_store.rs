use std::io;

use bytes::Bytes;

use crate::domain::StoredArtifact;

/// Durable drop for uploaded files.
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Writes `data` under `filename`, replacing any file of the same name.
    async fn persist(
        &self,
        filename: &str,
        data: Bytes,
    ) -> Result<StoredArtifact, ArtifactStoreError>;

    async fn fetch(&self, artifact: &StoredArtifact) -> Result<Vec<u8>, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("invalid filename: {0:?}")]
    InvalidFilename(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
