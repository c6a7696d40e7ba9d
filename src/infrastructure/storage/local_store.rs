use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::StoredArtifact;

/// Writes uploads into a directory that is served under `public_prefix`.
///
/// Files land on disk under their upload name, byte for byte, so the public
/// path resolves through a static file server without any name mapping.
pub struct LocalArtifactStore {
    root: PathBuf,
    public_prefix: String,
}

impl LocalArtifactStore {
    pub fn new(
        root: PathBuf,
        public_prefix: impl Into<String>,
    ) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&root).map_err(ArtifactStoreError::Io)?;
        Ok(Self {
            root,
            public_prefix: public_prefix.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// A filename must stay a single entry inside the upload directory.
fn validate_filename(filename: &str) -> Result<(), ArtifactStoreError> {
    let invalid = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\', '\0']);
    if invalid {
        return Err(ArtifactStoreError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}

#[async_trait::async_trait]
impl ArtifactStore for LocalArtifactStore {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn persist(
        &self,
        filename: &str,
        data: Bytes,
    ) -> Result<StoredArtifact, ArtifactStoreError> {
        validate_filename(filename)?;

        tokio::fs::create_dir_all(&self.root).await?;

        // Staged next to the target so the rename stays on one filesystem.
        let staging = self
            .root
            .join(format!(".upload-{}.tmp", uuid::Uuid::new_v4()));
        if let Err(e) = tokio::fs::write(&staging, &data).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(ArtifactStoreError::WriteFailed(e.to_string()));
        }
        if let Err(e) = tokio::fs::rename(&staging, self.root.join(filename)).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(ArtifactStoreError::WriteFailed(e.to_string()));
        }

        let artifact = StoredArtifact::new(&self.public_prefix, filename);
        tracing::info!(
            path = %artifact,
            dir = %self.root.display(),
            "PDF written to upload directory"
        );
        Ok(artifact)
    }

    async fn fetch(&self, artifact: &StoredArtifact) -> Result<Vec<u8>, ArtifactStoreError> {
        let filename = artifact.filename();
        validate_filename(filename)?;

        tokio::fs::read(self.root.join(filename))
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    ArtifactStoreError::NotFound(artifact.public_path().to_string())
                }
                _ => ArtifactStoreError::ReadFailed(e.to_string()),
            })
    }
}
