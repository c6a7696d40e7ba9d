use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::StoredArtifact;

/// In-memory store keyed by public path. Can be told to fail every write.
pub struct MockArtifactStore {
    public_prefix: String,
    fail_writes: bool,
    files: Mutex<HashMap<String, Bytes>>,
}

impl MockArtifactStore {
    pub fn new(public_prefix: impl Into<String>) -> Self {
        Self {
            public_prefix: public_prefix.into(),
            fail_writes: false,
            files: Mutex::new(HashMap::new()),
        }
    }

    pub fn failing(public_prefix: impl Into<String>) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(public_prefix)
        }
    }

    pub fn stored_count(&self) -> usize {
        self.files.lock().map(|f| f.len()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ArtifactStore for MockArtifactStore {
    async fn persist(
        &self,
        filename: &str,
        data: Bytes,
    ) -> Result<StoredArtifact, ArtifactStoreError> {
        if self.fail_writes {
            return Err(ArtifactStoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only file system",
            )));
        }
        let artifact = StoredArtifact::new(&self.public_prefix, filename);
        if let Ok(mut files) = self.files.lock() {
            files.insert(artifact.public_path().to_string(), data);
        }
        Ok(artifact)
    }

    async fn fetch(&self, artifact: &StoredArtifact) -> Result<Vec<u8>, ArtifactStoreError> {
        self.files
            .lock()
            .ok()
            .and_then(|files| files.get(artifact.public_path()).map(|b| b.to_vec()))
            .ok_or_else(|| ArtifactStoreError::NotFound(artifact.public_path().to_string()))
    }
}
