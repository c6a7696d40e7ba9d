use std::fmt;

/// Public location of a file persisted by an artifact store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    public_path: String,
}

impl StoredArtifact {
    /// Joins `prefix` and `filename` with exactly one slash between them.
    pub fn new(prefix: &str, filename: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            public_path: format!("{}/{}", prefix, filename),
        }
    }

    pub fn from_raw(public_path: impl Into<String>) -> Self {
        Self {
            public_path: public_path.into(),
        }
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    /// Last segment of the public path, i.e. the stored filename.
    pub fn filename(&self) -> &str {
        self.public_path
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.public_path)
    }
}

impl fmt::Display for StoredArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.public_path)
    }
}
