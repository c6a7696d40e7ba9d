mod local_store;
mod mock_store;

pub use local_store::LocalArtifactStore;
pub use mock_store::MockArtifactStore;
