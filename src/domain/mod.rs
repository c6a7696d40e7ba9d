mod content_type;
mod extraction_result;
mod stored_artifact;
mod uploaded_file;

pub use content_type::ContentType;
pub use extraction_result::ExtractionResult;
pub use stored_artifact::StoredArtifact;
pub use uploaded_file::UploadedFile;
