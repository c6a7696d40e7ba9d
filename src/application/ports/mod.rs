mod artifact_store;
mod notifier;
mod text_extractor;
mod upload_callback;
mod upload_gateway;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use notifier::{Notice, Notifier};
pub use text_extractor::{ExtractionError, TextExtractor};
pub use upload_callback::PdfUploadCallback;
pub use upload_gateway::{UploadError, UploadGateway, UploadReceipt};
