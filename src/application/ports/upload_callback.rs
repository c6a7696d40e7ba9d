use async_trait::async_trait;

use crate::domain::UploadedFile;

/// Receives the file the user picked in the upload widget.
#[async_trait]
pub trait PdfUploadCallback: Send + Sync {
    async fn on_pdf_upload(&self, file: UploadedFile);
}
