use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{Notifier, PdfUploadCallback, UploadError, UploadGateway};
use crate::application::state::{BusyFlag, InputState};
use crate::domain::UploadedFile;
use crate::infrastructure::observability::preview_text;

pub const CONTENT_ADDED_NOTICE: &str = "PDF content added to message";
pub const UPLOADED_NOTICE: &str = "PDF uploaded successfully";
pub const NON_JSON_NOTICE: &str = "Server returned non-JSON response";

/// The chat bar's PDF upload handler.
///
/// Sends the file to the processing endpoint and injects any extracted text
/// into the message being composed.
pub struct CompositionHandler<G>
where
    G: UploadGateway + ?Sized,
{
    gateway: Arc<G>,
    notifier: Arc<dyn Notifier>,
    input: InputState,
    busy: BusyFlag,
}

impl<G> CompositionHandler<G>
where
    G: UploadGateway + ?Sized,
{
    pub fn new(
        gateway: Arc<G>,
        notifier: Arc<dyn Notifier>,
        input: InputState,
        busy: BusyFlag,
    ) -> Self {
        Self {
            gateway,
            notifier,
            input,
            busy,
        }
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn busy_flag(&self) -> &BusyFlag {
        &self.busy
    }

    #[tracing::instrument(
        skip(self, file),
        fields(filename = %file.name, bytes = file.bytes.len())
    )]
    pub async fn handle_upload(&self, file: UploadedFile) {
        let _busy = self.busy.hold();

        let receipt = match self.gateway.upload(&file).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::error!(error = %e, "PDF upload failed");
                self.notifier.error(&failure_notice(&e));
                return;
            }
        };

        match receipt.extraction.injectable_text() {
            Some(text) => {
                self.input.append_pdf_contents(&file.name, text);
                tracing::debug!(text = %preview_text(text), "PDF text added to input");
                self.notifier.success(CONTENT_ADDED_NOTICE);
            }
            None => self.notifier.success(UPLOADED_NOTICE),
        }

        tracing::info!(
            path = %receipt.artifact,
            server_message = %receipt.message,
            "Upload successful"
        );
    }
}

#[async_trait]
impl<G> PdfUploadCallback for CompositionHandler<G>
where
    G: UploadGateway + ?Sized,
{
    async fn on_pdf_upload(&self, file: UploadedFile) {
        self.handle_upload(file).await;
    }
}

fn failure_notice(error: &UploadError) -> String {
    match error {
        UploadError::Rejected(message) => message.clone(),
        UploadError::MalformedResponse(_) => NON_JSON_NOTICE.to_string(),
        UploadError::Network(message) => message.clone(),
    }
}
