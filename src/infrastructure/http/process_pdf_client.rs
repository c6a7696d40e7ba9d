use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{UploadError, UploadGateway, UploadReceipt};
use crate::domain::{ExtractionResult, StoredArtifact, UploadedFile};
use crate::infrastructure::observability::preview_text;

const FILE_FIELD: &str = "pdf";
const DEFAULT_FAILURE: &str = "Failed to process PDF";

#[derive(Deserialize)]
struct SuccessPayload {
    path: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error: Option<String>,
}

/// Uploads PDFs to the `/api/process-pdf` endpoint over HTTP.
pub struct HttpUploadGateway {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpUploadGateway {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint_url)
    }

    pub fn with_client(client: reqwest::Client, endpoint_url: impl Into<String>) -> Self {
        Self {
            client,
            endpoint_url: endpoint_url.into(),
        }
    }
}

#[async_trait]
impl UploadGateway for HttpUploadGateway {
    #[tracing::instrument(
        skip(self, file),
        fields(filename = %file.name, url = %self.endpoint_url)
    )]
    async fn upload(&self, file: &UploadedFile) -> Result<UploadReceipt, UploadError> {
        let mime = if file.mime_type.is_empty() {
            "application/octet-stream"
        } else {
            file.mime_type.as_str()
        };

        let file_part = multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(mime)
            .map_err(|e| UploadError::Network(format!("failed to build request: {}", e)))?;

        let form = multipart::Form::new().part(FILE_FIELD, file_part);

        tracing::debug!(bytes = file.bytes.len(), "Sending PDF to processing endpoint");

        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        let malformed = |e: serde_json::Error| {
            tracing::error!(
                status = %status,
                content_type = %content_type,
                body = %preview_text(&String::from_utf8_lossy(&body)),
                "Processing endpoint returned an undecodable response"
            );
            UploadError::MalformedResponse(e.to_string())
        };

        if !status.is_success() {
            let payload: ErrorPayload = serde_json::from_slice(&body).map_err(malformed)?;
            let message = payload
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE.to_string());
            tracing::warn!(status = %status, error = %message, "Processing endpoint rejected PDF");
            return Err(UploadError::Rejected(message));
        }

        let payload: SuccessPayload = serde_json::from_slice(&body).map_err(malformed)?;

        tracing::info!(path = %payload.path, has_text = payload.text.is_some(), "PDF uploaded");

        Ok(UploadReceipt {
            artifact: StoredArtifact::from_raw(payload.path),
            message: payload.message,
            extraction: ExtractionResult { text: payload.text },
        })
    }
}
