use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::application::ports::{ArtifactStore, TextExtractor};
use crate::presentation::state::AppState;

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "pdf";

#[derive(Serialize)]
pub struct ProcessPdfResponse {
    pub success: bool,
    pub message: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct RouteStatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

pub async fn process_pdf_status_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RouteStatusResponse {
            status: "API route working".to_string(),
            message: "Use POST to upload a PDF".to_string(),
        }),
    )
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_pdf_handler<S, E>(
    State(state): State<AppState<S, E>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    S: ArtifactStore + 'static + ?Sized,
    E: TextExtractor + 'static + ?Sized,
{
    tracing::debug!("PDF processing request received");

    let mut multipart = match multipart {
        Ok(m) => m,
        Err(e) => {
            tracing::error!(error = %e, "Request is not a readable multipart body");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read form data: {}", e),
            );
        }
    };

    let (filename, data) = match read_file_field(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!("PDF processing request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No PDF file provided".to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read file: {}", e),
            );
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    match state.processing_service.process(&filename, data).await {
        Ok(processed) => {
            tracing::info!(
                filename = %filename,
                path = %processed.artifact,
                extracted = processed.extraction.text.is_some(),
                "PDF processed"
            );
            (
                StatusCode::OK,
                Json(ProcessPdfResponse {
                    success: true,
                    message: "PDF processed successfully".to_string(),
                    path: processed.artifact.public_path().to_string(),
                    text: processed.extraction.text,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Error processing PDF");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing PDF: {}", e),
            )
        }
    }
}

/// Reads the first `pdf` field that carries a filename. Other fields are skipped.
async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<Option<(String, Bytes)>, axum::extract::multipart::MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await?;
        return Ok(Some((filename, data)));
    }
    Ok(None)
}
