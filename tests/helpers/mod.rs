#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use chatpdf::application::ports::{ArtifactStore, TextExtractor};
use chatpdf::application::services::PdfProcessingService;
use chatpdf::presentation::{AppState, PublicUploads, create_router};

pub const BOUNDARY: &str = "chatpdf-test-boundary";
pub const PUBLIC_PREFIX: &str = "/uploads/pdfs";

pub struct FilePart<'a> {
    pub field: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

impl<'a> FilePart<'a> {
    pub fn pdf(filename: &'a str, data: &'a [u8]) -> Self {
        Self {
            field: "pdf",
            filename: Some(filename),
            content_type: "application/pdf",
            data,
        }
    }
}

pub fn multipart_body(parts: &[FilePart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part.filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    part.field, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n",
                    part.field
                )
                .as_bytes(),
            ),
        }
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", part.content_type).as_bytes());
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub fn build_app<S, E>(
    store: Arc<S>,
    extractor: Arc<E>,
    extract_text: bool,
    public_uploads: Option<PublicUploads>,
) -> Router
where
    S: ArtifactStore + 'static,
    E: TextExtractor + 'static,
{
    let processing_service = Arc::new(PdfProcessingService::new(store, extractor, extract_text));
    create_router(AppState {
        processing_service,
        public_uploads,
    })
}

/// Serves `app` on an ephemeral port until the sender is dropped or fired.
pub async fn spawn_server(app: Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}
