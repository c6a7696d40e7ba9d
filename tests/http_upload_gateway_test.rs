mod helpers;

use std::sync::Arc;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;

use chatpdf::application::ports::{UploadError, UploadGateway};
use chatpdf::domain::UploadedFile;
use chatpdf::infrastructure::http::HttpUploadGateway;
use chatpdf::infrastructure::storage::MockArtifactStore;
use chatpdf::infrastructure::text_processing::MockTextExtractor;

use helpers::{PUBLIC_PREFIX, build_app, spawn_server};

async fn start_mock_endpoint(
    status: u16,
    content_type: &'static str,
    body: &'static str,
) -> (String, tokio::sync::oneshot::Sender<()>) {
    let app = Router::new().route(
        "/api/process-pdf",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(status).unwrap();
            (status, [("content-type", content_type)], body).into_response()
        }),
    );
    spawn_server(app).await
}

fn notes_pdf(body: &'static [u8]) -> UploadedFile {
    UploadedFile::new("notes.pdf", "application/pdf", body)
}

#[tokio::test]
async fn given_processing_server_when_uploading_then_receipt_carries_path_and_text() {
    let app = build_app(
        Arc::new(MockArtifactStore::new(PUBLIC_PREFIX)),
        Arc::new(MockTextExtractor),
        true,
        None,
    );
    let (base_url, shutdown_tx) = spawn_server(app).await;
    let gateway = HttpUploadGateway::new(format!("{}/api/process-pdf", base_url));

    let receipt = gateway.upload(&notes_pdf(b"hello from pdf")).await.unwrap();

    assert_eq!(receipt.artifact.public_path(), "/uploads/pdfs/notes.pdf");
    assert_eq!(receipt.message, "PDF processed successfully");
    assert_eq!(receipt.extraction.text.as_deref(), Some("hello from pdf"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_extraction_disabled_when_uploading_then_receipt_has_no_text() {
    let app = build_app(
        Arc::new(MockArtifactStore::new(PUBLIC_PREFIX)),
        Arc::new(MockTextExtractor),
        false,
        None,
    );
    let (base_url, shutdown_tx) = spawn_server(app).await;
    let gateway = HttpUploadGateway::new(format!("{}/api/process-pdf", base_url));

    let receipt = gateway.upload(&notes_pdf(b"%PDF-1.4")).await.unwrap();

    assert_eq!(receipt.extraction.text, None);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_storage_failure_when_uploading_then_returns_rejected_with_server_message() {
    let app = build_app(
        Arc::new(MockArtifactStore::failing(PUBLIC_PREFIX)),
        Arc::new(MockTextExtractor),
        true,
        None,
    );
    let (base_url, shutdown_tx) = spawn_server(app).await;
    let gateway = HttpUploadGateway::new(format!("{}/api/process-pdf", base_url));

    let result = gateway.upload(&notes_pdf(b"%PDF-1.4")).await;

    match result {
        Err(UploadError::Rejected(message)) => {
            assert!(message.starts_with("Error processing PDF"))
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_html_error_page_when_uploading_then_returns_malformed_response() {
    let (base_url, shutdown_tx) =
        start_mock_endpoint(502, "text/html", "<html><body>Bad Gateway</body></html>").await;
    let gateway = HttpUploadGateway::new(format!("{}/api/process-pdf", base_url));

    let result = gateway.upload(&notes_pdf(b"%PDF-1.4")).await;

    assert!(matches!(result, Err(UploadError::MalformedResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_success_status_with_html_body_when_uploading_then_returns_malformed_response() {
    let (base_url, shutdown_tx) = start_mock_endpoint(200, "text/html", "<p>ok</p>").await;
    let gateway = HttpUploadGateway::new(format!("{}/api/process-pdf", base_url));

    let result = gateway.upload(&notes_pdf(b"%PDF-1.4")).await;

    assert!(matches!(result, Err(UploadError::MalformedResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_payload_without_message_when_uploading_then_uses_default_message() {
    let (base_url, shutdown_tx) = start_mock_endpoint(500, "application/json", "{}").await;
    let gateway = HttpUploadGateway::new(format!("{}/api/process-pdf", base_url));

    let result = gateway.upload(&notes_pdf(b"%PDF-1.4")).await;

    match result {
        Err(UploadError::Rejected(message)) => assert_eq!(message, "Failed to process PDF"),
        other => panic!("expected rejection, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_endpoint_when_uploading_then_returns_network_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let gateway = HttpUploadGateway::new(format!("http://{}/api/process-pdf", addr));

    let result = gateway.upload(&notes_pdf(b"%PDF-1.4")).await;

    assert!(matches!(result, Err(UploadError::Network(_))));
}
