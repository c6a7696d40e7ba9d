use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use chatpdf::application::services::PdfProcessingService;
use chatpdf::infrastructure::observability::{TracingConfig, init_tracing};
use chatpdf::infrastructure::storage::LocalArtifactStore;
use chatpdf::infrastructure::text_processing::PdfTextExtractor;
use chatpdf::presentation::{AppState, Environment, PublicUploads, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::from_settings(
        environment.as_str(),
        &settings.logging,
    ));

    let upload_dir = PathBuf::from(&settings.storage.upload_dir);
    let store = Arc::new(LocalArtifactStore::new(
        upload_dir.clone(),
        settings.storage.public_prefix.clone(),
    )?);
    let extractor = Arc::new(PdfTextExtractor::new());

    let processing_service = Arc::new(PdfProcessingService::new(
        store,
        extractor,
        settings.extraction.pdf.enabled,
    ));

    let state = AppState {
        processing_service,
        public_uploads: Some(PublicUploads {
            dir: upload_dir,
            public_prefix: settings.storage.public_prefix.clone(),
        }),
    };

    let router = create_router(state);

    let addr = settings.bind_address();
    tracing::info!(
        addr = %addr,
        upload_dir = %settings.storage.upload_dir,
        extraction = settings.extraction.pdf.enabled,
        "Listening"
    );

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
