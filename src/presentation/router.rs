use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ArtifactStore, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, process_pdf_handler, process_pdf_status_handler,
};
use crate::presentation::state::AppState;

pub const PROCESS_PDF_ROUTE: &str = "/api/process-pdf";

pub fn create_router<S, E>(state: AppState<S, E>) -> Router
where
    S: ArtifactStore + 'static + ?Sized,
    E: TextExtractor + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route(
            PROCESS_PDF_ROUTE,
            get(process_pdf_status_handler)
                .post(process_pdf_handler::<S, E>)
                .layer(DefaultBodyLimit::disable()),
        );

    if let Some(uploads) = &state.public_uploads {
        let serve_dir = ServeDir::new(&uploads.dir);
        let prefix = uploads.public_prefix.trim_end_matches('/');
        router = if prefix.is_empty() {
            router.fallback_service(serve_dir)
        } else {
            router.nest_service(prefix, serve_dir)
        };
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
