mod composition_handler;
mod pdf_processing_service;

pub use composition_handler::{
    CONTENT_ADDED_NOTICE, CompositionHandler, NON_JSON_NOTICE, UPLOADED_NOTICE,
};
pub use pdf_processing_service::{PdfProcessingService, ProcessedPdf, ProcessingError};
