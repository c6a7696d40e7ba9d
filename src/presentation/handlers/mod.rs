mod health;
mod process_pdf;

pub use health::health_handler;
pub use process_pdf::{
    ErrorResponse, FILE_FIELD, ProcessPdfResponse, RouteStatusResponse, process_pdf_handler,
    process_pdf_status_handler,
};
