mod process_pdf_client;

pub use process_pdf_client::HttpUploadGateway;
