mod mock_text_extractor;
mod pdf_extractor;

pub use mock_text_extractor::MockTextExtractor;
pub use pdf_extractor::PdfTextExtractor;
