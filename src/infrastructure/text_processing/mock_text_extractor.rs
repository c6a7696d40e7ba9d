use crate::application::ports::{ExtractionError, TextExtractor};

/// Treats the upload as UTF-8 text. Fails on anything else.
pub struct MockTextExtractor;

#[async_trait::async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract_text(&self, data: &[u8]) -> Result<String, ExtractionError> {
        String::from_utf8(data.to_vec())
            .map_err(|e| ExtractionError::ExtractionFailed(e.to_string()))
    }
}
