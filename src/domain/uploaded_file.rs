use bytes::Bytes;

use super::ContentType;

/// A file picked by the user, held only until it has been sent.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::from_mime(&self.mime_type)
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type() == Some(ContentType::Pdf)
    }
}
