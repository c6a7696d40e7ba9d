mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExtractionSettings, LoggingSettings, PdfExtractionSettings, ServerSettings, Settings,
    StorageSettings,
};
