pub mod http;
pub mod notifications;
pub mod observability;
pub mod storage;
pub mod text_processing;
