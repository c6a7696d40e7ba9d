pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod widget;

pub use config::{Environment, Settings};
pub use router::{PROCESS_PDF_ROUTE, create_router};
pub use state::{AppState, PublicUploads};
