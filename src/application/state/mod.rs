mod busy_flag;
mod input_state;

pub use busy_flag::{BusyFlag, BusyGuard};
pub use input_state::{InputState, pdf_contents_header};
