use std::sync::Arc;

use tokio::sync::watch;

/// The message the user is composing in the chat bar.
///
/// Cloning yields another handle onto the same text. Every change is
/// broadcast to receivers obtained from [`InputState::subscribe`].
#[derive(Debug, Clone)]
pub struct InputState {
    sender: Arc<watch::Sender<String>>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl InputState {
    pub fn new(initial: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(initial.into());
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn get(&self) -> String {
        self.sender.borrow().clone()
    }

    /// Replaces the whole text, as typing into the input does.
    pub fn set(&self, text: impl Into<String>) {
        self.sender.send_replace(text.into());
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.sender.subscribe()
    }

    /// Appends extracted PDF text after whatever is in the input right now.
    ///
    /// The header is chosen against the current value inside the channel lock,
    /// so an edit that landed while the upload was in flight is kept.
    pub fn append_pdf_contents(&self, filename: &str, text: &str) {
        self.sender.send_modify(|current| {
            let header = pdf_contents_header(filename, current.trim().is_empty());
            current.push_str(&header);
            current.push_str(text);
        });
    }
}

/// Header placed in front of injected PDF text.
pub fn pdf_contents_header(filename: &str, input_is_blank: bool) -> String {
    if input_is_blank {
        format!("Contents of PDF \"{}\":\n\n", filename)
    } else {
        format!("\n\nContents of PDF \"{}\":\n\n", filename)
    }
}
