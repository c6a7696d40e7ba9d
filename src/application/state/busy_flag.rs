use std::sync::Arc;

use tokio::sync::watch;

/// Set while an upload is in flight.
///
/// Shared between the upload widget, which renders and disables itself from
/// it, and the composition handler, which holds it for the whole upload.
#[derive(Debug, Clone)]
pub struct BusyFlag {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for BusyFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyFlag {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn is_busy(&self) -> bool {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }

    /// Raises the flag until the returned guard is dropped.
    ///
    /// The flag is a plain boolean, not a counter: overlapping holds are
    /// prevented by callers checking [`BusyFlag::is_busy`] first.
    pub fn hold(&self) -> BusyGuard {
        self.sender.send_replace(true);
        BusyGuard {
            sender: Arc::clone(&self.sender),
        }
    }
}

#[must_use = "the flag is cleared as soon as the guard is dropped"]
#[derive(Debug)]
pub struct BusyGuard {
    sender: Arc<watch::Sender<bool>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.sender.send_replace(false);
    }
}
