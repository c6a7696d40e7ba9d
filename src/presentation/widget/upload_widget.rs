use std::sync::{Arc, Mutex};

use crate::application::ports::{Notifier, PdfUploadCallback};
use crate::application::state::BusyFlag;
use crate::domain::UploadedFile;

pub const INVALID_TYPE_NOTICE: &str = "Please upload a PDF file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetVariant {
    DropZone,
    Button { icon_only: bool },
}

/// What the widget shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    Idle { label: Option<&'static str> },
    DragActive { label: &'static str },
    Uploading { label: &'static str },
}

impl WidgetView {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Idle { label } => *label,
            Self::DragActive { label } | Self::Uploading { label } => Some(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The file was handed to the callback and the callback has returned.
    Forwarded,
    /// The file was not a PDF; a warning was shown.
    Rejected,
    /// Nothing was selected, or the widget was disabled.
    Ignored,
}

#[derive(Debug, Default)]
struct PickerState {
    drag_active: bool,
    value: Option<String>,
}

/// File picker and drop target for PDF attachments.
///
/// Drag-and-drop and click-to-browse both end up in the same validation and
/// callback path. The busy indicator is the [`BusyFlag`] shared with whoever
/// performs the upload, so it clears when the upload actually finishes.
pub struct UploadWidget<C>
where
    C: PdfUploadCallback + ?Sized,
{
    callback: Arc<C>,
    notifier: Arc<dyn Notifier>,
    busy: BusyFlag,
    variant: WidgetVariant,
    picker: Mutex<PickerState>,
}

impl<C> UploadWidget<C>
where
    C: PdfUploadCallback + ?Sized,
{
    pub fn new(
        callback: Arc<C>,
        notifier: Arc<dyn Notifier>,
        busy: BusyFlag,
        variant: WidgetVariant,
    ) -> Self {
        Self {
            callback,
            notifier,
            busy,
            variant,
            picker: Mutex::new(PickerState::default()),
        }
    }

    /// Triggers are disabled while an upload is in flight.
    pub fn is_disabled(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn is_uploading(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn view(&self) -> WidgetView {
        if self.is_uploading() {
            return WidgetView::Uploading {
                label: "Uploading...",
            };
        }
        if self.with_picker(|p| p.drag_active) {
            return WidgetView::DragActive {
                label: "Drop PDF here",
            };
        }
        let label = match self.variant {
            WidgetVariant::Button { icon_only: true } => None,
            _ => Some("Import PDF"),
        };
        WidgetView::Idle { label }
    }

    /// Value currently held by the hidden file input.
    pub fn picker_value(&self) -> Option<String> {
        self.with_picker(|p| p.value.clone())
    }

    pub fn drag_enter(&self) {
        if !self.is_disabled() {
            self.with_picker(|p| p.drag_active = true);
        }
    }

    pub fn drag_leave(&self) {
        self.with_picker(|p| p.drag_active = false);
    }

    /// Files chosen through the browse dialog.
    pub async fn select(&self, files: Vec<UploadedFile>) -> SelectionOutcome {
        self.accept(files).await
    }

    /// Files dropped onto the widget.
    pub async fn drop_files(&self, files: Vec<UploadedFile>) -> SelectionOutcome {
        self.with_picker(|p| p.drag_active = false);
        self.accept(files).await
    }

    async fn accept(&self, files: Vec<UploadedFile>) -> SelectionOutcome {
        if self.is_disabled() {
            tracing::debug!("Upload widget disabled, ignoring selection");
            return SelectionOutcome::Ignored;
        }

        let Some(file) = files.into_iter().next() else {
            return SelectionOutcome::Ignored;
        };

        self.with_picker(|p| p.value = Some(file.name.clone()));
        let outcome = self.forward(file).await;
        self.with_picker(|p| p.value = None);
        outcome
    }

    async fn forward(&self, file: UploadedFile) -> SelectionOutcome {
        if !file.is_pdf() {
            tracing::warn!(filename = %file.name, mime = %file.mime_type, "Rejected non-PDF file");
            self.notifier.error(INVALID_TYPE_NOTICE);
            return SelectionOutcome::Rejected;
        }

        self.callback.on_pdf_upload(file).await;
        SelectionOutcome::Forwarded
    }

    fn with_picker<R>(&self, f: impl FnOnce(&mut PickerState) -> R) -> R {
        let mut picker = self
            .picker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut picker)
    }
}
