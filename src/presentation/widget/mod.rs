mod upload_widget;

pub use upload_widget::{
    INVALID_TYPE_NOTICE, SelectionOutcome, UploadWidget, WidgetVariant, WidgetView,
};
