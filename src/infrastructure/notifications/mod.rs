mod recording_notifier;

pub use recording_notifier::RecordingNotifier;
