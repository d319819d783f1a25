//! Notification event dispatch use case

use crate::application::ports::Notifier;

/// Something the rest of the application wants the user to know about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    Error(String),
    Message { title: String, message: String },
    RecordingStarted,
    Transcribing,
    RecordingComplete,
}

/// Deliver an event through the given notifier.
pub async fn dispatch<N: Notifier + ?Sized>(notifier: &N, event: &NotificationEvent) {
    tracing::debug!(backend = %notifier.kind(), ?event, "dispatching notification");

    match event {
        NotificationEvent::Error(message) => notifier.error(message).await,
        NotificationEvent::Message { title, message } => notifier.notify(title, message).await,
        NotificationEvent::RecordingStarted => notifier.recording_started().await,
        NotificationEvent::Transcribing => notifier.transcribing().await,
        NotificationEvent::RecordingComplete => notifier.recording_complete().await,
    }
}
