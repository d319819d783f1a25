//! Notification port interface

use async_trait::async_trait;

use crate::domain::notification::NotifierKind;

/// Port for user-facing notifications.
///
/// Delivery is best effort: no operation reports failure to the caller, so a
/// missing notification daemon never interrupts the dictation pipeline.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Backend behind this notifier
    fn kind(&self) -> NotifierKind;

    /// Report a failure condition.
    async fn error(&self, message: &str);

    /// Show an arbitrary titled message.
    async fn notify(&self, title: &str, message: &str);

    /// Recording has started.
    async fn recording_started(&self);

    /// Recording stopped, transcription in progress.
    async fn transcribing(&self);

    /// Transcription finished.
    async fn recording_complete(&self);
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    fn kind(&self) -> NotifierKind {
        self.as_ref().kind()
    }

    async fn error(&self, message: &str) {
        self.as_ref().error(message).await
    }

    async fn notify(&self, title: &str, message: &str) {
        self.as_ref().notify(title, message).await
    }

    async fn recording_started(&self) {
        self.as_ref().recording_started().await
    }

    async fn transcribing(&self) {
        self.as_ref().transcribing().await
    }

    async fn recording_complete(&self) {
        self.as_ref().recording_complete().await
    }
}
