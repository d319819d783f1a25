//! Log line notification adapter

use async_trait::async_trait;

use crate::application::ports::Notifier;
use crate::infrastructure::notification::NOTIFICATION_TARGET;
use crate::domain::notification::{
    NotifierKind, COMPLETE_MESSAGE, ERROR_TITLE, PRODUCT_NAME, RECORDING_MESSAGE,
    TRANSCRIBING_MESSAGE,
};

/// Writes every notification as a `<title>: <message>` log line
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a new log notifier
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn kind(&self) -> NotifierKind {
        NotifierKind::Log
    }

    async fn error(&self, message: &str) {
        self.notify(ERROR_TITLE, message).await
    }

    async fn notify(&self, title: &str, message: &str) {
        tracing::info!(target: NOTIFICATION_TARGET, "{}: {}", title, message);
    }

    async fn recording_started(&self) {
        self.notify(PRODUCT_NAME, RECORDING_MESSAGE).await
    }

    async fn transcribing(&self) {
        self.notify(PRODUCT_NAME, TRANSCRIBING_MESSAGE).await
    }

    async fn recording_complete(&self) {
        self.notify(PRODUCT_NAME, COMPLETE_MESSAGE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::notification::test_support::CapturedLogs;

    #[tokio::test]
    async fn notify_writes_title_and_message() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        LogNotifier::new().notify("T", "M").await;

        assert_eq!(logs.lines(), ["T: M"]);
    }

    #[tokio::test]
    async fn error_uses_error_title() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        LogNotifier::new().error("X").await;

        assert_eq!(logs.lines(), ["Hyprvoice Error: X"]);
    }

    #[tokio::test]
    async fn lifecycle_lines() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let notifier = LogNotifier::new();
        notifier.recording_started().await;
        notifier.transcribing().await;
        notifier.recording_complete().await;

        assert_eq!(
            logs.lines(),
            [
                "Hyprvoice: 🎤 Recording...",
                "Hyprvoice: ⏳ Transcribing...",
                "Hyprvoice: ✅ Complete",
            ]
        );
    }

    #[tokio::test]
    async fn repeated_calls_repeat_the_line() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let notifier = LogNotifier::new();
        notifier.notify("T", "M").await;
        notifier.notify("T", "M").await;

        assert_eq!(logs.lines(), ["T: M", "T: M"]);
    }
}
