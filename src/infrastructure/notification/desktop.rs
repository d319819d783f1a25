//! notify-send notification adapter

use async_trait::async_trait;

use crate::application::ports::{CommandRunner, Notifier};
use crate::domain::notification::{
    DesktopNotification, NotifierKind, PRODUCT_NAME, RECORDING_MESSAGE,
    RECORDING_NOTIFICATION_ID, TRANSCRIBING_MESSAGE,
};
use crate::infrastructure::notification::NOTIFICATION_TARGET;
use crate::infrastructure::process::SystemCommandRunner;

/// Program invoked for every desktop notification
pub const NOTIFY_SEND: &str = "notify-send";

/// Desktop popups through notify-send.
///
/// Recording and transcribing share one persistent notification that the
/// completion notification replaces and lets expire.
pub struct DesktopNotifier<R = SystemCommandRunner> {
    runner: R,
}

impl DesktopNotifier {
    /// Create a notifier that spawns notify-send
    pub fn new() -> Self {
        Self::with_runner(SystemCommandRunner::new())
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> DesktopNotifier<R> {
    /// Create with a custom command runner
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Run notify-send, logging instead of returning any failure
    async fn send(&self, notification: DesktopNotification, context: &str) {
        if let Err(e) = self.runner.run(NOTIFY_SEND, &notification.to_args()).await {
            tracing::warn!(target: NOTIFICATION_TARGET, "Failed to send {}: {}", context, e);
        }
    }

    /// Show a notification that stays until another one with `replace_id` replaces it.
    pub async fn persistent_notify(&self, title: &str, message: &str, replace_id: u32) {
        let notification = DesktopNotification::persistent(title, message, replace_id);
        self.send(notification, "persistent notification").await
    }
}

#[async_trait]
impl<R: CommandRunner> Notifier for DesktopNotifier<R> {
    fn kind(&self) -> NotifierKind {
        NotifierKind::Desktop
    }

    async fn error(&self, message: &str) {
        self.send(DesktopNotification::error(message), "error notification")
            .await
    }

    async fn notify(&self, title: &str, message: &str) {
        self.send(DesktopNotification::new(title, message), "notification")
            .await
    }

    async fn recording_started(&self) {
        self.persistent_notify(PRODUCT_NAME, RECORDING_MESSAGE, RECORDING_NOTIFICATION_ID)
            .await
    }

    async fn transcribing(&self) {
        self.persistent_notify(PRODUCT_NAME, TRANSCRIBING_MESSAGE, RECORDING_NOTIFICATION_ID)
            .await
    }

    async fn recording_complete(&self) {
        self.send(DesktopNotification::completion(), "completion notification")
            .await
    }
}
