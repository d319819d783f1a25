//! No-op notification adapter

use async_trait::async_trait;

use crate::application::ports::Notifier;
use crate::domain::notification::NotifierKind;

/// No-op notifier that does nothing
///
/// Used when notifications are disabled or the configured backend is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopNotifier;

impl NopNotifier {
    /// Create a new no-op notifier
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for NopNotifier {
    fn kind(&self) -> NotifierKind {
        NotifierKind::Nop
    }

    async fn error(&self, _message: &str) {}

    async fn notify(&self, _title: &str, _message: &str) {}

    async fn recording_started(&self) {}

    async fn transcribing(&self) {}

    async fn recording_complete(&self) {}
}
