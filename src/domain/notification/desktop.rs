//! notify-send invocation builder

use super::{
    COMPLETE_MESSAGE, COMPLETION_TIMEOUT_MS, ERROR_TITLE, PRODUCT_NAME, RECORDING_NOTIFICATION_ID,
};

/// A single notify-send call.
///
/// Optional fields are left off the command line when unset so the
/// notification daemon applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopNotification {
    pub app_name: String,
    /// Sent with critical urgency; daemon default otherwise
    pub critical: bool,
    pub replace_id: Option<u32>,
    pub timeout_ms: Option<u32>,
    pub title: String,
    pub body: String,
}

impl DesktopNotification {
    /// Plain notification with daemon defaults
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            app_name: PRODUCT_NAME.to_string(),
            critical: false,
            replace_id: None,
            timeout_ms: None,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Critical notification titled with the error title
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ERROR_TITLE, message).with_critical()
    }

    /// Notification that stays on screen until replaced
    pub fn persistent(title: impl Into<String>, body: impl Into<String>, replace_id: u32) -> Self {
        Self::new(title, body)
            .with_replace_id(replace_id)
            .with_timeout_ms(0)
    }

    /// Timed notification replacing the recording notification
    pub fn completion() -> Self {
        Self::new(PRODUCT_NAME, COMPLETE_MESSAGE)
            .with_replace_id(RECORDING_NOTIFICATION_ID)
            .with_timeout_ms(COMPLETION_TIMEOUT_MS)
    }

    pub fn with_critical(mut self) -> Self {
        self.critical = true;
        self
    }

    pub fn with_replace_id(mut self, replace_id: u32) -> Self {
        self.replace_id = Some(replace_id);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Build the notify-send argument list
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["-a".to_string(), self.app_name.clone()];

        if self.critical {
            args.push("-u".to_string());
            args.push("critical".to_string());
        }
        if let Some(id) = self.replace_id {
            args.push("-r".to_string());
            args.push(id.to_string());
        }
        if let Some(timeout) = self.timeout_ms {
            args.push("-t".to_string());
            args.push(timeout.to_string());
        }

        args.push(self.title.clone());
        args.push(self.body.clone());
        args
    }
}
