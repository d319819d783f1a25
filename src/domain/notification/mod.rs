//! Notification value objects

mod desktop;
mod kind;

pub use desktop::DesktopNotification;
pub use kind::NotifierKind;

/// Product name used as application name and default title
pub const PRODUCT_NAME: &str = "Hyprvoice";

/// Title used for error notifications
pub const ERROR_TITLE: &str = "Hyprvoice Error";

/// Replace ID shared by the recording, transcribing and completion notifications.
///
/// The notification daemon updates the notification carrying this ID in place
/// instead of stacking a new one.
pub const RECORDING_NOTIFICATION_ID: u32 = 9999;

/// Timeout after which the completion notification is dismissed
pub const COMPLETION_TIMEOUT_MS: u32 = 5000;

/// Body shown while recording
pub const RECORDING_MESSAGE: &str = "🎤 Recording...";

/// Body shown while transcribing
pub const TRANSCRIBING_MESSAGE: &str = "⏳ Transcribing...";

/// Body shown once the recording has been transcribed
pub const COMPLETE_MESSAGE: &str = "✅ Complete";
