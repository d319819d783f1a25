//! Notification infrastructure module
//!
//! Three interchangeable backends behind the `Notifier` port: desktop popups
//! through notify-send, log lines, and a no-op used when notifications are off.

mod desktop;
mod log;
mod nop;

pub use desktop::{DesktopNotifier, NOTIFY_SEND};
pub use log::LogNotifier;
pub use nop::NopNotifier;

use crate::application::ports::Notifier;
use crate::domain::notification::NotifierKind;

/// Log target for notification output and delivery failures.
///
/// The subscriber keeps this target at `info` whatever `RUST_LOG` says, since
/// the log backend is the user-facing output when it is selected.
pub const NOTIFICATION_TARGET: &str = "hyprvoice::notification";

/// Create the notifier for a backend kind
pub fn create_notifier(kind: NotifierKind) -> Box<dyn Notifier> {
    match kind {
        NotifierKind::Desktop => Box::new(DesktopNotifier::new()),
        NotifierKind::Log => Box::new(LogNotifier::new()),
        NotifierKind::Nop => Box::new(NopNotifier::new()),
    }
}

/// Create the notifier named by a configuration selector.
///
/// Never fails: unknown or empty selectors yield the no-op notifier.
pub fn select_notifier(selector: &str) -> Box<dyn Notifier> {
    let kind = NotifierKind::from_selector(selector);
    tracing::debug!(selector, backend = %kind, "selected notification backend");
    create_notifier(kind)
}
