//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with notify-send, the process log and the config file.

pub mod config;
pub mod notification;
pub mod process;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{
    create_notifier, select_notifier, DesktopNotifier, LogNotifier, NopNotifier,
    NOTIFICATION_TARGET,
};
pub use process::SystemCommandRunner;
