//! Domain layer - Core value objects
//!
//! Contains notification value objects, configuration and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::{AppConfig, NotificationsConfig};
pub use error::*;
pub use notification::{DesktopNotification, NotifierKind};
