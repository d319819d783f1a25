//! Application layer - Use cases and port interfaces
//!
//! Contains the notification dispatch use case and trait definitions
//! for external system interactions.

pub mod dispatch;
pub mod ports;

// Re-export use cases
pub use dispatch::{dispatch, NotificationEvent};
