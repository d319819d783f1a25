//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod command_runner;
pub mod config;
pub mod notifier;

// Re-export common types
pub use command_runner::{CommandError, CommandRunner};
pub use config::ConfigStore;
pub use notifier::Notifier;
