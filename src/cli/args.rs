//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::application::NotificationEvent;

/// Hyprvoice - desktop notifications for voice dictation
#[derive(Parser, Debug)]
#[command(name = "hyprvoice")]
#[command(version)]
#[command(about = "Send Hyprvoice dictation notifications through the configured backend")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification backend (desktop, log, none); overrides the config file
    #[arg(
        short = 'N',
        long,
        value_name = "TYPE",
        env = "HYPRVOICE_NOTIFICATIONS",
        global = true
    )]
    pub notifications: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a titled message
    Notify {
        /// Notification title
        title: String,
        /// Notification body
        message: String,
    },
    /// Report an error
    Error {
        /// Error description
        message: String,
    },
    /// Show the recording notification
    RecordingStarted,
    /// Show the transcribing notification
    Transcribing,
    /// Replace the recording notification with a timed completion notice
    RecordingComplete,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Commands {
    /// Notification event for this command, if it sends one
    pub fn to_event(&self) -> Option<NotificationEvent> {
        match self {
            Commands::Notify { title, message } => Some(NotificationEvent::Message {
                title: title.clone(),
                message: message.clone(),
            }),
            Commands::Error { message } => Some(NotificationEvent::Error(message.clone())),
            Commands::RecordingStarted => Some(NotificationEvent::RecordingStarted),
            Commands::Transcribing => Some(NotificationEvent::Transcribing),
            Commands::RecordingComplete => Some(NotificationEvent::RecordingComplete),
            Commands::Config { .. } => None,
        }
    }
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["notifications.type"];

/// Valid notification backend selectors
pub const VALID_NOTIFICATION_TYPES: &[&str] = &["desktop", "log", "none"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
