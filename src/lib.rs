//! Hyprvoice - desktop notifications for voice dictation
//!
//! Selects one notification backend per process from configuration and
//! exposes it behind the `Notifier` port:
//!
//! - **desktop**: popups through `notify-send`, with the recording and
//!   transcribing states sharing one persistent notification
//! - **log**: one `<title>: <message>` log line per notification
//! - **none**: notifications disabled
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification value objects, configuration and errors
//! - **Application**: Port interfaces (traits) and event dispatch
//! - **Infrastructure**: Adapter implementations (notify-send, logging, config file)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
