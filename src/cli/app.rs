//! Main app runner

use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, EnvFilter};

use crate::application::ports::ConfigStore;
use crate::application::{dispatch, NotificationEvent};
use crate::domain::config::AppConfig;
use crate::infrastructure::{select_notifier, XdgConfigStore, NOTIFICATION_TARGET};

use super::args::{Cli, Commands};
use super::config_cmd::handle_config_command;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Install the stderr log subscriber.
///
/// The log backend writes through this, so it must run before any
/// notification is sent.
pub fn init_tracing() {
    let spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&spec))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Filter built from a `RUST_LOG` spec that never hides notification output
pub fn log_filter(spec: &str) -> EnvFilter {
    let filter = EnvFilter::new(spec);
    match format!("{}=info", NOTIFICATION_TARGET).parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    match cli.command {
        Commands::Config { action } => match handle_config_command(action, &store, &presenter).await {
            Ok(()) => ExitCode::from(EXIT_SUCCESS),
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        },
        command => {
            if let Some(event) = command.to_event() {
                let config = load_merged_config(&store, &presenter, cli.notifications).await;
                send_notification(&config, &event).await;
            }
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}

/// Select the configured backend and deliver one event.
///
/// Delivery failures are logged by the backend and never change the outcome.
pub async fn send_notification(config: &AppConfig, event: &NotificationEvent) {
    let notifier = select_notifier(config.notifications_selector());
    dispatch(notifier.as_ref(), event).await;
}

/// Load and merge configuration from file and CLI/env override
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    notifications: Option<String>,
) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("{}; using defaults", e));
            AppConfig::empty()
        }
    };

    let cli_config = notifications
        .map(AppConfig::with_notifications)
        .unwrap_or_default();

    // Merge: defaults < file < env/cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
