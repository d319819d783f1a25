//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::NotificationsConfig;
use crate::domain::error::ConfigError;

use super::args::{
    is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS, VALID_NOTIFICATION_TYPES,
};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "notifications.type" => {
            config
                .notifications
                .get_or_insert_with(NotificationsConfig::default)
                .kind = Some(value.to_string());
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "notifications.type" => config.notifications.and_then(|n| n.kind),
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "notifications.type",
        config
            .notifications
            .as_ref()
            .and_then(|n| n.kind.as_deref())
            .unwrap_or(NOT_SET),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }
    Ok(())
}

/// Validate a config value based on key type.
///
/// Only `config set` is strict; a hand-edited unknown backend still loads and
/// disables notifications.
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    if key == "notifications.type" && !VALID_NOTIFICATION_TYPES.contains(&value) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!(
                "Invalid value '{}'. Valid options: {}",
                value,
                VALID_NOTIFICATION_TYPES.join(", ")
            ),
        });
    }
    Ok(())
}
