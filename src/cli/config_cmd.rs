//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ClipboardBackend};
use crate::domain::error::ConfigError;
use crate::domain::{Duration, RetryPolicy};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
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
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "poll_interval" => config.poll_interval = Some(value.trim().to_string()),
        "retry_attempts" => config.retry_attempts = Some(parse_attempts(value)?),
        "retry_delay" => config.retry_delay = Some(value.trim().to_string()),
        "bind_address" => config.bind_address = Some(value.trim().to_string()),
        "clipboard_backend" => {
            config.clipboard_backend = Some(value.parse::<ClipboardBackend>()?.to_string())
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
    check_key(key)?;

    let config = store.load().await?;
    match config_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config_value(&config, key);
        presenter.key_value(key, value.as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Current value of a known key, as it would be written on the command line
fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "poll_interval" => config.poll_interval.clone(),
        "retry_attempts" => config.retry_attempts.map(|n| n.to_string()),
        "retry_delay" => config.retry_delay.clone(),
        "bind_address" => config.bind_address.clone(),
        "clipboard_backend" => config.clipboard_backend.clone(),
        _ => None,
    }
}

fn parse_attempts(value: &str) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::ValidationError {
        key: "retry_attempts".to_string(),
        message: "Value must be a whole number of at least 1".to_string(),
    };
    let attempts = value.trim().parse::<u32>().map_err(|_| invalid())?;
    RetryPolicy::new(attempts, Duration::default_retry_delay()).map_err(|_| invalid())?;
    Ok(attempts)
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "poll_interval" | "retry_delay" => {
            value
                .parse::<Duration>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "retry_attempts" => {
            parse_attempts(value)?;
        }
        "bind_address" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
        }
        "clipboard_backend" => {
            value.parse::<ClipboardBackend>()?;
        }
        _ => {}
    }
    Ok(())
}
