//! Start-up helpers: usage text, config merging and option resolution

use std::env;
use std::path::Path;
use std::process::ExitCode;

use clap::error::ErrorKind;
use thiserror::Error;
use tracing::warn;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ClipboardBackend};
use crate::domain::error::{ConfigError, DurationParseError, InvalidRetryPolicy, PeerAddressError};
use crate::domain::peer::parse_port;
use crate::domain::{Duration, PeerAddress, RetryPolicy, DEFAULT_MAX_ATTEMPTS};

use super::args::{Positionals, SyncOptions};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment overrides
pub const ENV_BIND_ADDRESS: &str = "CLIPSYNC_BIND_ADDRESS";
pub const ENV_CLIPBOARD_BACKEND: &str = "CLIPSYNC_CLIPBOARD_BACKEND";

/// Errors turning arguments and config into runnable options
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid peer address: {0}")]
    Peer(#[from] PeerAddressError),

    #[error("Invalid local port: {0}")]
    LocalPort(PeerAddressError),

    #[error("Invalid {key}: {source}")]
    Duration {
        key: &'static str,
        source: DurationParseError,
    },

    #[error(transparent)]
    Retry(#[from] InvalidRetryPolicy),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Short usage text printed when the positional arguments are wrong
pub fn usage_text() -> String {
    let program = env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "clipsync".to_string());

    format!(
        "{program} allows you to sync the clipboard between two computers\n\
         Usage: {program} <remote IP> <remote port> <local port>"
    )
}

/// Map a clap parse failure to an exit code.
///
/// Positional count problems never get here: they parse fine and are answered
/// with the usage text. Unknown flags and bad option values are clap errors.
pub fn handle_parse_error(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(EXIT_SUCCESS),
        _ => ExitCode::from(EXIT_USAGE_ERROR),
    }
}

/// Config layer read from the environment
pub fn env_config() -> AppConfig {
    AppConfig {
        bind_address: env::var(ENV_BIND_ADDRESS).ok().filter(|s| !s.is_empty()),
        clipboard_backend: env::var(ENV_CLIPBOARD_BACKEND)
            .ok()
            .filter(|s| !s.is_empty()),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %store.path().display(), error = %e, "ignoring config file");
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

fn parse_duration(
    key: &'static str,
    value: Option<&str>,
    default: Duration,
) -> Result<Duration, OptionsError> {
    match value {
        Some(s) => s
            .parse()
            .map_err(|source| OptionsError::Duration { key, source }),
        None => Ok(default),
    }
}

/// Validate positionals and merged config into sync options
pub fn build_sync_options(
    positionals: Positionals<'_>,
    config: &AppConfig,
) -> Result<SyncOptions, OptionsError> {
    let peer = PeerAddress::from_parts(positionals.remote_ip, positionals.remote_port)?;
    let listen_port = parse_port(positionals.local_port).map_err(OptionsError::LocalPort)?;

    let poll_interval = parse_duration(
        "poll_interval",
        config.poll_interval.as_deref(),
        Duration::default_poll_interval(),
    )?;
    let retry_delay = parse_duration(
        "retry_delay",
        config.retry_delay.as_deref(),
        Duration::default_retry_delay(),
    )?;
    let retry = RetryPolicy::new(
        config.retry_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
        retry_delay,
    )?;

    let backend = match config.clipboard_backend.as_deref() {
        Some(s) => s.parse::<ClipboardBackend>()?,
        None => ClipboardBackend::default(),
    };

    Ok(SyncOptions {
        peer,
        listen_port,
        bind_address: config.bind_address_or_default().to_string(),
        poll_interval,
        retry,
        backend,
    })
}
