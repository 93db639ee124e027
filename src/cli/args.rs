//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::{AppConfig, ClipboardBackend};
use crate::domain::{Duration, PeerAddress, RetryPolicy};

/// clipsync - keep two clipboards in sync over TCP
#[derive(Parser, Debug)]
#[command(name = "clipsync")]
#[command(version)]
#[command(about = "Sync the clipboard between two computers over TCP")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// IP address or hostname of the peer
    #[arg(value_name = "REMOTE_IP")]
    pub remote_ip: Option<String>,

    /// Port the peer listens on
    #[arg(value_name = "REMOTE_PORT")]
    pub remote_port: Option<String>,

    /// Port to listen on for the peer's clipboard
    #[arg(value_name = "LOCAL_PORT")]
    pub local_port: Option<String>,

    /// Anything past the third positional; only there to detect a bad count
    #[arg(hide = true, value_name = "EXTRA")]
    pub extra: Vec<String>,

    /// How often to check the clipboard (e.g., 500ms, 1s)
    #[arg(long, value_name = "TIME")]
    pub poll_interval: Option<String>,

    /// Connect attempts per delivery before giving up
    #[arg(long, value_name = "N")]
    pub retry_attempts: Option<u32>,

    /// Pause between connect attempts (e.g., 2s)
    #[arg(long, value_name = "TIME")]
    pub retry_delay: Option<String>,

    /// Local address to bind the listener to
    #[arg(long, value_name = "ADDR")]
    pub bind_address: Option<String>,

    /// Clipboard backend
    #[arg(short = 'b', long, value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The three positional arguments, if exactly three were given
    pub fn positionals(&self) -> Option<Positionals<'_>> {
        if !self.extra.is_empty() {
            return None;
        }
        Some(Positionals {
            remote_ip: self.remote_ip.as_deref()?,
            remote_port: self.remote_port.as_deref()?,
            local_port: self.local_port.as_deref()?,
        })
    }

    /// Config layer built from command-line flags
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            poll_interval: self.poll_interval.clone(),
            retry_attempts: self.retry_attempts,
            retry_delay: self.retry_delay.clone(),
            bind_address: self.bind_address.clone(),
            clipboard_backend: self
                .backend
                .map(|b| ClipboardBackend::from(b).to_string()),
        }
    }
}

/// Raw positional arguments, validated later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positionals<'a> {
    pub remote_ip: &'a str,
    pub remote_port: &'a str,
    pub local_port: &'a str,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
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

/// Clipboard backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Arboard,
    Wayland,
}

impl From<BackendArg> for ClipboardBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Arboard => ClipboardBackend::Arboard,
            BackendArg::Wayland => ClipboardBackend::Wayland,
        }
    }
}

/// Fully resolved options for a sync run
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub peer: PeerAddress,
    pub listen_port: u16,
    pub bind_address: String,
    pub poll_interval: Duration,
    pub retry: RetryPolicy,
    pub backend: ClipboardBackend,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "poll_interval",
    "retry_attempts",
    "retry_delay",
    "bind_address",
    "clipboard_backend",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
