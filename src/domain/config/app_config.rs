//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::timing::{Duration, DEFAULT_MAX_ATTEMPTS};

use super::ClipboardBackend;

/// Listen on every interface unless told otherwise
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub poll_interval: Option<String>,
    pub retry_attempts: Option<u32>,
    pub retry_delay: Option<String>,
    pub bind_address: Option<String>,
    pub clipboard_backend: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            poll_interval: Some(Duration::default_poll_interval().to_string()),
            retry_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            retry_delay: Some(Duration::default_retry_delay().to_string()),
            bind_address: Some(DEFAULT_BIND_ADDRESS.to_string()),
            clipboard_backend: Some(ClipboardBackend::default().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            poll_interval: other.poll_interval.or(self.poll_interval),
            retry_attempts: other.retry_attempts.or(self.retry_attempts),
            retry_delay: other.retry_delay.or(self.retry_delay),
            bind_address: other.bind_address.or(self.bind_address),
            clipboard_backend: other.clipboard_backend.or(self.clipboard_backend),
        }
    }

    /// Get bind address, or "0.0.0.0" if not set
    pub fn bind_address_or_default(&self) -> &str {
        self.bind_address
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_BIND_ADDRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.poll_interval, Some("1s".to_string()));
        assert_eq!(config.retry_attempts, Some(100));
        assert_eq!(config.retry_delay, Some("2s".to_string()));
        assert_eq!(config.bind_address, Some("0.0.0.0".to_string()));
        assert_eq!(config.clipboard_backend, Some("arboard".to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.poll_interval.is_none());
        assert!(config.retry_attempts.is_none());
        assert!(config.retry_delay.is_none());
        assert!(config.bind_address.is_none());
        assert!(config.clipboard_backend.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            poll_interval: Some("1s".to_string()),
            retry_attempts: Some(100),
            bind_address: Some("0.0.0.0".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            poll_interval: Some("500ms".to_string()),
            retry_attempts: None,
            bind_address: Some("127.0.0.1".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.poll_interval, Some("500ms".to_string()));
        assert_eq!(merged.retry_attempts, Some(100));
        assert_eq!(merged.bind_address, Some("127.0.0.1".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            retry_delay: Some("5s".to_string()),
            clipboard_backend: Some("wayland".to_string()),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.retry_delay, Some("5s".to_string()));
        assert_eq!(merged.clipboard_backend, Some("wayland".to_string()));
    }

    #[test]
    fn bind_address_or_default_ignores_blank() {
        let config = AppConfig {
            bind_address: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.bind_address_or_default(), "0.0.0.0");
    }
}
