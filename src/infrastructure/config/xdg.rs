//! TOML config file under the XDG config directory

use std::env;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "clipsync";
const FILE_NAME: &str = "config.toml";

/// Config store backed by `$XDG_CONFIG_HOME/clipsync/config.toml`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        Self {
            path: Self::resolve_path(env::var_os("XDG_CONFIG_HOME")),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// An explicit, absolute `XDG_CONFIG_HOME` wins on every platform.
    /// Otherwise the platform config dir, then `./.config` as a last resort.
    fn resolve_path(xdg_config_home: Option<OsString>) -> PathBuf {
        let base = xdg_config_home
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(dirs::config_dir)
            .unwrap_or_else(|| PathBuf::from(".config"));
        base.join(APP_DIR).join(FILE_NAME)
    }

    fn parse(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn display(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::parse(&content),
            // No file yet is the same as an empty layer
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::empty()),
            Err(e) => Err(ConfigError::ReadError(format!(
                "{}: {}",
                Self::display(&self.path),
                e
            ))),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let write_error = |e: std::io::Error| {
            ConfigError::WriteError(format!("{}: {}", Self::display(&self.path), e))
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(write_error)?;
        }

        let content =
            toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        fs::write(&self.path, content).await.map_err(write_error)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(Self::display(&self.path)));
        }
        self.save(&AppConfig::defaults()).await
    }
}
