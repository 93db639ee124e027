//! Clipboard backend selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ConfigError;

/// Which clipboard adapter to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClipboardBackend {
    /// Cross-platform arboard library
    #[default]
    Arboard,
    /// wl-paste / wl-copy from wl-clipboard
    Wayland,
}

impl ClipboardBackend {
    pub const ALL: &'static [&'static str] = &["arboard", "wayland"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::Wayland => "wayland",
        }
    }
}

impl FromStr for ClipboardBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arboard" => Ok(Self::Arboard),
            "wayland" => Ok(Self::Wayland),
            other => Err(ConfigError::ValidationError {
                key: "clipboard_backend".to_string(),
                message: format!(
                    "Unknown backend \"{}\". Valid backends: {}",
                    other,
                    Self::ALL.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
