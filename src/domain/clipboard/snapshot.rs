//! Clipboard snapshot value object

use super::Fingerprint;

/// Full text content of the clipboard at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    text: String,
}

impl ClipboardSnapshot {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build a snapshot from bytes received off the wire.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self.as_bytes())
    }
}

impl From<String> for ClipboardSnapshot {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for ClipboardSnapshot {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
