//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::ClipboardSnapshot;

/// Cross-platform clipboard adapter using arboard.
///
/// One `arboard::Clipboard` is created on first use and kept for the process
/// lifetime. On Linux the selection is only served while that handle is
/// alive, so dropping it after every write would lose the content.
pub struct ArboardClipboard {
    inner: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Run a blocking clipboard operation on the shared handle
    async fn with_clipboard<T, F>(&self, op: F) -> Result<T, ClipboardError>
    where
        T: Send + 'static,
        F: FnOnce(&mut arboard::Clipboard) -> Result<T, ClipboardError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);

        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut guard = inner.lock().unwrap_or_else(|e| e.into_inner());
            if guard.is_none() {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                *guard = Some(clipboard);
            }
            match guard.as_mut() {
                Some(clipboard) => op(clipboard),
                None => Err(ClipboardError::Unavailable("clipboard not initialised".into())),
            }
        })
        .await
        .map_err(|e| ClipboardError::Unavailable(format!("Task join error: {}", e)))?
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        self.with_clipboard(|clipboard| match clipboard.get_text() {
            Ok(text) => Ok(ClipboardSnapshot::new(text)),
            // An empty clipboard reads as empty text, not as a failure
            Err(arboard::Error::ContentNotAvailable) => Ok(ClipboardSnapshot::default()),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        })
        .await
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        self.with_clipboard(move |clipboard| {
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
    }
}
