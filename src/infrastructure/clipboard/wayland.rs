//! Wayland clipboard adapter using wl-paste / wl-copy

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::ClipboardSnapshot;

/// Wayland clipboard adapter using wl-clipboard tools
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_error(
    tool: &'static str,
    e: std::io::Error,
    to_err: fn(String) -> ClipboardError,
) -> ClipboardError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ClipboardError::ToolNotFound(tool)
    } else {
        to_err(e.to_string())
    }
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        let output = Command::new("wl-paste")
            .args(["--no-newline", "--type", "text/plain"])
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| spawn_error("wl-paste", e, ClipboardError::ReadFailed))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // wl-paste exits non-zero when nothing has been copied yet
            if stderr.contains("Nothing is copied") || stderr.contains("No selection") {
                return Ok(ClipboardSnapshot::default());
            }
            return Err(ClipboardError::ReadFailed(format!(
                "wl-paste exited with status: {}",
                output.status
            )));
        }

        Ok(ClipboardSnapshot::from_bytes(&output.stdout))
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new("wl-copy")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| spawn_error("wl-copy", e, ClipboardError::WriteFailed))?;

        // Write text to stdin, then close it so wl-copy takes ownership
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "wl-copy exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
