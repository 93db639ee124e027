//! Inbound clipboard use case

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::domain::ClipboardSnapshot;

use super::ports::{Clipboard, ClipboardError};

/// Errors from handling one inbound connection
#[derive(Debug, Clone, Error)]
pub enum ReceiveError {
    #[error("Failed to read from connection: {0}")]
    Read(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Drains one connection and applies the payload to the local clipboard
pub struct ReceiveClipboardUseCase<C: Clipboard> {
    clipboard: C,
}

impl<C: Clipboard> ReceiveClipboardUseCase<C> {
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }

    /// Read `stream` until the peer closes it, then write everything received
    /// to the clipboard. Returns the payload size in bytes.
    ///
    /// There is no length prefix and no read timeout: a peer that never
    /// closes keeps this future pending forever.
    ///
    /// The stream is dropped (closing the connection) on every path.
    pub async fn handle<S>(&self, mut stream: S) -> Result<usize, ReceiveError>
    where
        S: AsyncRead + Unpin + Send,
    {
        let mut payload = Vec::new();
        stream
            .read_to_end(&mut payload)
            .await
            .map_err(|e| ReceiveError::Read(e.to_string()))?;

        let snapshot = ClipboardSnapshot::from_bytes(&payload);
        self.clipboard.write(snapshot.as_str()).await?;

        Ok(payload.len())
    }
}
