//! Clipboard port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clipboard::ClipboardSnapshot;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("{0} not found. Please install wl-clipboard.")]
    ToolNotFound(&'static str),

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Port for the platform clipboard service
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard text.
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError>;

    /// Replace the clipboard content with `text`.
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Shared clipboard handles, so the poller, sender and receiver can use one adapter
#[async_trait]
impl<T: Clipboard + ?Sized> Clipboard for Arc<T> {
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        self.as_ref().read().await
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write(text).await
    }
}
