//! Transport port interface

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWrite;

use crate::domain::PeerAddress;

/// Network errors
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Failed to connect to {peer}: {message}")]
    Connect { peer: String, message: String },

    #[error("Failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("Failed to accept connection: {0}")]
    Accept(String),
}

/// Port for opening outbound connections to the peer
#[async_trait]
pub trait Dialer: Send + Sync {
    /// Writable connection handed back on success
    type Stream: AsyncWrite + Unpin + Send;

    /// Open one connection. No retry happens here.
    async fn dial(&self, peer: &PeerAddress) -> Result<Self::Stream, TransportError>;
}
