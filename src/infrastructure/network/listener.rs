//! TCP listener for inbound clipboard content

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::application::ports::{Clipboard, TransportError};
use crate::application::ReceiveClipboardUseCase;

/// Accepts connections from the peer and applies each payload to the clipboard
pub struct ClipboardListener {
    listener: TcpListener,
}

impl ClipboardListener {
    /// Bind to `host:port`. A port of 0 picks a free port.
    pub async fn bind(host: &str, port: u16) -> Result<Self, TransportError> {
        let listener = TcpListener::bind((host, port))
            .await
            .map_err(|e| TransportError::Bind {
                addr: format!("{}:{}", host, port),
                message: e.to_string(),
            })?;
        Ok(Self { listener })
    }

    /// Address actually bound
    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        self.listener.local_addr().map_err(|e| TransportError::Bind {
            addr: "listener".to_string(),
            message: e.to_string(),
        })
    }

    /// Accept forever.
    ///
    /// Every connection gets its own task, with no cap on how many run at
    /// once. Accept errors are logged and the loop keeps going.
    pub async fn run<C>(self, receiver: Arc<ReceiveClipboardUseCase<C>>)
    where
        C: Clipboard + 'static,
    {
        loop {
            match self.listener.accept().await {
                Ok((stream, remote)) => {
                    debug!(%remote, "accepted connection");
                    let receiver = Arc::clone(&receiver);
                    tokio::spawn(async move {
                        match receiver.handle(stream).await {
                            Ok(bytes) => info!(%remote, bytes, "clipboard updated from peer"),
                            Err(e) => warn!(%remote, error = %e, "discarded inbound clipboard"),
                        }
                    });
                }
                Err(e) => {
                    let err = TransportError::Accept(e.to_string());
                    warn!(error = %err, "accept failed, still listening");
                }
            }
        }
    }
}
