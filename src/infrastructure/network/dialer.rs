//! TCP dialer adapter

use async_trait::async_trait;
use tokio::net::TcpStream;

use crate::application::ports::{Dialer, TransportError};
use crate::domain::PeerAddress;

/// Opens plain TCP connections to the peer
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpDialer;

impl TcpDialer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Dialer for TcpDialer {
    type Stream = TcpStream;

    async fn dial(&self, peer: &PeerAddress) -> Result<TcpStream, TransportError> {
        TcpStream::connect((peer.host(), peer.port()))
            .await
            .map_err(|e| TransportError::Connect {
                peer: peer.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn dials_listening_peer() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let peer = PeerAddress::new("127.0.0.1", port).unwrap();

        let accept = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            stream.read_to_end(&mut buf).await.unwrap();
            buf
        });

        let stream = TcpDialer::new().dial(&peer).await.unwrap();
        drop(stream);

        assert!(accept.await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn refused_connection_is_connect_error() {
        // Grab a free port, then close it so nothing is listening
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };
        let peer = PeerAddress::new("127.0.0.1", port).unwrap();

        let err = TcpDialer::new().dial(&peer).await.unwrap_err();

        assert!(matches!(err, TransportError::Connect { .. }));
        assert!(err.to_string().contains(&port.to_string()));
    }
}
