//! Clipboard delivery use case

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::domain::{PeerAddress, RetryPolicy};

use super::ports::{Clipboard, ClipboardError, Dialer, TransportError};

/// Errors from a single delivery
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    #[error("Clipboard read before send failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Gave up after {attempts} connect attempts: {last_error}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last_error: TransportError,
    },

    #[error("Failed to write payload: {0}")]
    Write(String),
}

/// Something that can push the current clipboard to a peer
#[async_trait]
pub trait Deliver: Send + Sync {
    /// Deliver once. Returns the number of payload bytes written.
    async fn deliver(&self, peer: &PeerAddress) -> Result<usize, DeliveryError>;
}

/// Reads the clipboard, dials the peer with bounded retry and writes the
/// payload in one go.
pub struct SendClipboardUseCase<C, D>
where
    C: Clipboard,
    D: Dialer,
{
    clipboard: C,
    dialer: D,
    retry: RetryPolicy,
}

impl<C, D> SendClipboardUseCase<C, D>
where
    C: Clipboard,
    D: Dialer,
{
    /// Create a new sender
    pub fn new(clipboard: C, dialer: D, retry: RetryPolicy) -> Self {
        Self {
            clipboard,
            dialer,
            retry,
        }
    }

    /// Dial until the first success or until the attempt budget runs out
    async fn connect(&self, peer: &PeerAddress) -> Result<D::Stream, DeliveryError> {
        let mut attempt = 1;
        loop {
            match self.dialer.dial(peer).await {
                Ok(stream) => {
                    if attempt > 1 {
                        info!(%peer, attempt, "connected after retrying");
                    }
                    return Ok(stream);
                }
                Err(e) => {
                    if !self.retry.should_retry(attempt) {
                        return Err(DeliveryError::RetriesExhausted {
                            attempts: attempt,
                            last_error: e,
                        });
                    }
                    debug!(
                        %peer,
                        attempt,
                        max_attempts = self.retry.max_attempts(),
                        error = %e,
                        "connect failed, retrying in {}",
                        self.retry.delay()
                    );
                    tokio::time::sleep(self.retry.delay().as_std()).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[async_trait]
impl<C, D> Deliver for SendClipboardUseCase<C, D>
where
    C: Clipboard,
    D: Dialer,
{
    async fn deliver(&self, peer: &PeerAddress) -> Result<usize, DeliveryError> {
        // The payload is whatever the clipboard holds now, not the content
        // that triggered the change.
        let snapshot = self.clipboard.read().await?;

        let mut stream = self.connect(peer).await?;

        stream
            .write_all(snapshot.as_bytes())
            .await
            .map_err(|e| DeliveryError::Write(e.to_string()))?;

        // EOF marks the end of the message
        if let Err(e) = stream.shutdown().await {
            debug!(%peer, error = %e, "shutdown after write failed");
        }

        Ok(snapshot.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clipboard::ClipboardSnapshot;
    use crate::domain::Duration;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use tokio::io::{AsyncReadExt, DuplexStream};
    use tokio::time::Instant;

    struct MockClipboard {
        content: Mutex<Result<String, ClipboardError>>,
    }

    impl MockClipboard {
        fn with_text(text: &str) -> Self {
            Self {
                content: Mutex::new(Ok(text.to_string())),
            }
        }

        fn failing() -> Self {
            Self {
                content: Mutex::new(Err(ClipboardError::Unavailable("no display".into()))),
            }
        }
    }

    #[async_trait]
    impl Clipboard for MockClipboard {
        async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
            self.content.lock().unwrap().clone().map(ClipboardSnapshot::new)
        }

        async fn write(&self, text: &str) -> Result<(), ClipboardError> {
            *self.content.lock().unwrap() = Ok(text.to_string());
            Ok(())
        }
    }

    /// Fails the first `failures` dials, then hands out in-memory pipes
    struct MockDialer {
        failures: u32,
        attempts: AtomicU32,
        drop_peer_end: bool,
        peer_ends: Mutex<Vec<DuplexStream>>,
    }

    impl MockDialer {
        fn failing_first(failures: u32) -> Self {
            Self {
                failures,
                attempts: AtomicU32::new(0),
                drop_peer_end: false,
                peer_ends: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self::failing_first(u32::MAX)
        }

        fn attempts(&self) -> u32 {
            self.attempts.load(Ordering::SeqCst)
        }

        async fn received(&self) -> String {
            let mut peer = self.peer_ends.lock().unwrap().remove(0);
            let mut buf = String::new();
            peer.read_to_string(&mut buf).await.unwrap();
            buf
        }
    }

    #[async_trait]
    impl Dialer for MockDialer {
        type Stream = DuplexStream;

        async fn dial(&self, peer: &PeerAddress) -> Result<DuplexStream, TransportError> {
            let n = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
            if n <= self.failures {
                return Err(TransportError::Connect {
                    peer: peer.to_string(),
                    message: "connection refused".into(),
                });
            }
            let (local, remote) = tokio::io::duplex(64 * 1024);
            if !self.drop_peer_end {
                self.peer_ends.lock().unwrap().push(remote);
            }
            Ok(local)
        }
    }

    fn peer() -> PeerAddress {
        PeerAddress::new("10.0.0.2", 9000).unwrap()
    }

    #[tokio::test]
    async fn delivers_current_clipboard_on_first_try() {
        let sender = SendClipboardUseCase::new(
            MockClipboard::with_text("hello"),
            MockDialer::failing_first(0),
            RetryPolicy::default(),
        );

        let bytes = sender.deliver(&peer()).await.unwrap();

        assert_eq!(bytes, 5);
        assert_eq!(sender.dialer.attempts(), 1);
        assert_eq!(sender.dialer.received().await, "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_connect_succeeds() {
        let sender = SendClipboardUseCase::new(
            MockClipboard::with_text("payload"),
            MockDialer::failing_first(3),
            RetryPolicy::default(),
        );
        let started = Instant::now();

        sender.deliver(&peer()).await.unwrap();

        assert_eq!(sender.dialer.attempts(), 4);
        assert_eq!(started.elapsed(), std::time::Duration::from_secs(6));
        assert_eq!(sender.dialer.received().await, "payload");
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_exactly_one_hundred_attempts() {
        let sender = SendClipboardUseCase::new(
            MockClipboard::with_text("payload"),
            MockDialer::unreachable(),
            RetryPolicy::default(),
        );
        let started = Instant::now();

        let err = sender.deliver(&peer()).await.unwrap_err();

        assert!(matches!(
            err,
            DeliveryError::RetriesExhausted { attempts: 100, .. }
        ));
        assert_eq!(sender.dialer.attempts(), 100);
        // 99 pauses: none after the final failure
        assert_eq!(started.elapsed(), std::time::Duration::from_secs(198));
    }

    #[tokio::test(start_paused = true)]
    async fn honours_custom_retry_budget() {
        let policy = RetryPolicy::new(3, Duration::from_millis(500)).unwrap();
        let sender = SendClipboardUseCase::new(
            MockClipboard::with_text("x"),
            MockDialer::unreachable(),
            policy,
        );
        let started = Instant::now();

        assert!(sender.deliver(&peer()).await.is_err());
        assert_eq!(sender.dialer.attempts(), 3);
        assert_eq!(started.elapsed(), std::time::Duration::from_secs(1));
    }

    #[tokio::test]
    async fn clipboard_read_failure_skips_dialing() {
        let sender = SendClipboardUseCase::new(
            MockClipboard::failing(),
            MockDialer::failing_first(0),
            RetryPolicy::default(),
        );

        let err = sender.deliver(&peer()).await.unwrap_err();

        assert!(matches!(err, DeliveryError::Clipboard(_)));
        assert_eq!(sender.dialer.attempts(), 0);
    }

    #[tokio::test]
    async fn write_failure_is_not_retried() {
        let mut dialer = MockDialer::failing_first(0);
        dialer.drop_peer_end = true;
        let sender = SendClipboardUseCase::new(
            MockClipboard::with_text("lost"),
            dialer,
            RetryPolicy::default(),
        );

        let err = sender.deliver(&peer()).await.unwrap_err();

        assert!(matches!(err, DeliveryError::Write(_)));
        assert_eq!(sender.dialer.attempts(), 1);
    }

    #[tokio::test]
    async fn sends_content_present_at_send_time() {
        let clipboard = MockClipboard::with_text("seen by poller");
        clipboard.write("changed before send").await.unwrap();
        let sender = SendClipboardUseCase::new(
            clipboard,
            MockDialer::failing_first(0),
            RetryPolicy::default(),
        );

        sender.deliver(&peer()).await.unwrap();

        assert_eq!(sender.dialer.received().await, "changed before send");
    }
}
