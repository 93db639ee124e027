//! Clipboard change-detection loop

use tracing::{debug, info, warn};

use crate::domain::{Duration, Fingerprint, PeerAddress};

use super::ports::Clipboard;
use super::sender::Deliver;

/// What a single poll tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Clipboard could not be read; state left as it was
    ReadFailed,
    /// Same fingerprint as last time
    Unchanged,
    /// Change detected and delivered
    Delivered { bytes: usize },
    /// Change detected, delivery failed (not retried on later ticks)
    DeliveryFailed,
}

/// Polls the local clipboard and hands changes to the sender.
///
/// The last-known fingerprint lives here and is only ever touched through
/// `&mut self`, so the poller is its single writer.
pub struct ClipboardPoller<C, D>
where
    C: Clipboard,
    D: Deliver,
{
    clipboard: C,
    sender: D,
    peer: PeerAddress,
    interval: Duration,
    last_fingerprint: Option<Fingerprint>,
}

impl<C, D> ClipboardPoller<C, D>
where
    C: Clipboard,
    D: Deliver,
{
    /// Create a poller with no known fingerprint, so the first successful
    /// read always triggers a delivery.
    pub fn new(clipboard: C, sender: D, peer: PeerAddress, interval: Duration) -> Self {
        Self {
            clipboard,
            sender,
            peer,
            interval,
            last_fingerprint: None,
        }
    }

    pub fn last_fingerprint(&self) -> Option<Fingerprint> {
        self.last_fingerprint
    }

    /// Sample the clipboard once and deliver if it changed
    pub async fn tick(&mut self) -> TickOutcome {
        let snapshot = match self.clipboard.read().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "failed to read clipboard");
                return TickOutcome::ReadFailed;
            }
        };

        let fingerprint = snapshot.fingerprint();
        if self.last_fingerprint == Some(fingerprint) {
            return TickOutcome::Unchanged;
        }

        debug!(fingerprint = %fingerprint.short(), bytes = snapshot.len(), "clipboard changed");

        let result = self.sender.deliver(&self.peer).await;

        // Advance even on failure: one attempt per observed change
        self.last_fingerprint = Some(fingerprint);

        match result {
            Ok(bytes) => {
                info!(peer = %self.peer, bytes, "clipboard sent");
                TickOutcome::Delivered { bytes }
            }
            Err(e) => {
                warn!(peer = %self.peer, error = %e, "failed to send clipboard");
                TickOutcome::DeliveryFailed
            }
        }
    }

    /// Tick forever, sleeping the fixed interval after every tick
    pub async fn run(&mut self) {
        loop {
            self.tick().await;
            tokio::time::sleep(self.interval.as_std()).await;
        }
    }
}
