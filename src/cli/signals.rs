//! OS shutdown signal handling

use std::fmt;

use tokio::sync::mpsc;

/// Which OS signal asked us to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / Ctrl+C
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => f.write_str("SIGINT"),
            Self::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Shutdown signal handler
///
/// One task per OS signal forwards into a channel; the sync runner waits on
/// the first message and exits the process.
pub struct ShutdownSignals {
    receiver: mpsc::Receiver<ShutdownSignal>,
}

impl ShutdownSignals {
    /// Start listening for SIGINT and SIGTERM
    #[cfg(unix)]
    pub fn listen() -> Result<Self, std::io::Error> {
        use tokio::signal::unix::{signal, SignalKind};

        let (tx, rx) = mpsc::channel(4);

        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            sigint.recv().await;
            let _ = tx_int.send(ShutdownSignal::Interrupt).await;
        });

        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            sigterm.recv().await;
            let _ = tx.send(ShutdownSignal::Terminate).await;
        });

        Ok(Self { receiver: rx })
    }

    /// Start listening for Ctrl+C
    #[cfg(not(unix))]
    pub fn listen() -> Result<Self, std::io::Error> {
        let (tx, rx) = mpsc::channel(4);

        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx.send(ShutdownSignal::Interrupt).await;
            }
        });

        Ok(Self { receiver: rx })
    }

    /// Wait for the next signal.
    /// Pends forever if every signal task is gone.
    pub async fn recv(&mut self) -> ShutdownSignal {
        match self.receiver.recv().await {
            Some(signal) => signal,
            None => std::future::pending().await,
        }
    }
}
