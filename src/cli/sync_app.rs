//! Sync runner: wires the poller, sender, receiver and signal handling

use std::process::ExitCode;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::application::ports::Clipboard;
use crate::application::{ClipboardPoller, ReceiveClipboardUseCase, SendClipboardUseCase};
use crate::infrastructure::{create_clipboard, ClipboardListener, TcpDialer};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::args::SyncOptions;
use super::presenter::Presenter;
use super::signals::ShutdownSignals;

/// Run the sync daemon until a shutdown signal arrives.
///
/// The signal path ends the process directly: in-flight deliveries and
/// inbound connections are not drained.
pub async fn run_sync(options: SyncOptions) -> ExitCode {
    let presenter = Presenter::new();

    let mut signals = match ShutdownSignals::listen() {
        Ok(s) => s,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let clipboard = create_clipboard(options.backend);

    let _receiver = spawn_receiver(
        Arc::clone(&clipboard),
        options.bind_address.clone(),
        options.listen_port,
    );

    let sender = SendClipboardUseCase::new(Arc::clone(&clipboard), TcpDialer::new(), options.retry);
    let mut poller = ClipboardPoller::new(
        clipboard,
        sender,
        options.peer.clone(),
        options.poll_interval,
    );

    presenter.sync_status(&format!(
        "Sending to {} | Listening on {}:{}",
        options.peer, options.bind_address, options.listen_port
    ));
    presenter.info(&format!(
        "Backend: {} | Poll: {} | Retry: {} x {}",
        options.backend,
        options.poll_interval,
        options.retry.max_attempts(),
        options.retry.delay()
    ));

    tokio::select! {
        _ = poller.run() => {}
        signal = signals.recv() => {
            presenter.info(&format!("Received {} (shutdown). Exiting...", signal));
            std::process::exit(i32::from(EXIT_SUCCESS));
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Start the receive side on its own task.
///
/// A bind failure only stops this task; outbound sync keeps running.
pub(crate) fn spawn_receiver(
    clipboard: Arc<dyn Clipboard>,
    host: String,
    port: u16,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let listener = match ClipboardListener::bind(&host, port).await {
            Ok(listener) => listener,
            Err(e) => {
                error!(error = %e, "receiver stopped, outbound sync continues");
                return;
            }
        };

        match listener.local_addr() {
            Ok(addr) => info!(%addr, "listening for clipboard updates"),
            Err(_) => info!(%host, port, "listening for clipboard updates"),
        }

        let receiver = Arc::new(ReceiveClipboardUseCase::new(clipboard));
        listener.run(receiver).await;
    })
}
