//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard (primary)
//! or wl-clipboard tools on Wayland.

mod arboard;
mod wayland;

use std::sync::Arc;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use crate::application::ports::Clipboard;
use crate::domain::ClipboardBackend;

/// Create the clipboard adapter for the selected backend.
///
/// The handle is shared by the poller, the sender and every inbound
/// connection handler.
pub fn create_clipboard(backend: ClipboardBackend) -> Arc<dyn Clipboard> {
    match backend {
        ClipboardBackend::Arboard => Arc::new(ArboardClipboard::new()),
        ClipboardBackend::Wayland => Arc::new(WaylandClipboard::new()),
    }
}
