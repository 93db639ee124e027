//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the platform clipboard, TCP and the config file.

pub mod clipboard;
pub mod config;
pub mod network;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, WaylandClipboard};
pub use config::XdgConfigStore;
pub use network::{ClipboardListener, TcpDialer};
