//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod transport;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use transport::{Dialer, TransportError};
