//! Domain layer - Core sync values
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod peer;
pub mod timing;

// Re-export common types
pub use clipboard::{ClipboardSnapshot, Fingerprint};
pub use config::{AppConfig, ClipboardBackend};
pub use error::*;
pub use peer::PeerAddress;
pub use timing::{Duration, RetryPolicy, DEFAULT_MAX_ATTEMPTS};
