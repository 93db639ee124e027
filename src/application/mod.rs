//! Application layer - Use cases and port interfaces
//!
//! Contains the sync loop, delivery and receive operations, and the trait
//! definitions for external system interactions.

pub mod poller;
pub mod ports;
pub mod receiver;
pub mod sender;

// Re-export use cases
pub use poller::{ClipboardPoller, TickOutcome};
pub use receiver::{ReceiveClipboardUseCase, ReceiveError};
pub use sender::{Deliver, DeliveryError, SendClipboardUseCase};
