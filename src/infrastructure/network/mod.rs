//! Network infrastructure module
//!
//! Plain TCP on both sides: the dialer pushes clipboard content out and the
//! listener takes it in. No framing; EOF ends a message.

mod dialer;
mod listener;

pub use dialer::TcpDialer;
pub use listener::ClipboardListener;
