//! Clipboard content and change detection

mod fingerprint;
mod snapshot;

pub use fingerprint::Fingerprint;
pub use snapshot::ClipboardSnapshot;
