//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup, signal
//! handling, and the sync runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod signals;
pub mod sync_app;

// Re-export commonly used types
pub use app::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, SyncOptions};
pub use presenter::Presenter;
pub use sync_app::run_sync;
