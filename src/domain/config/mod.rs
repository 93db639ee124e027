//! Configuration value objects

mod app_config;
mod backend;

pub use app_config::{AppConfig, DEFAULT_BIND_ADDRESS};
pub use backend::ClipboardBackend;
