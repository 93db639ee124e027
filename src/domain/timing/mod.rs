//! Timing value objects

mod duration;
mod retry;

pub use duration::{Duration, DEFAULT_POLL_INTERVAL_MS, DEFAULT_RETRY_DELAY_MS};
pub use retry::{RetryPolicy, DEFAULT_MAX_ATTEMPTS};
