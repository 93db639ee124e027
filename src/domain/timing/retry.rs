//! Connect retry policy

use crate::domain::error::InvalidRetryPolicy;

use super::Duration;

/// Default number of connect attempts per delivery
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Bounded retry budget for dialing the peer.
///
/// `max_attempts` counts every dial, including the first one. The delay is
/// slept between attempts only, never after the last failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Create a policy, rejecting a zero attempt budget
    pub fn new(max_attempts: u32, delay: Duration) -> Result<Self, InvalidRetryPolicy> {
        if max_attempts == 0 {
            return Err(InvalidRetryPolicy);
        }
        Ok(Self {
            max_attempts,
            delay,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether another attempt is allowed after `attempt` (1-based) failed
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: Duration::default_retry_delay(),
        }
    }
}
