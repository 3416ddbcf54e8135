//! Token bucket used for the global request limit.
//!
//! Discord caps every bot at a fixed number of requests per second across all
//! routes. The cap is known up front, so it is enforced with a plain token
//! bucket instead of being learned from headers.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::{RateLimitConfig, RateLimitError, RateLimitState, RateLimiter};

#[derive(Debug)]
struct Tokens {
    available: u32,
    /// Start of the current refill period.
    period_start: Instant,
}

/// Token bucket rate limiter.
///
/// Every `period` the bucket gains `per_period` tokens, up to `capacity`.
/// Each request spends one.
#[derive(Debug)]
pub struct TokenBucket {
    capacity: u32,
    per_period: u32,
    period: Duration,
    tokens: Mutex<Tokens>,
}

impl TokenBucket {
    /// Bucket admitting `requests` per `period`.
    #[must_use]
    pub fn new(requests: u32, period: Duration) -> Self {
        Self::from_config(&RateLimitConfig::new(requests, period))
    }

    /// Bucket from configuration; `burst_size` overrides the capacity.
    #[must_use]
    pub fn from_config(config: &RateLimitConfig) -> Self {
        let capacity = config.burst_size.unwrap_or(config.requests_per_window);
        Self {
            capacity,
            per_period: config.requests_per_window,
            period: config.window,
            tokens: Mutex::new(Tokens {
                available: capacity,
                period_start: Instant::now(),
            }),
        }
    }

    /// Lock the bucket with every whole period since the last visit credited.
    fn refilled(&self) -> parking_lot::MutexGuard<'_, Tokens> {
        let mut tokens = self.tokens.lock();
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(tokens.period_start);

        if elapsed >= self.period {
            let periods = elapsed.as_nanos() / self.period.as_nanos().max(1);
            let credit = u32::try_from(periods)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.per_period);
            tokens.available = tokens.available.saturating_add(credit).min(self.capacity);
            tokens.period_start = now;
        }
        tokens
    }

    fn next_period(&self, tokens: &Tokens) -> Duration {
        self.period
            .saturating_sub(tokens.period_start.elapsed())
            .max(Duration::from_millis(1))
    }
}

#[async_trait]
impl RateLimiter for TokenBucket {
    async fn try_acquire(&self) -> bool {
        let mut tokens = self.refilled();
        if tokens.available == 0 {
            return false;
        }
        tokens.available -= 1;
        true
    }

    async fn acquire(&self, max_wait: Duration) -> Result<Duration, RateLimitError> {
        crate::acquire_within(self, max_wait).await
    }

    fn remaining(&self) -> u32 {
        self.refilled().available
    }

    async fn wait_time(&self) -> Duration {
        let tokens = self.refilled();
        if tokens.available > 0 {
            Duration::ZERO
        } else {
            self.next_period(&tokens)
        }
    }

    async fn reset(&self) {
        *self.tokens.lock() = Tokens {
            available: self.capacity,
            period_start: Instant::now(),
        };
    }

    fn state(&self) -> RateLimitState {
        let tokens = self.refilled();
        RateLimitState {
            limit: self.capacity,
            remaining: tokens.available,
            reset_after: self.next_period(&tokens),
            is_limited: tokens.available == 0,
        }
    }
}
