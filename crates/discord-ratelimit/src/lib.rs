//! Discord Rate Limit - per-route rate-limit tracking for the Discord REST API
//!
//! Discord groups requests into buckets. Every response carries headers that
//! describe the bucket it landed in; this crate turns those headers into
//! admission decisions for the next request on the same route:
//!
//! - **Header Parsing**: `x-ratelimit-*` and `retry-after`
//! - **Route Buckets**: fixed windows learned from response headers
//! - **Global Limit**: a token bucket shared by every route
//! - **Registry**: buckets keyed by normalized route
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use discord_ratelimit::{BucketRegistry, RateLimitConfig, RateLimitHeaders};
//!
//! let registry = BucketRegistry::new(&RateLimitConfig::discord_global())?;
//!
//! // Before sending
//! registry.acquire("/channels/1/messages/{id}", max_wait).await?;
//!
//! // After the response arrives
//! registry.update("/channels/1/messages/{id}", &RateLimitHeaders::parse(&headers));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod headers;
mod registry;
mod route_bucket;
mod token_bucket;

pub use headers::*;
pub use registry::*;
pub use route_bucket::*;
pub use token_bucket::*;

use std::time::Duration;

use async_trait::async_trait;

/// Common trait for rate limiters.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Try to acquire a permit without blocking.
    ///
    /// Returns `true` if the request is allowed, `false` if rate limited.
    async fn try_acquire(&self) -> bool;

    /// Acquire a permit, waiting if necessary.
    ///
    /// Returns the time waited, or an error if the wait would exceed `max_wait`.
    async fn acquire(&self, max_wait: Duration) -> Result<Duration, RateLimitError>;

    /// Get the current remaining quota.
    fn remaining(&self) -> u32;

    /// Get the time until the next permit is available.
    async fn wait_time(&self) -> Duration;

    /// Reset the rate limiter state.
    async fn reset(&self);

    /// Get the current state as a snapshot.
    fn state(&self) -> RateLimitState;
}

/// Poll `limiter` until it admits, sleeping for the wait it reports.
///
/// Gives up with [`RateLimitError::WaitExceeded`] as soon as the next sleep
/// would carry the total past `max_wait`.
pub(crate) async fn acquire_within<L>(
    limiter: &L,
    max_wait: Duration,
) -> Result<Duration, RateLimitError>
where
    L: RateLimiter + ?Sized,
{
    let start = tokio::time::Instant::now();
    loop {
        if limiter.try_acquire().await {
            return Ok(start.elapsed());
        }

        let needed = start.elapsed() + limiter.wait_time().await;
        if needed > max_wait {
            return Err(RateLimitError::WaitExceeded {
                wait_time: needed,
                max_wait,
            });
        }
        tokio::time::sleep_until(start + needed).await;
    }
}

/// Rate limiter state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RateLimitState {
    /// Maximum requests allowed in the window.
    pub limit: u32,

    /// Remaining requests in the current window.
    pub remaining: u32,

    /// Time until the window resets.
    pub reset_after: Duration,

    /// Whether currently rate limited.
    pub is_limited: bool,
}

/// Rate limit error.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    /// Wait time would exceed maximum allowed.
    #[error("Wait time {wait_time:?} exceeds maximum {max_wait:?}")]
    WaitExceeded {
        /// Required wait time.
        wait_time: Duration,
        /// Maximum allowed wait.
        max_wait: Duration,
    },

    /// Invalid configuration.
    #[error("Invalid rate limit configuration: {0}")]
    InvalidConfig(String),
}

impl RateLimitError {
    /// Time the caller would have had to wait, if known.
    #[must_use]
    pub const fn wait_time(&self) -> Option<Duration> {
        match self {
            Self::WaitExceeded { wait_time, .. } => Some(*wait_time),
            Self::InvalidConfig(_) => None,
        }
    }
}

/// Configuration for the global token bucket.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    pub requests_per_window: u32,

    /// Window duration.
    pub window: Duration,

    /// Allow burst above limit.
    #[serde(default)]
    pub burst_size: Option<u32>,
}

impl RateLimitConfig {
    /// Create a new rate limit configuration.
    #[must_use]
    pub const fn new(requests_per_window: u32, window: Duration) -> Self {
        Self {
            requests_per_window,
            window,
            burst_size: None,
        }
    }

    /// Set burst size.
    #[must_use]
    pub const fn with_burst(mut self, burst: u32) -> Self {
        self.burst_size = Some(burst);
        self
    }

    /// Discord's documented global limit: 50 requests per second.
    #[must_use]
    pub const fn discord_global() -> Self {
        Self::new(50, Duration::from_secs(1))
    }

    /// Check that the configuration can ever admit a request.
    ///
    /// # Errors
    /// Returns [`RateLimitError::InvalidConfig`] for a zero quota or zero window.
    pub fn validate(&self) -> Result<(), RateLimitError> {
        if self.requests_per_window == 0 {
            return Err(RateLimitError::InvalidConfig(
                "requests_per_window must be greater than zero".into(),
            ));
        }
        if self.window.is_zero() {
            return Err(RateLimitError::InvalidConfig(
                "window must be non-zero".into(),
            ));
        }
        if self.burst_size == Some(0) {
            return Err(RateLimitError::InvalidConfig(
                "burst_size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::discord_global()
    }
}
