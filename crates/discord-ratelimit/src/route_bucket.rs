//! Per-route buckets learned from response headers.
//!
//! Discord does not publish per-route quotas; each response states the limit,
//! what is left of it and when it resets. A [`RouteBucket`] remembers the last
//! report and refuses admission once the window is spent until it resets.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::{RateLimitError, RateLimitHeaders, RateLimitState, RateLimiter};

#[derive(Debug, Default)]
struct Window {
    limit: Option<u32>,
    remaining: u32,
    reset_at: Option<Instant>,
    bucket_id: Option<String>,
}

impl Window {
    /// Roll the window over once its reset instant has passed.
    fn refresh(&mut self, now: Instant) {
        if let Some(reset_at) = self.reset_at {
            if now >= reset_at {
                self.remaining = self.limit.unwrap_or(0);
                self.reset_at = None;
            }
        }
    }

    /// A bucket is only enforced when it is spent and we know when it resets.
    fn blocked_for(&self, now: Instant) -> Option<Duration> {
        if self.limit.is_none() || self.remaining > 0 {
            return None;
        }
        self.reset_at.map(|reset_at| reset_at.saturating_duration_since(now))
    }
}

/// Fixed-window bucket for one normalized route.
///
/// A fresh bucket knows nothing and admits every request until the first
/// response headers arrive.
#[derive(Debug, Default)]
pub struct RouteBucket {
    window: Mutex<Window>,
}

impl RouteBucket {
    /// Create an empty bucket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state reported by a response.
    pub fn update(&self, headers: &RateLimitHeaders) {
        let now = Instant::now();
        let mut window = self.window.lock();

        if let Some(limit) = headers.limit {
            window.limit = Some(limit);
        }
        if let Some(remaining) = headers.remaining {
            window.remaining = remaining;
        }
        if let Some(reset_after) = headers.reset_after {
            window.reset_at = now.checked_add(reset_after);
        }
        if let Some(bucket) = &headers.bucket {
            window.bucket_id = Some(bucket.clone());
        }

        // A 429 on this route spends the window regardless of what the other
        // headers claimed.
        if let Some(retry_after) = headers.retry_after.filter(|_| !headers.global) {
            window.limit = Some(window.limit.unwrap_or(1));
            window.remaining = 0;
            window.reset_at = now.checked_add(retry_after);
        }

        debug!(
            bucket = window.bucket_id.as_deref().unwrap_or("-"),
            limit = window.limit,
            remaining = window.remaining,
            "Updated route bucket"
        );
    }

    /// Discord's opaque hash for this bucket, once seen.
    #[must_use]
    pub fn bucket_id(&self) -> Option<String> {
        self.window.lock().bucket_id.clone()
    }

    /// Whether no reset is pending, so forgetting the bucket changes no
    /// admission decision.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        let mut window = self.window.lock();
        window.refresh(Instant::now());
        window.reset_at.is_none()
    }
}

#[async_trait]
impl RateLimiter for RouteBucket {
    async fn try_acquire(&self) -> bool {
        let now = Instant::now();
        let mut window = self.window.lock();
        window.refresh(now);

        if window.limit.is_none() {
            return true;
        }
        if window.remaining > 0 {
            window.remaining -= 1;
            return true;
        }
        window.blocked_for(now).is_none()
    }

    async fn acquire(&self, max_wait: Duration) -> Result<Duration, RateLimitError> {
        crate::acquire_within(self, max_wait).await
    }

    /// `u32::MAX` while the bucket has never been reported.
    fn remaining(&self) -> u32 {
        let mut window = self.window.lock();
        window.refresh(Instant::now());
        if window.limit.is_none() {
            u32::MAX
        } else {
            window.remaining
        }
    }

    async fn wait_time(&self) -> Duration {
        let now = Instant::now();
        let mut window = self.window.lock();
        window.refresh(now);
        window.blocked_for(now).unwrap_or(Duration::ZERO)
    }

    async fn reset(&self) {
        *self.window.lock() = Window::default();
    }

    fn state(&self) -> RateLimitState {
        let now = Instant::now();
        let mut window = self.window.lock();
        window.refresh(now);

        let reset_after = window
            .reset_at
            .map_or(Duration::ZERO, |reset_at| reset_at.saturating_duration_since(now));

        RateLimitState {
            limit: window.limit.unwrap_or(u32::MAX),
            remaining: if window.limit.is_none() {
                u32::MAX
            } else {
                window.remaining
            },
            reset_after,
            is_limited: window.blocked_for(now).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn reported(limit: u32, remaining: u32, reset_after: Duration) -> RateLimitHeaders {
        RateLimitHeaders {
            limit: Some(limit),
            remaining: Some(remaining),
            reset_after: Some(reset_after),
            bucket: Some("abcd".into()),
            ..RateLimitHeaders::default()
        }
    }

    #[tokio::test]
    async fn test_unknown_bucket_admits() {
        let bucket = RouteBucket::new();
        for _ in 0..100 {
            assert!(bucket.try_acquire().await);
        }
        assert_eq!(bucket.remaining(), u32::MAX);
        assert!(!bucket.state().is_limited);
    }

    #[tokio::test]
    async fn test_spent_bucket_blocks_until_reset() {
        let bucket = RouteBucket::new();
        bucket.update(&reported(5, 1, Duration::from_millis(60)));

        assert!(bucket.try_acquire().await);
        assert!(!bucket.try_acquire().await);
        assert!(bucket.state().is_limited);
        assert!(bucket.wait_time().await > Duration::ZERO);

        sleep(Duration::from_millis(90)).await;

        assert!(bucket.try_acquire().await);
        assert_eq!(bucket.remaining(), 4);
    }

    #[tokio::test]
    async fn test_spent_bucket_without_reset_admits() {
        let bucket = RouteBucket::new();
        bucket.update(&RateLimitHeaders {
            limit: Some(5),
            remaining: Some(0),
            ..RateLimitHeaders::default()
        });

        assert!(bucket.try_acquire().await);
    }

    #[tokio::test]
    async fn test_route_429_spends_window() {
        let bucket = RouteBucket::new();
        bucket.update(&RateLimitHeaders {
            retry_after: Some(Duration::from_secs(5)),
            ..RateLimitHeaders::default()
        });

        assert!(!bucket.try_acquire().await);
        let wait = bucket.wait_time().await;
        assert!(wait > Duration::from_secs(4) && wait <= Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_global_429_leaves_route_alone() {
        let bucket = RouteBucket::new();
        bucket.update(&RateLimitHeaders {
            retry_after: Some(Duration::from_secs(5)),
            global: true,
            ..RateLimitHeaders::default()
        });

        assert!(bucket.try_acquire().await);
    }

    #[tokio::test]
    async fn test_acquire_refuses_wait_beyond_max() {
        let bucket = RouteBucket::new();
        bucket.update(&reported(1, 0, Duration::from_secs(30)));

        let err = bucket.acquire(Duration::from_millis(10)).await.unwrap_err();
        assert!(matches!(err, RateLimitError::WaitExceeded { .. }));
    }

    #[tokio::test]
    async fn test_acquire_waits_for_reset() {
        let bucket = RouteBucket::new();
        bucket.update(&reported(2, 0, Duration::from_millis(40)));

        let waited = bucket.acquire(Duration::from_secs(1)).await.unwrap();
        assert!(waited >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_huge_reset_does_not_overflow() {
        let bucket = RouteBucket::new();
        bucket.update(&reported(1, 0, Duration::MAX));
        bucket.update(&RateLimitHeaders {
            retry_after: Some(Duration::MAX),
            ..RateLimitHeaders::default()
        });

        // An unrepresentable reset leaves nothing to wait for.
        assert!(bucket.try_acquire().await);
        assert!(bucket.is_idle());
    }

    #[tokio::test]
    async fn test_idle_once_window_resets() {
        let bucket = RouteBucket::new();
        assert!(bucket.is_idle());

        bucket.update(&reported(5, 4, Duration::from_millis(30)));
        assert!(!bucket.is_idle());

        sleep(Duration::from_millis(50)).await;
        assert!(bucket.is_idle());
        assert_eq!(bucket.remaining(), 5);
    }

    #[tokio::test]
    async fn test_reset_forgets_state() {
        let bucket = RouteBucket::new();
        bucket.update(&reported(1, 0, Duration::from_secs(30)));
        assert_eq!(bucket.bucket_id().as_deref(), Some("abcd"));

        bucket.reset().await;
        assert!(bucket.try_acquire().await);
        assert_eq!(bucket.bucket_id(), None);
    }
}
