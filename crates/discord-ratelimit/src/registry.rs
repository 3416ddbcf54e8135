//! Buckets keyed by normalized route, plus the global limit.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::{
    RateLimitConfig, RateLimitError, RateLimitHeaders, RateLimitState, RateLimiter, RouteBucket,
    TokenBucket,
};

/// Shared rate limit state for one client.
///
/// Admission for a request checks, in order: a global lockout imposed by a
/// global 429, the route's own bucket, and the global token bucket. Only
/// routes that reported rate limit headers get a bucket, and buckets whose
/// window has reset are dropped as new routes arrive.
#[derive(Debug)]
pub struct BucketRegistry {
    buckets: RwLock<HashMap<String, Arc<RouteBucket>>>,
    global: TokenBucket,
    global_until: Mutex<Option<Instant>>,
}

impl BucketRegistry {
    /// Create a registry enforcing `global` across every route.
    ///
    /// # Errors
    /// Returns [`RateLimitError::InvalidConfig`] if the global limit can never
    /// admit a request.
    pub fn new(global: &RateLimitConfig) -> Result<Self, RateLimitError> {
        global.validate()?;
        Ok(Self::with_global(TokenBucket::from_config(global)))
    }

    fn with_global(global: TokenBucket) -> Self {
        Self {
            buckets: RwLock::new(HashMap::new()),
            global,
            global_until: Mutex::new(None),
        }
    }

    /// The bucket tracked for `key`, if a response on it reported one.
    #[must_use]
    pub fn bucket(&self, key: &str) -> Option<Arc<RouteBucket>> {
        self.buckets.read().get(key).cloned()
    }

    fn bucket_or_insert(&self, key: &str) -> Arc<RouteBucket> {
        if let Some(bucket) = self.bucket(key) {
            return bucket;
        }

        let mut buckets = self.buckets.write();
        if !buckets.contains_key(key) {
            let before = buckets.len();
            buckets.retain(|_, bucket| !bucket.is_idle());
            let dropped = before - buckets.len();
            if dropped > 0 {
                debug!(dropped, "Dropped idle route buckets");
            }
        }
        Arc::clone(
            buckets
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(RouteBucket::new())),
        )
    }

    /// Number of routes currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.read().len()
    }

    /// Whether no route is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.read().is_empty()
    }

    /// Snapshot of a route's bucket, if the route is tracked.
    #[must_use]
    pub fn state(&self, key: &str) -> Option<RateLimitState> {
        self.buckets.read().get(key).map(|bucket| bucket.state())
    }

    /// Wait until a request on `key` may be sent.
    ///
    /// Returns the total time waited.
    ///
    /// # Errors
    /// Returns [`RateLimitError::WaitExceeded`] without waiting further once the
    /// combined wait would exceed `max_wait`.
    pub async fn acquire(
        &self,
        key: &str,
        max_wait: Duration,
    ) -> Result<Duration, RateLimitError> {
        let start = Instant::now();
        let exceeded = |wait_time| RateLimitError::WaitExceeded {
            wait_time,
            max_wait,
        };

        let lockout = self.global_lockout();
        if !lockout.is_zero() {
            if lockout > max_wait {
                return Err(exceeded(lockout));
            }
            warn!(wait_ms = lockout.as_millis() as u64, "Globally rate limited, waiting");
            sleep(lockout).await;
        }

        // A spent route is waited out before a global token is spent on it.
        let bucket = self.bucket(key);
        if let Some(bucket) = &bucket {
            let wait = bucket.wait_time().await;
            if !wait.is_zero() {
                let needed = start.elapsed() + wait;
                if needed > max_wait {
                    return Err(exceeded(needed));
                }
                debug!(route = key, wait_ms = wait.as_millis() as u64, "Waiting for route bucket");
                sleep(wait).await;
            }
        }

        let offset = start.elapsed();
        self.global
            .acquire(max_wait.saturating_sub(offset))
            .await
            .map_err(|err| rebase(err, offset, max_wait))?;

        if let Some(bucket) = bucket {
            let offset = start.elapsed();
            bucket
                .acquire(max_wait.saturating_sub(offset))
                .await
                .map_err(|err| rebase(err, offset, max_wait))?;
        }
        Ok(start.elapsed())
    }

    /// Record the headers of a response received on `key`.
    pub fn update(&self, key: &str, headers: &RateLimitHeaders) {
        if headers.global {
            if let Some(retry_after) = headers.retry_after {
                warn!(
                    retry_after_ms = retry_after.as_millis() as u64,
                    "Global rate limit hit"
                );
                *self.global_until.lock() = Instant::now().checked_add(retry_after);
            }
            return;
        }

        if headers.is_empty() && headers.bucket.is_none() {
            return;
        }
        self.bucket_or_insert(key).update(headers);
    }

    /// Forget every route and any global lockout.
    pub async fn clear(&self) {
        self.buckets.write().clear();
        *self.global_until.lock() = None;
        self.global.reset().await;
    }

    /// Time left on a global lockout, zero when none is in force.
    #[must_use]
    pub fn global_lockout(&self) -> Duration {
        let mut until = self.global_until.lock();
        match *until {
            Some(at) => {
                let remaining = at.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    *until = None;
                }
                remaining
            }
            None => Duration::ZERO,
        }
    }
}

impl Default for BucketRegistry {
    fn default() -> Self {
        Self::with_global(TokenBucket::from_config(&RateLimitConfig::discord_global()))
    }
}

/// Report a limiter's refusal against the caller's whole budget.
fn rebase(err: RateLimitError, offset: Duration, max_wait: Duration) -> RateLimitError {
    match err {
        RateLimitError::WaitExceeded { wait_time, .. } => RateLimitError::WaitExceeded {
            wait_time: offset + wait_time,
            max_wait,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spent(reset_after: Duration) -> RateLimitHeaders {
        RateLimitHeaders {
            limit: Some(5),
            remaining: Some(0),
            reset_after: Some(reset_after),
            ..RateLimitHeaders::default()
        }
    }

    fn open(reset_after: Duration) -> RateLimitHeaders {
        RateLimitHeaders {
            remaining: Some(4),
            ..spent(reset_after)
        }
    }

    #[test]
    fn test_bucket_is_shared_per_key() {
        let registry = BucketRegistry::default();
        registry.update("/channels/1/messages/{id}", &open(Duration::from_secs(5)));
        registry.update("/channels/2/messages/{id}", &open(Duration::from_secs(5)));

        let a = registry.bucket("/channels/1/messages/{id}").unwrap();
        let b = registry.bucket("/channels/1/messages/{id}").unwrap();
        let c = registry.bucket("/channels/2/messages/{id}").unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_new_rejects_invalid_global() {
        let config = RateLimitConfig::new(0, Duration::from_secs(1));
        assert!(BucketRegistry::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_acquire_on_fresh_route_is_immediate() {
        let registry = BucketRegistry::default();
        let waited = registry
            .acquire("/channels/1", Duration::from_secs(1))
            .await
            .unwrap();
        assert!(waited < Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_headerless_acquires_create_no_bucket() {
        let config = RateLimitConfig::new(10_000, Duration::from_secs(1));
        let registry = BucketRegistry::new(&config).unwrap();

        for i in 0..500 {
            let key = format!("/channels/{i}");
            registry.acquire(&key, Duration::from_secs(1)).await.unwrap();
            registry.update(&key, &RateLimitHeaders::new());
        }

        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_idle_buckets_are_dropped_for_new_routes() {
        let registry = BucketRegistry::default();
        registry.update("/channels/1", &open(Duration::from_millis(20)));
        registry.update("/channels/2", &spent(Duration::from_secs(30)));
        assert_eq!(registry.len(), 2);

        tokio::time::sleep(Duration::from_millis(40)).await;
        registry.update("/channels/3", &open(Duration::from_secs(30)));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.state("/channels/1"), None);
        assert!(registry.state("/channels/2").unwrap().is_limited);
        assert!(registry.state("/channels/3").is_some());
    }

    #[tokio::test]
    async fn test_spent_route_refuses_beyond_max_wait() {
        let registry = BucketRegistry::default();
        registry.update("/channels/1", &spent(Duration::from_secs(30)));

        let err = registry
            .acquire("/channels/1", Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, RateLimitError::WaitExceeded { .. }));

        // Other routes are unaffected.
        assert!(registry
            .acquire("/channels/2", Duration::from_millis(10))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_refused_route_keeps_global_token() {
        let config = RateLimitConfig::new(1, Duration::from_secs(30));
        let registry = BucketRegistry::new(&config).unwrap();
        registry.update("/channels/1", &spent(Duration::from_secs(30)));

        assert!(registry
            .acquire("/channels/1", Duration::from_millis(10))
            .await
            .is_err());
        assert!(registry
            .acquire("/channels/2", Duration::from_millis(10))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_global_429_locks_every_route() {
        let registry = BucketRegistry::default();
        registry.update(
            "/channels/1",
            &RateLimitHeaders {
                retry_after: Some(Duration::from_secs(30)),
                global: true,
                ..RateLimitHeaders::default()
            },
        );

        let err = registry
            .acquire("/guilds/9", Duration::from_millis(10))
            .await
            .unwrap_err();
        assert_eq!(err.wait_time().map(|w| w > Duration::from_secs(29)), Some(true));
    }

    #[tokio::test]
    async fn test_global_token_bucket_applies() {
        let config = RateLimitConfig::new(1, Duration::from_secs(30));
        let registry = BucketRegistry::new(&config).unwrap();

        assert!(registry.acquire("/a", Duration::from_millis(10)).await.is_ok());
        assert!(registry.acquire("/b", Duration::from_millis(10)).await.is_err());
    }

    #[tokio::test]
    async fn test_headerless_response_creates_no_bucket() {
        let registry = BucketRegistry::default();
        registry.update("/channels/1", &RateLimitHeaders::new());
        assert!(registry.is_empty());
        assert_eq!(registry.state("/channels/1"), None);
    }

    #[tokio::test]
    async fn test_clear_forgets_everything() {
        let registry = BucketRegistry::default();
        registry.update("/channels/1", &spent(Duration::from_secs(30)));
        assert!(registry.state("/channels/1").unwrap().is_limited);

        registry.clear().await;
        assert!(registry.is_empty());
        assert!(registry
            .acquire("/channels/1", Duration::from_millis(10))
            .await
            .is_ok());
    }
}
