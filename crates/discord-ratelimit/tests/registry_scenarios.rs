//! End-to-end scenarios: raw response headers in, admission decisions out.

use std::collections::HashMap;
use std::time::Duration;

use discord_ratelimit::{
    BucketRegistry, RateLimitHeaders, RateLimitScope, RateLimiter, MAX_REPORTED_WAIT,
};

fn response_headers(pairs: &[(&str, &str)]) -> RateLimitHeaders {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    RateLimitHeaders::parse(&map)
}

// ============================================================================
// Route Buckets
// ============================================================================

#[tokio::test]
async fn reaction_route_spends_after_reported_quota() {
    // Given a reaction route that reported one request left in a long window
    let registry = BucketRegistry::default();
    let key = "/channels/100/messages/{id}/reactions/{id}/{id}";
    registry.update(
        key,
        &response_headers(&[
            ("x-ratelimit-limit", "1"),
            ("x-ratelimit-remaining", "1"),
            ("x-ratelimit-reset-after", "30"),
            ("x-ratelimit-bucket", "reactions"),
        ]),
    );

    // When two requests are admitted back to back
    let first = registry.acquire(key, Duration::from_millis(10)).await;
    let second = registry.acquire(key, Duration::from_millis(10)).await;

    // Then only the first one fits in the window
    assert!(first.is_ok());
    assert!(second.is_err());
    let bucket = registry.bucket(key).unwrap();
    assert_eq!(bucket.bucket_id().as_deref(), Some("reactions"));
}

#[tokio::test]
async fn exhausted_route_recovers_after_reset() {
    let registry = BucketRegistry::default();
    let key = "/channels/100/messages";
    registry.update(
        key,
        &response_headers(&[
            ("x-ratelimit-limit", "5"),
            ("x-ratelimit-remaining", "0"),
            ("x-ratelimit-reset-after", "0.05"),
        ]),
    );

    let waited = registry.acquire(key, Duration::from_secs(1)).await.unwrap();

    assert!(waited >= Duration::from_millis(30), "waited {waited:?}");
    let state = registry.state(key).unwrap();
    assert_eq!(state.limit, 5);
    assert_eq!(state.remaining, 4);
}

#[tokio::test]
async fn different_channels_do_not_share_buckets() {
    let registry = BucketRegistry::default();
    registry.update(
        "/channels/1/messages/{id}",
        &response_headers(&[
            ("x-ratelimit-limit", "5"),
            ("x-ratelimit-remaining", "0"),
            ("x-ratelimit-reset-after", "60"),
        ]),
    );

    assert!(registry
        .acquire("/channels/1/messages/{id}", Duration::from_millis(5))
        .await
        .is_err());
    assert!(registry
        .acquire("/channels/2/messages/{id}", Duration::from_millis(5))
        .await
        .is_ok());
}

// ============================================================================
// 429 Responses
// ============================================================================

#[tokio::test]
async fn shared_429_blocks_only_its_route() {
    let registry = BucketRegistry::default();
    let headers = response_headers(&[("retry-after", "20"), ("x-ratelimit-scope", "shared")]);
    assert_eq!(headers.scope, Some(RateLimitScope::Shared));

    registry.update("/guilds/7/members/{id}", &headers);

    assert!(registry
        .acquire("/guilds/7/members/{id}", Duration::from_millis(5))
        .await
        .is_err());
    assert!(registry
        .acquire("/guilds/7", Duration::from_millis(5))
        .await
        .is_ok());
}

#[tokio::test]
async fn global_429_blocks_unrelated_routes() {
    let registry = BucketRegistry::default();
    registry.update(
        "/channels/1/messages",
        &response_headers(&[("retry-after", "20"), ("x-ratelimit-global", "true")]),
    );

    let err = registry
        .acquire("/invites/{id}", Duration::from_millis(5))
        .await
        .unwrap_err();
    assert!(err.wait_time().unwrap() > Duration::from_secs(19));

    // The global lockout is not charged to the route that triggered it.
    assert_eq!(registry.state("/channels/1/messages"), None);
}

#[tokio::test]
async fn route_bucket_trait_object_is_usable() {
    let registry = BucketRegistry::default();
    assert!(registry.bucket("/users/@me").is_none());

    registry.update(
        "/users/@me",
        &response_headers(&[
            ("x-ratelimit-limit", "2"),
            ("x-ratelimit-remaining", "2"),
            ("x-ratelimit-reset-after", "1"),
        ]),
    );
    let bucket = registry.bucket("/users/@me").unwrap();
    let limiter: &dyn RateLimiter = bucket.as_ref();

    assert!(limiter.try_acquire().await);
    assert_eq!(limiter.wait_time().await, Duration::ZERO);
    assert_eq!(limiter.remaining(), 1);
}

// ============================================================================
// Hostile Headers
// ============================================================================

#[tokio::test]
async fn absurd_reset_is_capped_not_fatal() {
    let registry = BucketRegistry::default();
    let key = "/channels/1";
    registry.update(
        key,
        &response_headers(&[
            ("x-ratelimit-limit", "1"),
            ("x-ratelimit-remaining", "0"),
            ("x-ratelimit-reset-after", "1e300"),
        ]),
    );

    let err = registry
        .acquire(key, Duration::from_millis(5))
        .await
        .unwrap_err();
    let wait = err.wait_time().unwrap();
    assert!(wait > MAX_REPORTED_WAIT - Duration::from_secs(1));
    assert!(wait < MAX_REPORTED_WAIT + Duration::from_secs(1));
}
