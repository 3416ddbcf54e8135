//! Rate limit header parsing.
//!
//! Discord reports bucket state on every response through `x-ratelimit-*`
//! headers, and adds `retry-after` when a request was rejected with 429.

use std::collections::HashMap;
use std::time::Duration;

/// Longest wait taken from a header; larger values are clamped to it.
pub const MAX_REPORTED_WAIT: Duration = Duration::from_secs(3600);

/// Which limit a 429 response was charged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitScope {
    /// Per-bot, per-route limit.
    User,
    /// Per-bot limit across all routes.
    Global,
    /// Per-resource limit shared with other users of the resource.
    Shared,
}

impl RateLimitScope {
    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "user" => Some(Self::User),
            "global" => Some(Self::Global),
            "shared" => Some(Self::Shared),
            _ => None,
        }
    }
}

/// Parsed rate limit information from HTTP headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateLimitHeaders {
    /// Maximum requests allowed in the bucket.
    pub limit: Option<u32>,

    /// Remaining requests in the current window.
    pub remaining: Option<u32>,

    /// Unix timestamp (fractional seconds) at which the window resets.
    pub reset_at: Option<f64>,

    /// Time until the window resets.
    pub reset_after: Option<Duration>,

    /// Opaque bucket hash assigned by Discord.
    pub bucket: Option<String>,

    /// Whether a 429 was caused by the global limit.
    pub global: bool,

    /// Scope of the limit a 429 was charged against.
    pub scope: Option<RateLimitScope>,

    /// Retry after duration (from 429 response).
    pub retry_after: Option<Duration>,
}

impl RateLimitHeaders {
    /// Create empty headers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse headers from a map keyed by lowercase header name.
    #[must_use]
    pub fn parse(headers: &HashMap<String, String>) -> Self {
        let global = headers
            .get("x-ratelimit-global")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));
        let scope = headers
            .get("x-ratelimit-scope")
            .and_then(|v| RateLimitScope::parse(v));

        Self {
            limit: parse_header_u32(headers, "x-ratelimit-limit"),
            remaining: parse_header_u32(headers, "x-ratelimit-remaining"),
            reset_at: parse_header_f64(headers, "x-ratelimit-reset"),
            reset_after: parse_header_secs(headers, "x-ratelimit-reset-after"),
            bucket: headers.get("x-ratelimit-bucket").cloned(),
            global: global || scope == Some(RateLimitScope::Global),
            scope,
            retry_after: parse_header_secs(headers, "retry-after"),
        }
    }

    /// Whether the response carried any rate limit information at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limit.is_none()
            && self.remaining.is_none()
            && self.reset_after.is_none()
            && self.reset_at.is_none()
            && self.retry_after.is_none()
    }

    /// Get suggested wait time.
    #[must_use]
    pub fn suggested_wait(&self) -> Option<Duration> {
        // Prefer retry_after if present
        if let Some(retry) = self.retry_after {
            return Some(retry);
        }

        if self.remaining == Some(0) {
            return self.reset_after;
        }

        None
    }

    /// Check if rate limited.
    #[must_use]
    pub fn is_limited(&self) -> bool {
        self.remaining == Some(0) || self.retry_after.is_some()
    }
}

fn parse_header_u32(headers: &HashMap<String, String>, key: &str) -> Option<u32> {
    headers.get(key).and_then(|v| v.trim().parse().ok())
}

fn parse_header_f64(headers: &HashMap<String, String>, key: &str) -> Option<f64> {
    headers
        .get(key)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Seconds with an optional fractional part, e.g. `"1"` or `"0.250"`.
fn parse_header_secs(headers: &HashMap<String, String>, key: &str) -> Option<Duration> {
    let secs = parse_header_f64(headers, key)?;
    // Negative and NaN values were filtered above, so failure means overflow.
    let wait = Duration::try_from_secs_f64(secs).unwrap_or(MAX_REPORTED_WAIT);
    Some(wait.min(MAX_REPORTED_WAIT))
}
