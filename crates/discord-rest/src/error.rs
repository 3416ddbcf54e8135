//! Discord client error types.

use std::time::Duration;

use discord_ratelimit::MAX_REPORTED_WAIT;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the Discord client.
///
/// Nothing here is retried by the client; [`DiscordError::is_retryable`] and
/// [`DiscordError::retry_after`] exist for callers that want to.
#[derive(Error, Debug)]
pub enum DiscordError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Discord API returned a non-2xx status
    #[error("Discord API error {code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: i32,
        message: String,
    },

    /// Rejected with 429, or refused locally because the bucket is spent
    #[error("Rate limited on {bucket}, retry after {retry_after} seconds")]
    RateLimited {
        bucket: String,
        retry_after: f64,
        global: bool,
    },

    /// The request URL could not be built
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The client configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DiscordError {
    /// Check if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500,
            Self::RateLimited { .. } => true,
            Self::Json(_) | Self::InvalidUrl(_) | Self::Config(_) => false,
        }
    }

    /// Get the suggested retry delay.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after, .. } => {
                let secs = retry_after.clamp(0.0, MAX_REPORTED_WAIT.as_secs_f64());
                Duration::try_from_secs_f64(secs).ok()
            }
            _ => None,
        }
    }

    /// HTTP status of the failed response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(StatusCode::TOO_MANY_REQUESTS.as_u16()),
            _ => None,
        }
    }

    /// Build an [`DiscordError::Api`] from a failed response body.
    ///
    /// Discord answers with `{"code": .., "message": ..}`; anything else falls
    /// back to the status code and the raw body text.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct DiscordApiError {
            code: Option<i32>,
            message: Option<String>,
        }

        let error: DiscordApiError =
            serde_json::from_slice(body).unwrap_or_else(|_| DiscordApiError {
                code: None,
                message: Some(String::from_utf8_lossy(body).into_owned()),
            });

        Self::Api {
            status: status.as_u16(),
            code: error.code.unwrap_or_else(|| i32::from(status.as_u16())),
            message: error
                .message
                .filter(|m| !m.is_empty())
                .or_else(|| status.canonical_reason().map(ToString::to_string))
                .unwrap_or_else(|| "Unknown error".into()),
        }
    }

    /// Build a [`DiscordError::RateLimited`] from a 429 body.
    ///
    /// The body's fractional `retry_after` is preferred over the header's.
    pub(crate) fn rate_limited(bucket: &str, body: &[u8], header_retry: Option<Duration>) -> Self {
        #[derive(Deserialize)]
        struct RateLimitBody {
            retry_after: Option<f64>,
            #[serde(default)]
            global: bool,
        }

        let parsed = serde_json::from_slice::<RateLimitBody>(body).ok();
        let retry_after = parsed
            .as_ref()
            .and_then(|b| b.retry_after)
            .or_else(|| header_retry.map(|d| d.as_secs_f64()))
            .unwrap_or(1.0);

        Self::RateLimited {
            bucket: bucket.to_string(),
            retry_after,
            global: parsed.is_some_and(|b| b.global),
        }
    }
}

/// Result type for Discord operations.
pub type DiscordResult<T> = Result<T, DiscordError>;
