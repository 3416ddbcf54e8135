//! Client configuration.

use std::fmt;
use std::time::Duration;

use discord_ratelimit::RateLimitConfig;
use serde::{Deserialize, Serialize};

use crate::error::{DiscordError, DiscordResult};

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "DISCORD_API_URL";

/// Configuration for [`DiscordClient`](crate::DiscordClient).
#[derive(Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Bot token from the Discord Developer Portal
    pub bot_token: String,

    /// Base URL for the Discord API (default: https://discord.com/api/v10)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Rate limit configuration
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
}

fn default_api_url() -> String {
    "https://discord.com/api/v10".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!(
        "DiscordBot (https://github.com/discord-rest/discord-rest, {})",
        env!("CARGO_PKG_VERSION")
    )
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl DiscordConfig {
    /// Configuration with defaults for everything but the token.
    #[must_use]
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            ..Self::default()
        }
    }

    /// Read the token (and optionally the API URL) from the environment.
    ///
    /// # Errors
    /// Returns [`DiscordError::Config`] if `DISCORD_TOKEN` is unset or empty.
    pub fn from_env() -> DiscordResult<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| DiscordError::Config(format!("{TOKEN_ENV} is not set")))?;

        let mut config = Self::new(token);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Point the client at another base URL.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the rate limit configuration.
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimitSettings) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Send requests without consulting the rate limiter.
    #[must_use]
    pub fn without_rate_limit(mut self) -> Self {
        self.rate_limit.enabled = false;
        self
    }

    /// Token without any `Bot ` prefix.
    #[must_use]
    pub fn token(&self) -> &str {
        let token = self.bot_token.trim_start();
        token.strip_prefix("Bot ").unwrap_or(token).trim()
    }

    /// Check the configuration before building a client.
    ///
    /// # Errors
    /// Returns [`DiscordError::Config`] describing the first problem found.
    pub fn validate(&self) -> DiscordResult<()> {
        if self.token().is_empty() {
            return Err(DiscordError::Config(
                "Missing required 'bot_token' in configuration".into(),
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(DiscordError::Config("'api_url' must not be empty".into()));
        }
        if self.timeout.is_zero() {
            return Err(DiscordError::Config("'timeout' must be non-zero".into()));
        }
        if self.rate_limit.enabled {
            self.rate_limit
                .global_config()
                .validate()
                .map_err(|e| DiscordError::Config(e.to_string()))?;
        }
        Ok(())
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            api_url: default_api_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            rate_limit: RateLimitSettings::default(),
        }
    }
}

impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("bot_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("rate_limit", &self.rate_limit)
            .finish()
    }
}

/// Rate limit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Consult the per-route buckets before sending
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Longest time a call may wait for admission, in milliseconds
    #[serde(default = "default_max_wait_ms")]
    pub max_wait_ms: u64,

    /// Global request cap per second
    #[serde(default = "default_global_per_second")]
    pub global_per_second: u32,
}

const fn default_enabled() -> bool {
    true
}

const fn default_max_wait_ms() -> u64 {
    60_000
}

const fn default_global_per_second() -> u32 {
    50
}

impl RateLimitSettings {
    /// Maximum admission wait.
    #[must_use]
    pub const fn max_wait(&self) -> Duration {
        Duration::from_millis(self.max_wait_ms)
    }

    /// Global token bucket configuration.
    #[must_use]
    pub const fn global_config(&self) -> RateLimitConfig {
        RateLimitConfig::new(self.global_per_second, Duration::from_secs(1))
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_wait_ms: default_max_wait_ms(),
            global_per_second: default_global_per_second(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_minimal_json() {
        let config: DiscordConfig =
            serde_json::from_value(serde_json::json!({"bot_token": "abc"})).unwrap();

        assert_eq!(config.api_url, "https://discord.com/api/v10");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("DiscordBot ("));
        assert!(config.rate_limit.enabled);
        assert_eq!(config.rate_limit.max_wait(), Duration::from_secs(60));
        assert_eq!(config.rate_limit.global_per_second, 50);
    }

    #[test]
    fn test_timeout_is_seconds() {
        let config: DiscordConfig = serde_json::from_value(serde_json::json!({
            "bot_token": "abc",
            "timeout": 5,
            "rate_limit": {"enabled": false}
        }))
        .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.rate_limit.enabled);
        assert_eq!(config.rate_limit.max_wait_ms, 60_000);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["timeout"], 5);
    }

    #[test]
    fn test_token_prefix_is_stripped() {
        assert_eq!(DiscordConfig::new("Bot abc.def").token(), "abc.def");
        assert_eq!(DiscordConfig::new("  abc.def ").token(), "abc.def");
    }

    #[test]
    fn test_validate() {
        assert!(DiscordConfig::new("abc").validate().is_ok());
        assert!(matches!(
            DiscordConfig::new("").validate(),
            Err(DiscordError::Config(_))
        ));
        assert!(DiscordConfig::new("Bot ").validate().is_err());
        assert!(DiscordConfig::new("abc")
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());

        let zero_global = RateLimitSettings {
            global_per_second: 0,
            ..RateLimitSettings::default()
        };
        assert!(DiscordConfig::new("abc")
            .with_rate_limit(zero_global.clone())
            .validate()
            .is_err());
        // A disabled limiter is never built, so its quota is irrelevant.
        assert!(DiscordConfig::new("abc")
            .with_rate_limit(zero_global)
            .without_rate_limit()
            .validate()
            .is_ok());
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", DiscordConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
