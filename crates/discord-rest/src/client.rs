//! Discord REST API client.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use discord_ratelimit::{BucketRegistry, RateLimitError, RateLimitHeaders};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn};

use crate::{
    config::DiscordConfig,
    endpoints::{
        ChannelEndpoint, CurrentUserEndpoint, GuildEndpoint, GuildsEndpoint, InviteEndpoint,
        UserEndpoint,
    },
    error::{DiscordError, DiscordResult},
    routes::Route,
    types::File,
};

/// Discord REST API client.
///
/// Cloning is cheap; clones share the connection pool and rate limit state.
#[derive(Clone)]
pub struct DiscordClient {
    http: Client,
    base_url: Url,
    token: String,
    limiter: Option<Arc<BucketRegistry>>,
    max_wait: Duration,
}

impl DiscordClient {
    /// Create a new API client from configuration.
    ///
    /// # Errors
    /// Returns [`DiscordError::Config`] for an invalid configuration,
    /// [`DiscordError::InvalidUrl`] if `api_url` cannot carry a path, or
    /// [`DiscordError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &DiscordConfig) -> DiscordResult<Self> {
        config.validate()?;

        let base_url = Url::parse(config.api_url.trim())
            .map_err(|e| DiscordError::InvalidUrl(format!("{}: {e}", config.api_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(DiscordError::InvalidUrl(config.api_url.clone()));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        let limiter = if config.rate_limit.enabled {
            let registry = BucketRegistry::new(&config.rate_limit.global_config())
                .map_err(|e| DiscordError::Config(e.to_string()))?;
            Some(Arc::new(registry))
        } else {
            None
        };

        Ok(Self {
            http,
            base_url,
            token: config.token().to_string(),
            limiter,
            max_wait: config.rate_limit.max_wait(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resource handles
    // ─────────────────────────────────────────────────────────────────────────

    /// Endpoints of one channel.
    #[must_use]
    pub fn channel<'a>(&'a self, channel_id: &'a str) -> ChannelEndpoint<'a> {
        ChannelEndpoint::new(self, channel_id)
    }

    /// Guild creation.
    #[must_use]
    pub const fn guilds(&self) -> GuildsEndpoint<'_> {
        GuildsEndpoint::new(self)
    }

    /// Endpoints of one guild.
    #[must_use]
    pub fn guild<'a>(&'a self, guild_id: &'a str) -> GuildEndpoint<'a> {
        GuildEndpoint::new(self, guild_id)
    }

    /// Endpoints of one invite.
    #[must_use]
    pub fn invite<'a>(&'a self, code: &'a str) -> InviteEndpoint<'a> {
        InviteEndpoint::new(self, code)
    }

    /// Endpoints of the user the token belongs to.
    #[must_use]
    pub const fn current_user(&self) -> CurrentUserEndpoint<'_> {
        CurrentUserEndpoint::new(self)
    }

    /// Endpoints of another user.
    #[must_use]
    pub fn user<'a>(&'a self, user_id: &'a str) -> UserEndpoint<'a> {
        UserEndpoint::new(self, user_id)
    }

    /// Shared rate limit state, `None` when limiting is disabled.
    #[must_use]
    pub fn rate_limits(&self) -> Option<&BucketRegistry> {
        self.limiter.as_deref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transport
    // ─────────────────────────────────────────────────────────────────────────

    fn url_for(&self, route: &Route) -> DiscordResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DiscordError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(route.segments());
        Ok(url)
    }

    fn request(&self, route: &Route) -> DiscordResult<RequestBuilder> {
        let url = self.url_for(route)?;
        Ok(self
            .http
            .request(route.method().clone(), url)
            .header(AUTHORIZATION, format!("Bot {}", self.token)))
    }

    /// Admit, send and classify one request.
    #[instrument(skip(self, request), fields(method = %route.method(), bucket = route.bucket()))]
    async fn execute(&self, request: RequestBuilder, route: &Route) -> DiscordResult<Bytes> {
        if let Some(limiter) = &self.limiter {
            let waited = limiter
                .acquire(route.bucket(), self.max_wait)
                .await
                .map_err(|err| {
                    admission_error(route.bucket(), err, !limiter.global_lockout().is_zero())
                })?;
            if !waited.is_zero() {
                warn!(waited_ms = waited.as_millis() as u64, "Delayed by rate limit");
            }
        }

        debug!(path = %route.path(), "Making Discord API request");
        let response = request.send().await?;
        let status = response.status();
        let headers = RateLimitHeaders::parse(&header_map(response.headers()));

        if let Some(limiter) = &self.limiter {
            limiter.update(route.bucket(), &headers);
        }

        let body = response.bytes().await?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            let mut err = DiscordError::rate_limited(route.bucket(), &body, headers.retry_after);
            if let DiscordError::RateLimited { global, .. } = &mut err {
                *global |= headers.global;
            }
            warn!(error = %err, "Rate limited");
            return Err(err);
        }

        if !status.is_success() {
            let err = DiscordError::from_response(status, &body);
            debug!(error = %err, "Discord API request failed");
            return Err(err);
        }

        Ok(body)
    }

    /// GET and decode.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, route: Route) -> DiscordResult<T> {
        let request = self.request(&route)?;
        decode(&self.execute(request, &route).await?)
    }

    /// GET with a query string and decode.
    pub(crate) async fn fetch_with_query<T, Q>(&self, route: Route, query: &Q) -> DiscordResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(&route)?.query(query);
        decode(&self.execute(request, &route).await?)
    }

    /// Send a JSON body and decode the response.
    pub(crate) async fn send_json<T, B>(&self, route: Route, body: &B) -> DiscordResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(&route)?.json(body);
        decode(&self.execute(request, &route).await?)
    }

    /// Send a JSON body, or none, and discard the response.
    pub(crate) async fn send_no_content<B>(
        &self,
        route: Route,
        body: Option<&B>,
    ) -> DiscordResult<()>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.request(&route)?;
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request, &route).await?;
        Ok(())
    }

    /// Send `payload` as a `payload_json` form field alongside `file`.
    pub(crate) async fn send_multipart<T, B>(
        &self,
        route: Route,
        payload: &B,
        file: File,
    ) -> DiscordResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(payload)?;
        let form = Form::new()
            .text("payload_json", payload)
            .part("file", Part::bytes(file.content).file_name(file.name));

        let request = self.request(&route)?.multipart(form);
        decode(&self.execute(request, &route).await?)
    }
}

impl std::fmt::Debug for DiscordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordClient")
            .field("base_url", &self.base_url.as_str())
            .field("rate_limited", &self.limiter.is_some())
            .field("max_wait", &self.max_wait)
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> DiscordResult<T> {
    serde_json::from_slice(body).map_err(DiscordError::from)
}

fn header_map(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

fn admission_error(bucket: &str, err: RateLimitError, global: bool) -> DiscordError {
    match err {
        RateLimitError::WaitExceeded { wait_time, .. } => DiscordError::RateLimited {
            bucket: bucket.to_string(),
            retry_after: wait_time.as_secs_f64(),
            global,
        },
        RateLimitError::InvalidConfig(msg) => DiscordError::Config(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use reqwest::Method;

    fn client(api_url: &str) -> DiscordClient {
        DiscordClient::new(&DiscordConfig::new("token").with_api_url(api_url)).unwrap()
    }

    #[test]
    fn test_url_for_appends_segments() {
        let client = client("https://discord.com/api/v10");
        let url = client
            .url_for(&routes::channel_message(Method::GET, "1", "2"))
            .unwrap();
        assert_eq!(url.as_str(), "https://discord.com/api/v10/channels/1/messages/2");
    }

    #[test]
    fn test_url_for_handles_trailing_slash() {
        let client = client("https://discord.com/api/v10/");
        let url = client.url_for(&routes::current_user(Method::GET)).unwrap();
        assert_eq!(url.as_str(), "https://discord.com/api/v10/users/@me");
    }

    #[test]
    fn test_url_for_encodes_emoji() {
        let client = client("https://discord.com/api/v10");
        let route = routes::reaction_user(Method::PUT, "1", "2", "🔥", "@me");
        let url = client.url_for(&route).unwrap();
        assert_eq!(
            url.path(),
            "/api/v10/channels/1/messages/2/reactions/%F0%9F%94%A5/@me"
        );

        let route = routes::reaction(Method::GET, "1", "2", "LUL:41771983429993937");
        let url = client.url_for(&route).unwrap();
        assert_eq!(
            url.path(),
            "/api/v10/channels/1/messages/2/reactions/LUL:41771983429993937"
        );
    }

    #[test]
    fn test_new_rejects_bad_url() {
        let config = DiscordConfig::new("token").with_api_url("mailto:someone@example.com");
        assert!(matches!(
            DiscordClient::new(&config),
            Err(DiscordError::InvalidUrl(_))
        ));

        let config = DiscordConfig::new("token").with_api_url("not a url");
        assert!(matches!(
            DiscordClient::new(&config),
            Err(DiscordError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_new_rejects_missing_token() {
        assert!(matches!(
            DiscordClient::new(&DiscordConfig::default()),
            Err(DiscordError::Config(_))
        ));
    }

    #[test]
    fn test_limiter_follows_config() {
        assert!(client("https://discord.com/api/v10").rate_limits().is_some());

        let config = DiscordConfig::new("token").without_rate_limit();
        assert!(DiscordClient::new(&config).unwrap().rate_limits().is_none());
    }

    #[test]
    fn test_admission_error_maps_to_rate_limited() {
        let err = admission_error(
            "/channels/1",
            RateLimitError::WaitExceeded {
                wait_time: Duration::from_millis(1500),
                max_wait: Duration::from_secs(1),
            },
            false,
        );
        assert!(matches!(
            err,
            DiscordError::RateLimited { ref bucket, global: false, .. } if bucket == "/channels/1"
        ));
        assert_eq!(err.retry_after(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_header_map_lowercases() {
        let mut headers = HeaderMap::new();
        headers.insert("X-RateLimit-Remaining", "3".parse().unwrap());
        let map = header_map(&headers);
        assert_eq!(map.get("x-ratelimit-remaining").map(String::as_str), Some("3"));
    }
}
