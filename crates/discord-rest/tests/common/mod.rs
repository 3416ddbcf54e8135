//! Shared setup for the integration tests.

#![allow(dead_code)]

use discord_rest::{DiscordClient, DiscordConfig, RateLimitSettings};
use discord_testkit::MockApiServer;

pub const TOKEN: &str = "test-token";

/// Start a mock API and a client pointed at it.
pub async fn setup() -> (MockApiServer, DiscordClient) {
    discord_testkit::init_test_tracing();

    let mock = MockApiServer::start().await;
    let client = DiscordClient::new(&DiscordConfig::new(TOKEN).with_api_url(mock.base_url()))
        .expect("client should build");
    (mock, client)
}

/// Like [`setup`], but admission gives up after `max_wait_ms`.
pub async fn setup_with_max_wait(max_wait_ms: u64) -> (MockApiServer, DiscordClient) {
    discord_testkit::init_test_tracing();

    let mock = MockApiServer::start().await;
    let config = DiscordConfig::new(TOKEN)
        .with_api_url(mock.base_url())
        .with_rate_limit(RateLimitSettings {
            max_wait_ms,
            ..RateLimitSettings::default()
        });
    let client = DiscordClient::new(&config).expect("client should build");
    (mock, client)
}
