//! Discord Test Kit - mock infrastructure for testing the Discord REST client
//!
//! - [`MockApiServer`] - wiremock server speaking Discord's response shapes
//! - [`fixtures`] - canned JSON bodies for users, channels, messages, guilds, invites
//! - Tracing configuration for test output
//!
//! # Example
//!
//! ```rust,ignore
//! use discord_testkit::{fixtures, MockApiServer};
//!
//! #[tokio::test]
//! async fn fetches_a_channel() {
//!     discord_testkit::init_test_tracing();
//!
//!     let mock = MockApiServer::start().await;
//!     mock.expect_get("/channels/41771983423143937", fixtures::channel("41771983423143937"))
//!         .await;
//!
//!     let config = DiscordConfig::new("token").with_api_url(mock.base_url());
//!     let client = DiscordClient::new(&config)?;
//!     let channel = client.channel("41771983423143937").get().await?;
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod fixtures;
mod mock_server;
mod tracing_config;

pub use mock_server::*;
pub use tracing_config::*;
