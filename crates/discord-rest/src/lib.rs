//! Discord REST client
//!
//! A typed binding to the Discord REST API:
//! - Channels, messages, reactions, pins, permission overwrites
//! - Guilds, members, roles, bans
//! - Invites and users
//! - File uploads through multipart `payload_json` bodies
//!
//! Endpoints are reached through lightweight handles borrowed from one
//! [`DiscordClient`], mirroring the API's resource tree:
//!
//! ```rust,ignore
//! use discord_rest::{CreateMessage, DiscordClient, DiscordConfig};
//!
//! let client = DiscordClient::new(&DiscordConfig::from_env()?)?;
//! let channel = client.channel("41771983423143937");
//!
//! let msg = channel.messages().create(CreateMessage::new("hello")).await?;
//! channel.message(&msg.id).reaction("🔥").create().await?;
//! ```
//!
//! Every request is admitted through a rate limiter keyed by the route's
//! bucket, see [`Route::bucket`].

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod config;
mod endpoints;
mod error;
mod params;
mod routes;
mod types;
mod util;

pub use client::DiscordClient;
pub use config::{DiscordConfig, RateLimitSettings};
pub use endpoints::*;
pub use error::{DiscordError, DiscordResult};
pub use params::*;
pub use routes::Route;
pub use types::*;

pub use discord_ratelimit::{BucketRegistry, RateLimitState};
pub use reqwest::Method;
