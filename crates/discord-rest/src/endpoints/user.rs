use reqwest::Method;
use tracing::instrument;

use crate::{
    client::DiscordClient,
    error::DiscordResult,
    params::CreateDm,
    routes,
    types::{Channel, Guild, User},
};

/// Endpoints of the user the token belongs to.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUserEndpoint<'a> {
    client: &'a DiscordClient,
}

impl<'a> CurrentUserEndpoint<'a> {
    pub(crate) const fn new(client: &'a DiscordClient) -> Self {
        Self { client }
    }

    /// Get the current user.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get(&self) -> DiscordResult<User> {
        self.client.fetch(routes::current_user(Method::GET)).await
    }

    /// Partial guilds the current user is a member of.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn guilds(&self) -> DiscordResult<Vec<Guild>> {
        self.client
            .fetch(routes::current_user_guilds(Method::GET))
            .await
    }

    /// Leave a guild.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn leave_guild(&self, guild_id: &str) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::current_user_guild(Method::DELETE, guild_id),
                None::<&()>,
            )
            .await
    }

    /// Open, or reopen, a DM channel with a user.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn create_dm(&self, recipient_id: &str) -> DiscordResult<Channel> {
        self.client
            .send_json(routes::current_user_channels(), &CreateDm { recipient_id })
            .await
    }
}

/// Endpoints of another user.
#[derive(Debug, Clone, Copy)]
pub struct UserEndpoint<'a> {
    client: &'a DiscordClient,
    user_id: &'a str,
}

impl<'a> UserEndpoint<'a> {
    pub(crate) const fn new(client: &'a DiscordClient, user_id: &'a str) -> Self {
        Self { client, user_id }
    }

    /// Get the user.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(user_id = self.user_id))]
    pub async fn get(&self) -> DiscordResult<User> {
        self.client
            .fetch(routes::user(Method::GET, self.user_id))
            .await
    }
}
