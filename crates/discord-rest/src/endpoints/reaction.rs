use reqwest::Method;
use tracing::instrument;

use crate::{
    client::DiscordClient, error::DiscordResult, params::GetReactions, routes, types::User,
};

/// Reactions with one emoji on one message.
#[derive(Debug, Clone, Copy)]
pub struct ReactionEndpoint<'a> {
    client: &'a DiscordClient,
    channel_id: &'a str,
    message_id: &'a str,
    emoji: &'a str,
}

impl<'a> ReactionEndpoint<'a> {
    pub(crate) const fn new(
        client: &'a DiscordClient,
        channel_id: &'a str,
        message_id: &'a str,
        emoji: &'a str,
    ) -> Self {
        Self {
            client,
            channel_id,
            message_id,
            emoji,
        }
    }

    fn user_route(&self, method: Method, user_id: &str) -> routes::Route {
        routes::reaction_user(method, self.channel_id, self.message_id, self.emoji, user_id)
    }

    /// React as the current user.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(message_id = self.message_id, emoji = self.emoji))]
    pub async fn create(&self) -> DiscordResult<()> {
        self.client
            .send_no_content(self.user_route(Method::PUT, "@me"), None::<&()>)
            .await
    }

    /// Remove the current user's reaction.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(message_id = self.message_id, emoji = self.emoji))]
    pub async fn delete_own(&self) -> DiscordResult<()> {
        self.client
            .send_no_content(self.user_route(Method::DELETE, "@me"), None::<&()>)
            .await
    }

    /// Remove another user's reaction.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(message_id = self.message_id, emoji = self.emoji))]
    pub async fn delete_user(&self, user_id: &str) -> DiscordResult<()> {
        self.client
            .send_no_content(self.user_route(Method::DELETE, user_id), None::<&()>)
            .await
    }

    /// Users who reacted with this emoji.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(message_id = self.message_id, emoji = self.emoji))]
    pub async fn users(&self, query: &GetReactions) -> DiscordResult<Vec<User>> {
        self.client
            .fetch_with_query(
                routes::reaction(Method::GET, self.channel_id, self.message_id, self.emoji),
                query,
            )
            .await
    }
}
