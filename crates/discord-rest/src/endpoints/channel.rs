use reqwest::Method;
use tracing::instrument;

use super::{MessageEndpoint, MessagesEndpoint};
use crate::{
    client::DiscordClient,
    error::DiscordResult,
    params::{CreateInvite, EditPermissions, ModifyChannel},
    routes,
    types::{Channel, Invite, Message},
};

/// Endpoints of one channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelEndpoint<'a> {
    client: &'a DiscordClient,
    channel_id: &'a str,
}

impl<'a> ChannelEndpoint<'a> {
    pub(crate) const fn new(client: &'a DiscordClient, channel_id: &'a str) -> Self {
        Self { client, channel_id }
    }

    /// Channel ID this handle addresses.
    #[must_use]
    pub const fn id(&self) -> &'a str {
        self.channel_id
    }

    /// Message listing and creation.
    #[must_use]
    pub const fn messages(&self) -> MessagesEndpoint<'a> {
        MessagesEndpoint::new(self.client, self.channel_id)
    }

    /// Endpoints of one message in this channel.
    #[must_use]
    pub const fn message(&self, message_id: &'a str) -> MessageEndpoint<'a> {
        MessageEndpoint::new(self.client, self.channel_id, message_id)
    }

    /// Get the channel.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id))]
    pub async fn get(&self) -> DiscordResult<Channel> {
        self.client
            .fetch(routes::channel(Method::GET, self.channel_id))
            .await
    }

    /// Update the channel's settings.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(channel_id = self.channel_id))]
    pub async fn modify(&self, params: &ModifyChannel) -> DiscordResult<Channel> {
        self.client
            .send_json(routes::channel(Method::PATCH, self.channel_id), params)
            .await
    }

    /// Delete a guild channel, or close a DM. Returns the channel as it was.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id))]
    pub async fn delete(&self) -> DiscordResult<Channel> {
        self.client
            .fetch(routes::channel(Method::DELETE, self.channel_id))
            .await
    }

    /// Create or replace the permission overwrite for a role or member.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(channel_id = self.channel_id))]
    pub async fn edit_permissions(
        &self,
        overwrite_id: &str,
        params: &EditPermissions,
    ) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::permission(Method::PUT, self.channel_id, overwrite_id),
                Some(params),
            )
            .await
    }

    /// Remove the permission overwrite for a role or member.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id))]
    pub async fn delete_permission(&self, overwrite_id: &str) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::permission(Method::DELETE, self.channel_id, overwrite_id),
                None::<&()>,
            )
            .await
    }

    /// List the channel's invites, with metadata.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id))]
    pub async fn invites(&self) -> DiscordResult<Vec<Invite>> {
        self.client
            .fetch(routes::channel_invites(Method::GET, self.channel_id))
            .await
    }

    /// Create an invite to the channel.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(channel_id = self.channel_id))]
    pub async fn create_invite(&self, params: &CreateInvite) -> DiscordResult<Invite> {
        self.client
            .send_json(routes::channel_invites(Method::POST, self.channel_id), params)
            .await
    }

    /// Show the typing indicator for about ten seconds.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id))]
    pub async fn trigger_typing(&self) -> DiscordResult<()> {
        self.client
            .send_no_content(routes::typing(self.channel_id), None::<&()>)
            .await
    }

    /// List pinned messages.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id))]
    pub async fn pinned_messages(&self) -> DiscordResult<Vec<Message>> {
        self.client
            .fetch(routes::pins(Method::GET, self.channel_id))
            .await
    }

    /// Pin a message.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id))]
    pub async fn pin(&self, message_id: &str) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::pin(Method::PUT, self.channel_id, message_id),
                None::<&()>,
            )
            .await
    }

    /// Unpin a message.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id))]
    pub async fn unpin(&self, message_id: &str) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::pin(Method::DELETE, self.channel_id, message_id),
                None::<&()>,
            )
            .await
    }
}
