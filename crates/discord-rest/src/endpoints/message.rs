use reqwest::Method;
use tracing::{debug, instrument};

use super::ReactionEndpoint;
use crate::{
    client::DiscordClient,
    error::DiscordResult,
    params::{BulkDelete, CreateMessage, EditMessage, GetMessages},
    routes,
    types::Message,
};

/// Listing and creating messages in one channel.
#[derive(Debug, Clone, Copy)]
pub struct MessagesEndpoint<'a> {
    client: &'a DiscordClient,
    channel_id: &'a str,
}

impl<'a> MessagesEndpoint<'a> {
    pub(crate) const fn new(client: &'a DiscordClient, channel_id: &'a str) -> Self {
        Self { client, channel_id }
    }

    /// List messages, newest first.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id))]
    pub async fn list(&self, query: &GetMessages) -> DiscordResult<Vec<Message>> {
        self.client
            .fetch_with_query(routes::channel_messages(Method::GET, self.channel_id), query)
            .await
    }

    /// Post a message.
    ///
    /// Sent as JSON, or as multipart form data with a `payload_json` field when
    /// a file is attached.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(channel_id = self.channel_id))]
    pub async fn create(&self, mut params: CreateMessage) -> DiscordResult<Message> {
        let route = routes::channel_messages(Method::POST, self.channel_id);
        match params.file.take() {
            Some(file) => {
                debug!(file = %file.name, size = file.content.len(), "Uploading attachment");
                self.client.send_multipart(route, &params, file).await
            }
            None => self.client.send_json(route, &params).await,
        }
    }

    /// Delete 2 to 100 messages at once.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(
        skip(self, message_ids),
        fields(channel_id = self.channel_id, count = message_ids.len())
    )]
    pub async fn bulk_delete(&self, message_ids: &[String]) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::bulk_delete(self.channel_id),
                Some(&BulkDelete {
                    messages: message_ids,
                }),
            )
            .await
    }
}

/// Endpoints of one message.
#[derive(Debug, Clone, Copy)]
pub struct MessageEndpoint<'a> {
    client: &'a DiscordClient,
    channel_id: &'a str,
    message_id: &'a str,
}

impl<'a> MessageEndpoint<'a> {
    pub(crate) const fn new(
        client: &'a DiscordClient,
        channel_id: &'a str,
        message_id: &'a str,
    ) -> Self {
        Self {
            client,
            channel_id,
            message_id,
        }
    }

    /// Reactions with one emoji.
    ///
    /// `emoji` is the unicode character or `name:id` for custom emoji; see
    /// [`ReactionEmoji::to_request_format`](crate::ReactionEmoji::to_request_format).
    #[must_use]
    pub const fn reaction(&self, emoji: &'a str) -> ReactionEndpoint<'a> {
        ReactionEndpoint::new(self.client, self.channel_id, self.message_id, emoji)
    }

    /// Get the message.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id, message_id = self.message_id))]
    pub async fn get(&self) -> DiscordResult<Message> {
        self.client
            .fetch(routes::channel_message(
                Method::GET,
                self.channel_id,
                self.message_id,
            ))
            .await
    }

    /// Edit a message the current user sent.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(
        skip(self, params),
        fields(channel_id = self.channel_id, message_id = self.message_id)
    )]
    pub async fn edit(&self, params: &EditMessage) -> DiscordResult<Message> {
        self.client
            .send_json(
                routes::channel_message(Method::PATCH, self.channel_id, self.message_id),
                params,
            )
            .await
    }

    /// Delete the message.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id, message_id = self.message_id))]
    pub async fn delete(&self) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::channel_message(Method::DELETE, self.channel_id, self.message_id),
                None::<&()>,
            )
            .await
    }

    /// Remove every reaction from the message.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(channel_id = self.channel_id, message_id = self.message_id))]
    pub async fn delete_all_reactions(&self) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::reactions(Method::DELETE, self.channel_id, self.message_id),
                None::<&()>,
            )
            .await
    }
}
