use reqwest::Method;
use tracing::instrument;

use crate::{client::DiscordClient, error::DiscordResult, routes, types::Invite};

/// Endpoints of one invite.
#[derive(Debug, Clone, Copy)]
pub struct InviteEndpoint<'a> {
    client: &'a DiscordClient,
    code: &'a str,
}

impl<'a> InviteEndpoint<'a> {
    pub(crate) const fn new(client: &'a DiscordClient, code: &'a str) -> Self {
        Self { client, code }
    }

    /// Resolve the invite.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(code = self.code))]
    pub async fn get(&self) -> DiscordResult<Invite> {
        self.client.fetch(routes::invite(Method::GET, self.code)).await
    }

    /// Revoke the invite. Returns it as it was.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(code = self.code))]
    pub async fn delete(&self) -> DiscordResult<Invite> {
        self.client
            .fetch(routes::invite(Method::DELETE, self.code))
            .await
    }
}
