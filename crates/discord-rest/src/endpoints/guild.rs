use reqwest::Method;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    client::DiscordClient,
    error::DiscordResult,
    params::{
        CreateBan, CreateGuild, CreateGuildChannel, GetMembers, ModifyCurrentNick, ModifyGuild,
        ModifyMember, RoleParams,
    },
    routes,
    types::{Ban, Channel, Guild, GuildMember, Invite, Role},
};

/// Guild creation.
#[derive(Debug, Clone, Copy)]
pub struct GuildsEndpoint<'a> {
    client: &'a DiscordClient,
}

impl<'a> GuildsEndpoint<'a> {
    pub(crate) const fn new(client: &'a DiscordClient) -> Self {
        Self { client }
    }

    /// Create a guild owned by the current user.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create(&self, params: &CreateGuild) -> DiscordResult<Guild> {
        self.client
            .send_json(routes::guilds(Method::POST), params)
            .await
    }
}

/// Endpoints of one guild.
#[derive(Debug, Clone, Copy)]
pub struct GuildEndpoint<'a> {
    client: &'a DiscordClient,
    guild_id: &'a str,
}

impl<'a> GuildEndpoint<'a> {
    pub(crate) const fn new(client: &'a DiscordClient, guild_id: &'a str) -> Self {
        Self { client, guild_id }
    }

    /// Guild ID this handle addresses.
    #[must_use]
    pub const fn id(&self) -> &'a str {
        self.guild_id
    }

    /// Endpoints of one member.
    #[must_use]
    pub const fn member(&self, user_id: &'a str) -> MemberEndpoint<'a> {
        MemberEndpoint {
            client: self.client,
            guild_id: self.guild_id,
            user_id,
        }
    }

    /// Get the guild.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn get(&self) -> DiscordResult<Guild> {
        self.client
            .fetch(routes::guild(Method::GET, self.guild_id))
            .await
    }

    /// Update the guild's settings.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(guild_id = self.guild_id))]
    pub async fn modify(&self, params: &ModifyGuild) -> DiscordResult<Guild> {
        self.client
            .send_json(routes::guild(Method::PATCH, self.guild_id), params)
            .await
    }

    /// Delete the guild. Only its owner may.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn delete(&self) -> DiscordResult<()> {
        self.client
            .send_no_content(routes::guild(Method::DELETE, self.guild_id), None::<&()>)
            .await
    }

    /// List the guild's channels.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn channels(&self) -> DiscordResult<Vec<Channel>> {
        self.client
            .fetch(routes::guild_channels(Method::GET, self.guild_id))
            .await
    }

    /// Create a channel in the guild.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(guild_id = self.guild_id))]
    pub async fn create_channel(&self, params: &CreateGuildChannel) -> DiscordResult<Channel> {
        self.client
            .send_json(routes::guild_channels(Method::POST, self.guild_id), params)
            .await
    }

    /// List members, ordered by user ID.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn members(&self, query: &GetMembers) -> DiscordResult<Vec<GuildMember>> {
        self.client
            .fetch_with_query(routes::guild_members(Method::GET, self.guild_id), query)
            .await
    }

    /// Set the current user's nickname. Returns the nickname now in effect.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn modify_current_nick(&self, nick: &str) -> DiscordResult<String> {
        #[derive(Deserialize)]
        struct NickResponse {
            #[serde(default)]
            nick: Option<String>,
        }

        let response: NickResponse = self
            .client
            .send_json(
                routes::current_member_nick(self.guild_id),
                &ModifyCurrentNick { nick },
            )
            .await?;
        Ok(response.nick.unwrap_or_default())
    }

    /// List bans.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn bans(&self) -> DiscordResult<Vec<Ban>> {
        self.client
            .fetch(routes::guild_bans(Method::GET, self.guild_id))
            .await
    }

    /// Ban a user, optionally deleting their recent messages.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(guild_id = self.guild_id))]
    pub async fn ban(&self, user_id: &str, params: &CreateBan) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::guild_ban(Method::PUT, self.guild_id, user_id),
                Some(params),
            )
            .await
    }

    /// Lift a ban.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn unban(&self, user_id: &str) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::guild_ban(Method::DELETE, self.guild_id, user_id),
                None::<&()>,
            )
            .await
    }

    /// List roles.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn roles(&self) -> DiscordResult<Vec<Role>> {
        self.client
            .fetch(routes::guild_roles(Method::GET, self.guild_id))
            .await
    }

    /// Create a role. Unset fields take the API defaults.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(guild_id = self.guild_id))]
    pub async fn create_role(&self, params: &RoleParams) -> DiscordResult<Role> {
        self.client
            .send_json(routes::guild_roles(Method::POST, self.guild_id), params)
            .await
    }

    /// Modify a role.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(guild_id = self.guild_id))]
    pub async fn modify_role(&self, role_id: &str, params: &RoleParams) -> DiscordResult<Role> {
        self.client
            .send_json(
                routes::guild_role(Method::PATCH, self.guild_id, role_id),
                params,
            )
            .await
    }

    /// Delete a role.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn delete_role(&self, role_id: &str) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::guild_role(Method::DELETE, self.guild_id, role_id),
                None::<&()>,
            )
            .await
    }

    /// List invites to any of the guild's channels, with metadata.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id))]
    pub async fn invites(&self) -> DiscordResult<Vec<Invite>> {
        self.client.fetch(routes::guild_invites(self.guild_id)).await
    }
}

/// Endpoints of one guild member.
#[derive(Debug, Clone, Copy)]
pub struct MemberEndpoint<'a> {
    client: &'a DiscordClient,
    guild_id: &'a str,
    user_id: &'a str,
}

impl MemberEndpoint<'_> {
    /// Get the member.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id, user_id = self.user_id))]
    pub async fn get(&self) -> DiscordResult<GuildMember> {
        self.client
            .fetch(routes::guild_member(Method::GET, self.guild_id, self.user_id))
            .await
    }

    /// Modify the member's nickname, roles or voice state.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self, params), fields(guild_id = self.guild_id, user_id = self.user_id))]
    pub async fn modify(&self, params: &ModifyMember) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::guild_member(Method::PATCH, self.guild_id, self.user_id),
                Some(params),
            )
            .await
    }

    /// Kick the member.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id, user_id = self.user_id))]
    pub async fn remove(&self) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::guild_member(Method::DELETE, self.guild_id, self.user_id),
                None::<&()>,
            )
            .await
    }

    /// Give the member a role.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id, user_id = self.user_id))]
    pub async fn add_role(&self, role_id: &str) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::guild_member_role(Method::PUT, self.guild_id, self.user_id, role_id),
                None::<&()>,
            )
            .await
    }

    /// Take a role away from the member.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(guild_id = self.guild_id, user_id = self.user_id))]
    pub async fn remove_role(&self, role_id: &str) -> DiscordResult<()> {
        self.client
            .send_no_content(
                routes::guild_member_role(Method::DELETE, self.guild_id, self.user_id, role_id),
                None::<&()>,
            )
            .await
    }
}
