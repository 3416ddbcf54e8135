//! Discord API types.
//!
//! These mirror the JSON objects the API returns. Optional and nullable
//! fields are `Option`s; list fields default to empty when absent.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::{lenient_string, string_or_u64};

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// Discord user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,

    /// Username
    pub username: String,

    /// Discriminator (legacy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,

    /// Global display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,

    /// Avatar hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Whether this is a bot
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Mention markup, `<@id>`.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Channels
// ─────────────────────────────────────────────────────────────────────────────

/// Discord channel.
///
/// If `recipient` is set this is a DM channel, a one-to-one conversation
/// outside of any guild. Otherwise it is a guild channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel ID
    pub id: String,

    /// Channel type
    #[serde(rename = "type")]
    pub channel_type: i32,

    /// Guild ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,

    /// Channel name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sorting position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// Whether this is a private channel
    #[serde(default)]
    pub is_private: bool,

    /// Explicit permission overwrites for members and roles
    #[serde(default)]
    pub permission_overwrites: Vec<Overwrite>,

    /// Topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// The other party of a DM channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<User>,

    /// ID of the last message sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<String>,

    /// Bitrate of a voice channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,

    /// User limit of a voice channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
}

impl Channel {
    /// Whether this is a direct-message channel rather than a guild channel.
    #[must_use]
    pub const fn is_direct_message(&self) -> bool {
        self.recipient.is_some()
    }

    /// Mention markup, `<#id>`.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

/// Whom a permission overwrite applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OverwriteType {
    /// Applies to a role
    Role,
    /// Applies to a single member
    Member,
}

impl TryFrom<u8> for OverwriteType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Role),
            1 => Ok(Self::Member),
            other => Err(format!("unknown overwrite type {other}")),
        }
    }
}

impl From<OverwriteType> for u8 {
    fn from(value: OverwriteType) -> Self {
        match value {
            OverwriteType::Role => 0,
            OverwriteType::Member => 1,
        }
    }
}

/// Permission overwrite on a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overwrite {
    /// Role or user ID
    pub id: String,

    /// Whether `id` is a role or a member
    #[serde(rename = "type")]
    pub overwrite_type: OverwriteType,

    /// Allowed permission bits
    #[serde(with = "string_or_u64")]
    pub allow: u64,

    /// Denied permission bits
    #[serde(with = "string_or_u64")]
    pub deny: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

/// Discord message.
///
/// `author` is a real user only when a user or bot posted the message. For
/// webhook messages it carries the webhook's id, username and avatar, and
/// `webhook_id` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message ID
    pub id: String,

    /// Channel ID
    pub channel_id: String,

    /// Guild ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,

    /// Author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,

    /// Message content
    #[serde(default)]
    pub content: String,

    /// When the message was sent
    pub timestamp: DateTime<Utc>,

    /// When the message was last edited
    #[serde(default)]
    pub edited_timestamp: Option<DateTime<Utc>>,

    /// Whether this message is TTS
    #[serde(default)]
    pub tts: bool,

    /// Whether this mentions everyone
    #[serde(default)]
    pub mention_everyone: bool,

    /// Users specifically mentioned
    #[serde(default)]
    pub mentions: Vec<User>,

    /// Role IDs specifically mentioned
    #[serde(default)]
    pub mention_roles: Vec<String>,

    /// Attachments
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    /// Embeds
    #[serde(default)]
    pub embeds: Vec<Embed>,

    /// Reactions
    #[serde(default)]
    pub reactions: Vec<Reaction>,

    /// Nonce used to confirm the message was sent
    #[serde(
        default,
        deserialize_with = "lenient_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub nonce: Option<String>,

    /// Whether the message is pinned
    #[serde(default)]
    pub pinned: bool,

    /// Webhook that posted the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_id: Option<String>,
}

impl Message {
    /// Whether a webhook, rather than a user, authored this message.
    #[must_use]
    pub const fn is_webhook(&self) -> bool {
        self.webhook_id.is_some()
    }

    /// Whether the message has been edited since it was sent.
    #[must_use]
    pub const fn is_edited(&self) -> bool {
        self.edited_timestamp.is_some()
    }
}

/// Discord attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment ID
    pub id: String,

    /// Filename
    pub filename: String,

    /// File size in bytes
    pub size: u64,

    /// URL
    pub url: String,

    /// Proxy URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,

    /// Image height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Image width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Reaction summary on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Times this emoji was used
    pub count: u32,

    /// Whether the current user reacted with it
    pub me: bool,

    /// The emoji
    pub emoji: ReactionEmoji,
}

/// Emoji used in a reaction.
///
/// Unicode emoji have no `id`. Custom emoji have both; the name may be null
/// when the emoji was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEmoji {
    /// Custom emoji ID
    pub id: Option<String>,

    /// Emoji name, or the unicode character itself
    pub name: Option<String>,
}

impl ReactionEmoji {
    /// A standard unicode emoji.
    #[must_use]
    pub fn unicode(emoji: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(emoji.into()),
        }
    }

    /// A guild's custom emoji.
    #[must_use]
    pub fn custom(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }

    /// The form reaction routes expect: `name:id` for custom emoji, the
    /// character itself otherwise.
    #[must_use]
    pub fn to_request_format(&self) -> String {
        let name = self.name.as_deref().unwrap_or("_");
        match &self.id {
            Some(id) => format!("{name}:{id}"),
            None => name.to_string(),
        }
    }

    /// Mention markup for custom emoji, `<:name:id>`; the character otherwise.
    #[must_use]
    pub fn mention(&self) -> String {
        match &self.id {
            Some(_) => format!("<:{}>", self.to_request_format()),
            None => self.to_request_format(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Embeds
// ─────────────────────────────────────────────────────────────────────────────

/// Discord embed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Embed type, always "rich" for webhook and bot embeds
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub embed_type: Option<String>,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Timestamp shown in the footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,

    /// Footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    /// Image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,

    /// Thumbnail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,

    /// Video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedVideo>,

    /// Provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,

    /// Author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,

    /// Fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

impl Embed {
    /// Empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the title link.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the sidebar color, `0xRRGGBB`.
    #[must_use]
    pub const fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the footer timestamp.
    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the footer text.
    #[must_use]
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter {
            text: Some(text.into()),
            ..EmbedFooter::default()
        });
        self
    }

    /// Set the image.
    #[must_use]
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(EmbedImage {
            url: Some(url.into()),
            ..EmbedImage::default()
        });
        self
    }

    /// Set the thumbnail.
    #[must_use]
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(EmbedThumbnail {
            url: Some(url.into()),
            ..EmbedThumbnail::default()
        });
        self
    }

    /// Set the author name.
    #[must_use]
    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(EmbedAuthor {
            name: Some(name.into()),
            ..EmbedAuthor::default()
        });
        self
    }

    /// Append a field.
    #[must_use]
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: Some(name.into()),
            value: Some(value.into()),
            inline,
        });
        self
    }
}

/// Embed thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    /// Source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Proxied URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,

    /// Height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Embed video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedVideo {
    /// Source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Embed image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    /// Source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Proxied URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,

    /// Height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Embed provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedProvider {
    /// Provider name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Provider URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Embed author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Author URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// Proxied icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

/// Embed footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    /// Footer text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// Proxied icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

/// Embed field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    /// Field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Field value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Inline display
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Files
// ─────────────────────────────────────────────────────────────────────────────

/// A file to upload with a message.
#[derive(Clone, PartialEq, Eq)]
pub struct File {
    /// File name shown in the client
    pub name: String,

    /// Raw contents
    pub content: Vec<u8>,
}

impl File {
    /// File from in-memory bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read the whole of `reader` into a file.
    ///
    /// # Errors
    /// Returns any I/O error from the reader.
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> std::io::Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Ok(Self::new(name, content))
    }

    /// Load a file from disk, named after its final path component.
    ///
    /// # Errors
    /// Returns any I/O error from reading the file.
    pub async fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::new(name, content))
    }
}

impl std::fmt::Debug for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("File")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Guilds
// ─────────────────────────────────────────────────────────────────────────────

/// Discord guild (server).
///
/// Also used for the partial guilds listed by the current user's guild list,
/// which only carry `id`, `name`, `icon`, `owner` and `permissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    /// Guild ID
    pub id: String,

    /// Guild name
    pub name: String,

    /// Icon hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Owner ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// Whether the current user owns the guild
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<bool>,

    /// Current user's permissions in the guild
    #[serde(
        default,
        with = "string_or_u64::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub permissions: Option<u64>,

    /// Voice region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// AFK channel ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<String>,

    /// AFK timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,

    /// Verification level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<u8>,

    /// Roles
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Enabled guild features
    #[serde(default)]
    pub features: Vec<String>,
}

/// A user's membership in a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    /// The user, absent in some nested payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Guild nickname, null when unset
    #[serde(default)]
    pub nick: Option<String>,

    /// Role IDs
    #[serde(default)]
    pub roles: Vec<String>,

    /// When the user joined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,

    /// Server deafened
    #[serde(default)]
    pub deaf: bool,

    /// Server muted
    #[serde(default)]
    pub mute: bool,
}

impl GuildMember {
    /// Nickname if set, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.nick
            .as_deref()
            .or_else(|| self.user.as_ref().map(|u| u.username.as_str()))
    }
}

/// Guild role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role ID
    pub id: String,

    /// Role name
    pub name: String,

    /// Color, `0xRRGGBB`
    #[serde(default)]
    pub color: u32,

    /// Displayed separately in the member list
    #[serde(default)]
    pub hoist: bool,

    /// Sorting position
    #[serde(default)]
    pub position: i32,

    /// Permission bits
    #[serde(with = "string_or_u64")]
    pub permissions: u64,

    /// Managed by an integration
    #[serde(default)]
    pub managed: bool,

    /// Mentionable by everyone
    #[serde(default)]
    pub mentionable: bool,
}

impl Role {
    /// Mention markup, `<@&id>`.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id)
    }
}

/// Guild ban.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ban {
    /// Reason given when banning
    #[serde(default)]
    pub reason: Option<String>,

    /// Banned user
    pub user: User,
}

// ─────────────────────────────────────────────────────────────────────────────
// Invites
// ─────────────────────────────────────────────────────────────────────────────

/// Discord invite.
///
/// The metadata fields (`uses` onwards) are only present in channel and guild
/// invite listings and in the response to creating an invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    /// Invite code
    pub code: String,

    /// Guild the invite leads to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<InviteGuild>,

    /// Channel the invite leads to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<InviteChannel>,

    /// Who created the invite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inviter: Option<User>,

    /// Times used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<u32>,

    /// Maximum uses, 0 for unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,

    /// Lifetime in seconds, 0 for never expiring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,

    /// Grants temporary membership
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Invite {
    /// Shareable invite link.
    #[must_use]
    pub fn url(&self) -> String {
        format!("https://discord.gg/{}", self.code)
    }
}

/// Partial guild embedded in an invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteGuild {
    /// Guild ID
    pub id: String,

    /// Guild name
    pub name: String,

    /// Splash hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash: Option<String>,

    /// Icon hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Partial channel embedded in an invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteChannel {
    /// Channel ID
    pub id: String,

    /// Channel name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Channel type
    #[serde(rename = "type")]
    pub channel_type: i32,
}
