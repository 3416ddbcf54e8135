//! Request parameters.
//!
//! Bodies serialize to the JSON the API expects with unset fields omitted.
//! Query parameter types serialize through `reqwest`'s query encoder.

use serde::Serialize;

use crate::types::{Embed, File, Overwrite, OverwriteType};

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn unset_limit(limit: &Option<u32>) -> bool {
    limit.map_or(true, |l| l == 0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Channels
// ─────────────────────────────────────────────────────────────────────────────

/// Fields to change on a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyChannel {
    /// Channel name, 1 to 100 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sorting position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Channel topic, 0 to 1024 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Bitrate in bits per second, voice only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// User limit, voice only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
    /// Replacement permission overwrites
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Vec<Overwrite>>,
}

/// Query for listing channel messages.
///
/// Only one of `around`, `before` and `after` is honored by the API; all set
/// fields are passed through as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetMessages {
    /// Get messages around this message ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub around: Option<String>,
    /// Get messages before this message ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Get messages after this message ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Sent only when greater than zero
    #[serde(skip_serializing_if = "unset_limit")]
    pub limit: Option<u32>,
}

impl GetMessages {
    /// Messages around `id`.
    #[must_use]
    pub fn around(id: impl Into<String>) -> Self {
        Self {
            around: Some(id.into()),
            ..Self::default()
        }
    }

    /// Messages before `id`.
    #[must_use]
    pub fn before(id: impl Into<String>) -> Self {
        Self {
            before: Some(id.into()),
            ..Self::default()
        }
    }

    /// Messages after `id`.
    #[must_use]
    pub fn after(id: impl Into<String>) -> Self {
        Self {
            after: Some(id.into()),
            ..Self::default()
        }
    }

    /// Cap the number of messages returned.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A new message.
///
/// With a [`File`] attached the message is sent as multipart form data;
/// otherwise as plain JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateMessage {
    /// Message text, up to 2000 characters
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Echoed back on the created message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// Text-to-speech
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub tts: bool,
    /// Rich embeds
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    /// Attachment, sent as multipart
    #[serde(skip)]
    pub file: Option<File>,
}

impl CreateMessage {
    /// Message with text content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Read the message aloud.
    #[must_use]
    pub const fn tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Set a nonce the API echoes back on the created message.
    #[must_use]
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Append an embed.
    #[must_use]
    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Attach a file.
    #[must_use]
    pub fn file(mut self, file: File) -> Self {
        self.file = Some(file);
        self
    }
}

/// Changes to an existing message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditMessage {
    /// New text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Replacement embeds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
}

impl EditMessage {
    /// Replace the text content.
    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embeds: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BulkDelete<'a> {
    pub messages: &'a [String],
}

/// Allow/deny bits for one permission overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditPermissions {
    /// Permission bits to allow
    #[serde(with = "crate::util::string_or_u64")]
    pub allow: u64,
    /// Permission bits to deny
    #[serde(with = "crate::util::string_or_u64")]
    pub deny: u64,
    /// Whether the overwrite targets a role or a member
    #[serde(rename = "type")]
    pub overwrite_type: OverwriteType,
}

/// Settings for a new channel invite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateInvite {
    /// Lifetime in seconds, 0 for never
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    /// 0 for unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
    /// Kick members when they disconnect unless given a role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,
    /// Do not reuse a similar existing invite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
}

/// Query for listing users who reacted with an emoji.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetReactions {
    /// Get users before this user ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Get users after this user ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// 1 to 100, sent only when greater than zero
    #[serde(skip_serializing_if = "unset_limit")]
    pub limit: Option<u32>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Guilds
// ─────────────────────────────────────────────────────────────────────────────

/// A new guild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateGuild {
    /// Guild name
    pub name: String,
    /// Voice region ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Base64 data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Verification level, 0 to 4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<u8>,
}

impl CreateGuild {
    /// Guild with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Fields to change on a guild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyGuild {
    /// Guild name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Voice region ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Verification level, 0 to 4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<u8>,
    /// AFK voice channel ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<String>,
    /// AFK timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    /// Base64 data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Transfer ownership to this user ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// A new guild channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateGuildChannel {
    /// Channel name
    pub name: String,
    /// Channel type, text when unset
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<i32>,
    /// Channel topic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Bitrate in bits per second, voice only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// User limit, voice only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
    /// Initial permission overwrites
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permission_overwrites: Vec<Overwrite>,
}

impl CreateGuildChannel {
    /// Text channel with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Query for listing guild members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetMembers {
    /// 1 to 1000
    #[serde(skip_serializing_if = "unset_limit")]
    pub limit: Option<u32>,
    /// Highest user ID of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// Fields to change on a guild member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyMember {
    /// Nickname, empty to reset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Replacement role IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// Server mute in voice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
    /// Server deafen in voice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
    /// Voice channel to move the member to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ModifyCurrentNick<'a> {
    pub nick: &'a str,
}

/// Role settings, for both creating and modifying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleParams {
    /// Role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Permission bits
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::util::string_or_u64::option"
    )]
    pub permissions: Option<u64>,
    /// RGB color value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    /// Display separately in the member list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoist: Option<bool>,
    /// Allow anyone to mention the role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentionable: Option<bool>,
}

/// Options for banning a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateBan {
    /// Delete the user's messages from this many past seconds, up to 604800
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_message_seconds: Option<u32>,
    /// Audit log reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CreateBan {
    /// Delete the user's messages from the past `days` days.
    #[must_use]
    pub const fn delete_message_days(mut self, days: u32) -> Self {
        self.delete_message_seconds = Some(days.saturating_mul(86_400));
        self
    }

    /// Record a reason in the audit log.
    #[must_use]
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateDm<'a> {
    pub recipient_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_message_omits_unset_fields() {
        let params = CreateMessage::new("hello").file(File::new("a.txt", "x"));
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value, json!({"content": "hello"}));
    }

    #[test]
    fn test_create_message_full() {
        let params = CreateMessage::new("hi")
            .tts(true)
            .nonce("1234")
            .embed(Embed::new().title("t"));
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(
            value,
            json!({"content": "hi", "nonce": "1234", "tts": true, "embeds": [{"title": "t"}]})
        );
    }

    #[test]
    fn test_get_messages_zero_limit_skipped() {
        let value = serde_json::to_value(GetMessages::before("5").limit(0)).unwrap();
        assert_eq!(value, json!({"before": "5"}));

        let value = serde_json::to_value(GetMessages::around("5").limit(10)).unwrap();
        assert_eq!(value, json!({"around": "5", "limit": 10}));
    }

    #[test]
    fn test_edit_permissions_encoding() {
        let params = EditPermissions {
            allow: 1024,
            deny: 2048,
            overwrite_type: OverwriteType::Member,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"allow": "1024", "deny": "2048", "type": 1})
        );
    }

    #[test]
    fn test_create_ban_days_to_seconds() {
        let params = CreateBan::default().delete_message_days(2).reason("spam");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"delete_message_seconds": 172_800, "reason": "spam"})
        );
    }

    #[test]
    fn test_role_params_permissions_as_string() {
        let params = RoleParams {
            name: Some("mods".into()),
            permissions: Some(8),
            ..RoleParams::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"name": "mods", "permissions": "8"})
        );
    }
}
