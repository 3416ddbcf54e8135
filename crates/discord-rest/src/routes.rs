//! API routes and their rate limit buckets.
//!
//! A [`Route`] carries the concrete path segments of one request together with
//! its bucket key. Top-level resource IDs stay in the key; every ID below them
//! is collapsed to `{id}` so that, for example, all reactions on all messages
//! of one channel share a single bucket.

use std::fmt;

use reqwest::Method;

const PLACEHOLDER: &str = "{id}";

/// One API request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    method: Method,
    segments: Vec<String>,
    bucket: String,
}

impl Route {
    /// Start an empty route.
    #[must_use]
    pub const fn new(method: Method) -> Self {
        Self {
            method,
            segments: Vec::new(),
            bucket: String::new(),
        }
    }

    /// Append a fixed segment, kept verbatim in the bucket key.
    #[must_use]
    pub fn literal(self, segment: &str) -> Self {
        self.push(segment, segment)
    }

    /// Append a top-level resource ID, kept verbatim in the bucket key.
    #[must_use]
    pub fn major(self, id: &str) -> Self {
        self.push(id, id)
    }

    /// Append a variable segment, collapsed to `{id}` in the bucket key.
    #[must_use]
    pub fn param(self, id: &str) -> Self {
        self.push(id, PLACEHOLDER)
    }

    fn push(mut self, segment: &str, key: &str) -> Self {
        self.segments.push(segment.to_string());
        self.bucket.push('/');
        self.bucket.push_str(key);
        self
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Raw, unencoded path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Rate limit bucket key, e.g. `/channels/1/messages/{id}`.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Unencoded path, e.g. `/channels/1/messages/2`.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Channels
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn channel(method: Method, channel_id: &str) -> Route {
    Route::new(method).literal("channels").major(channel_id)
}

pub(crate) fn channel_messages(method: Method, channel_id: &str) -> Route {
    channel(method, channel_id).literal("messages")
}

pub(crate) fn channel_message(method: Method, channel_id: &str, message_id: &str) -> Route {
    channel_messages(method, channel_id).param(message_id)
}

pub(crate) fn bulk_delete(channel_id: &str) -> Route {
    channel_messages(Method::POST, channel_id).literal("bulk-delete")
}

pub(crate) fn reactions(method: Method, channel_id: &str, message_id: &str) -> Route {
    channel_message(method, channel_id, message_id).literal("reactions")
}

pub(crate) fn reaction(method: Method, channel_id: &str, message_id: &str, emoji: &str) -> Route {
    reactions(method, channel_id, message_id).param(emoji)
}

/// `user_id` is `@me` for the current user's own reaction.
pub(crate) fn reaction_user(
    method: Method,
    channel_id: &str,
    message_id: &str,
    emoji: &str,
    user_id: &str,
) -> Route {
    reaction(method, channel_id, message_id, emoji).param(user_id)
}

pub(crate) fn permission(method: Method, channel_id: &str, overwrite_id: &str) -> Route {
    channel(method, channel_id)
        .literal("permissions")
        .param(overwrite_id)
}

pub(crate) fn channel_invites(method: Method, channel_id: &str) -> Route {
    channel(method, channel_id).literal("invites")
}

pub(crate) fn typing(channel_id: &str) -> Route {
    channel(Method::POST, channel_id).literal("typing")
}

pub(crate) fn pins(method: Method, channel_id: &str) -> Route {
    channel(method, channel_id).literal("pins")
}

pub(crate) fn pin(method: Method, channel_id: &str, message_id: &str) -> Route {
    pins(method, channel_id).param(message_id)
}

// ─────────────────────────────────────────────────────────────────────────────
// Guilds
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn guilds(method: Method) -> Route {
    Route::new(method).literal("guilds")
}

pub(crate) fn guild(method: Method, guild_id: &str) -> Route {
    guilds(method).major(guild_id)
}

pub(crate) fn guild_channels(method: Method, guild_id: &str) -> Route {
    guild(method, guild_id).literal("channels")
}

pub(crate) fn guild_members(method: Method, guild_id: &str) -> Route {
    guild(method, guild_id).literal("members")
}

pub(crate) fn guild_member(method: Method, guild_id: &str, user_id: &str) -> Route {
    guild_members(method, guild_id).param(user_id)
}

pub(crate) fn guild_member_role(
    method: Method,
    guild_id: &str,
    user_id: &str,
    role_id: &str,
) -> Route {
    guild_member(method, guild_id, user_id)
        .literal("roles")
        .param(role_id)
}

pub(crate) fn current_member_nick(guild_id: &str) -> Route {
    guild_members(Method::PATCH, guild_id)
        .literal("@me")
        .literal("nick")
}

pub(crate) fn guild_bans(method: Method, guild_id: &str) -> Route {
    guild(method, guild_id).literal("bans")
}

pub(crate) fn guild_ban(method: Method, guild_id: &str, user_id: &str) -> Route {
    guild_bans(method, guild_id).param(user_id)
}

pub(crate) fn guild_roles(method: Method, guild_id: &str) -> Route {
    guild(method, guild_id).literal("roles")
}

pub(crate) fn guild_role(method: Method, guild_id: &str, role_id: &str) -> Route {
    guild_roles(method, guild_id).param(role_id)
}

pub(crate) fn guild_invites(guild_id: &str) -> Route {
    guild(Method::GET, guild_id).literal("invites")
}

// ─────────────────────────────────────────────────────────────────────────────
// Invites & users
// ─────────────────────────────────────────────────────────────────────────────

/// Invite codes are the only identifier on these routes, so they stay in the key.
pub(crate) fn invite(method: Method, code: &str) -> Route {
    Route::new(method).literal("invites").major(code)
}

pub(crate) fn user(method: Method, user_id: &str) -> Route {
    Route::new(method).literal("users").major(user_id)
}

pub(crate) fn current_user(method: Method) -> Route {
    user(method, "@me")
}

pub(crate) fn current_user_guilds(method: Method) -> Route {
    current_user(method).literal("guilds")
}

pub(crate) fn current_user_guild(method: Method, guild_id: &str) -> Route {
    current_user_guilds(method).param(guild_id)
}

pub(crate) fn current_user_channels() -> Route {
    current_user(Method::POST).literal("channels")
}
