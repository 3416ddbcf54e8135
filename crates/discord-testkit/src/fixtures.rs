//! Canned Discord API response bodies.
//!
//! Shapes follow the documented objects closely enough for decoding tests;
//! optional fields are filled where tests commonly look at them.

use serde_json::{json, Value};

/// Snowflake used for the bot user in fixtures.
pub const BOT_USER_ID: &str = "80351110224678912";

/// Timestamp used in fixtures.
pub const TIMESTAMP: &str = "2017-07-11T17:27:07.299000+00:00";

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// A user object.
#[must_use]
pub fn user(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "discriminator": "1337",
        "global_name": null,
        "avatar": "8342729096ea3675442027381ff50dfe",
        "bot": false
    })
}

/// The bot's own user object.
#[must_use]
pub fn bot_user() -> Value {
    let mut user = user(BOT_USER_ID, "discgo");
    user["bot"] = json!(true);
    user
}

// ─────────────────────────────────────────────────────────────────────────────
// Channels
// ─────────────────────────────────────────────────────────────────────────────

/// A guild text channel with one permission overwrite.
#[must_use]
pub fn channel(id: &str) -> Value {
    json!({
        "id": id,
        "guild_id": "41771983423143937",
        "name": "general",
        "type": 0,
        "position": 6,
        "is_private": false,
        "permission_overwrites": [
            {"id": "41771983423143937", "type": 0, "allow": "1024", "deny": "0"}
        ],
        "topic": "24/7 chat about how to gank Mike #2",
        "last_message_id": "155117677105512449",
        "nsfw": true
    })
}

/// A direct-message channel with `recipient` set.
#[must_use]
pub fn dm_channel(id: &str, recipient_id: &str) -> Value {
    json!({
        "id": id,
        "type": 1,
        "is_private": true,
        "last_message_id": "3343820033257021450",
        "recipient": user(recipient_id, "test")
    })
}

/// A guild voice channel.
#[must_use]
pub fn voice_channel(id: &str) -> Value {
    json!({
        "id": id,
        "guild_id": "41771983423143937",
        "name": "ROCKET CHEESE",
        "type": 2,
        "position": 5,
        "permission_overwrites": [],
        "bitrate": 64000,
        "user_limit": 0
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

/// A plain message authored by a user.
#[must_use]
pub fn message(channel_id: &str, id: &str, content: &str) -> Value {
    json!({
        "id": id,
        "channel_id": channel_id,
        "author": user("53908232506183680", "Mason"),
        "content": content,
        "timestamp": TIMESTAMP,
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false
    })
}

/// A message posted by a webhook, with an embed, attachment, and reaction.
#[must_use]
pub fn rich_message(channel_id: &str, id: &str) -> Value {
    let mut msg = message(channel_id, id, "");
    msg["webhook_id"] = json!("223704706495545344");
    msg["nonce"] = json!("1234");
    msg["edited_timestamp"] = json!("2017-07-11T17:30:00.000000+00:00");
    msg["attachments"] = json!([{
        "id": "337251283523272704",
        "filename": "cat.png",
        "size": 4096,
        "url": "https://cdn.discordapp.com/attachments/1/2/cat.png",
        "proxy_url": "https://media.discordapp.net/attachments/1/2/cat.png",
        "height": 128,
        "width": 256
    }]);
    msg["embeds"] = json!([{
        "title": "Release notes",
        "type": "rich",
        "description": "Fixed everything.",
        "color": 16_711_680,
        "footer": {"text": "footer", "icon_url": "https://example.com/f.png"},
        "author": {"name": "Changelog", "url": "https://example.com"},
        "fields": [{"name": "Version", "value": "1.0", "inline": true}]
    }]);
    msg["reactions"] = json!([
        {"count": 2, "me": true, "emoji": {"id": null, "name": "🔥"}},
        {"count": 1, "me": false, "emoji": {"id": "41771983429993937", "name": "LUL"}}
    ]);
    msg
}

// ─────────────────────────────────────────────────────────────────────────────
// Guilds
// ─────────────────────────────────────────────────────────────────────────────

/// A guild object.
#[must_use]
pub fn guild(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "icon": null,
        "owner_id": BOT_USER_ID,
        "region": "us-west",
        "afk_channel_id": null,
        "afk_timeout": 300,
        "verification_level": 0,
        "roles": [role(id, "@everyone")],
        "emojis": [],
        "features": [],
        "mfa_level": 0
    })
}

/// A guild member. `nick` may be `None` to produce a JSON null.
#[must_use]
pub fn member(user_id: &str, nick: Option<&str>) -> Value {
    json!({
        "user": user(user_id, "member"),
        "nick": nick,
        "roles": [],
        "joined_at": TIMESTAMP,
        "deaf": false,
        "mute": false
    })
}

/// A role object.
#[must_use]
pub fn role(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "color": 3_447_003,
        "hoist": true,
        "position": 1,
        "permissions": "66321471",
        "managed": false,
        "mentionable": false
    })
}

/// A ban object.
#[must_use]
pub fn ban(user_id: &str, reason: Option<&str>) -> Value {
    json!({
        "reason": reason,
        "user": user(user_id, "banned")
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Invites
// ─────────────────────────────────────────────────────────────────────────────

/// An invite object.
#[must_use]
pub fn invite(code: &str) -> Value {
    json!({
        "code": code,
        "guild": {
            "id": "165176875973476352",
            "name": "CS:GO Fraggers Only",
            "splash": null,
            "icon": null
        },
        "channel": {
            "id": "165176875973476352",
            "name": "illuminati",
            "type": 0
        }
    })
}

/// An invite object with metadata, as returned by channel/guild invite lists.
#[must_use]
pub fn invite_with_metadata(code: &str) -> Value {
    let mut inv = invite(code);
    inv["inviter"] = user("80351110224678912", "inviter");
    inv["uses"] = json!(3);
    inv["max_uses"] = json!(10);
    inv["max_age"] = json!(86400);
    inv["temporary"] = json!(false);
    inv["created_at"] = json!(TIMESTAMP);
    inv["revoked"] = json!(false);
    inv
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Discord's JSON error body.
#[must_use]
pub fn api_error(code: i32, message: &str) -> Value {
    json!({
        "code": code,
        "message": message
    })
}

/// Empty object.
#[must_use]
pub fn empty() -> Value {
    json!({})
}
