//! Channel endpoint tests.

mod common;

use discord_rest::{CreateInvite, EditPermissions, ModifyChannel, OverwriteType};
use discord_testkit::fixtures;
use serde_json::json;

use common::{setup, TOKEN};

#[tokio::test]
async fn get_channel_decodes_guild_channel() {
    let (mock, client) = setup().await;
    mock.expect_get(
        "/channels/41771983423143937",
        fixtures::channel("41771983423143937"),
    )
    .await;

    let channel = client.channel("41771983423143937").get().await.unwrap();

    assert_eq!(channel.id, "41771983423143937");
    assert_eq!(channel.name.as_deref(), Some("general"));
    assert_eq!(channel.channel_type, 0);
    assert!(!channel.is_direct_message());
    assert_eq!(channel.permission_overwrites.len(), 1);
    assert_eq!(channel.permission_overwrites[0].allow, 1024);

    let request = mock.last_request().await;
    assert_eq!(request.method, "GET");
    assert_eq!(request.header("authorization"), Some(&*format!("Bot {TOKEN}")));
    assert!(request
        .header("user-agent")
        .is_some_and(|ua| ua.starts_with("DiscordBot (")));
}

#[tokio::test]
async fn get_channel_decodes_dm_channel() {
    let (mock, client) = setup().await;
    mock.expect_get("/channels/3", fixtures::dm_channel("3", "5"))
        .await;

    let channel = client.channel("3").get().await.unwrap();

    assert!(channel.is_direct_message());
    assert_eq!(channel.recipient.unwrap().id, "5");
    assert!(channel.permission_overwrites.is_empty());
}

#[tokio::test]
async fn modify_channel_sends_only_set_fields() {
    let (mock, client) = setup().await;
    mock.expect_patch("/channels/7", fixtures::voice_channel("7"))
        .await;

    let params = ModifyChannel {
        bitrate: Some(64_000),
        user_limit: Some(0),
        ..ModifyChannel::default()
    };
    let channel = client.channel("7").modify(&params).await.unwrap();

    assert_eq!(channel.bitrate, Some(64_000));
    let request = mock.last_request().await;
    assert_eq!(request.method, "PATCH");
    assert_eq!(request.json(), json!({"bitrate": 64_000, "user_limit": 0}));
}

#[tokio::test]
async fn delete_channel_returns_channel() {
    let (mock, client) = setup().await;
    mock.expect_delete("/channels/1", fixtures::channel("1")).await;

    let channel = client.channel("1").delete().await.unwrap();

    assert_eq!(channel.id, "1");
    mock.assert_received("DELETE", "/channels/1").await;
}

#[tokio::test]
async fn edit_and_delete_permission_overwrite() {
    let (mock, client) = setup().await;
    mock.expect_no_content("PUT", "/channels/1/permissions/9").await;
    mock.expect_no_content("DELETE", "/channels/1/permissions/9")
        .await;

    let channel = client.channel("1");
    channel
        .edit_permissions(
            "9",
            &EditPermissions {
                allow: 1024,
                deny: 0,
                overwrite_type: OverwriteType::Role,
            },
        )
        .await
        .unwrap();
    channel.delete_permission("9").await.unwrap();

    let recorded = mock.recorded().await;
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].method, "PUT");
    assert_eq!(
        recorded[0].json(),
        json!({"allow": "1024", "deny": "0", "type": 0})
    );
    assert_eq!(recorded[1].method, "DELETE");
    assert!(recorded[1].body.is_empty());
}

#[tokio::test]
async fn channel_invites() {
    let (mock, client) = setup().await;
    mock.expect_get(
        "/channels/1/invites",
        json!([fixtures::invite_with_metadata("abc")]),
    )
    .await;
    mock.expect_post("/channels/1/invites", fixtures::invite_with_metadata("xyz"))
        .await;

    let invites = client.channel("1").invites().await.unwrap();
    assert_eq!(invites.len(), 1);
    assert_eq!(invites[0].uses, Some(3));
    assert_eq!(invites[0].max_uses, Some(10));

    let params = CreateInvite {
        max_age: Some(3600),
        unique: Some(true),
        ..CreateInvite::default()
    };
    let invite = client.channel("1").create_invite(&params).await.unwrap();
    assert_eq!(invite.code, "xyz");
    assert_eq!(
        mock.last_request().await.json(),
        json!({"max_age": 3600, "unique": true})
    );
}

#[tokio::test]
async fn trigger_typing_accepts_no_content() {
    let (mock, client) = setup().await;
    mock.expect_no_content("POST", "/channels/1/typing").await;

    client.channel("1").trigger_typing().await.unwrap();

    mock.assert_received("POST", "/channels/1/typing").await;
}

#[tokio::test]
async fn pins() {
    let (mock, client) = setup().await;
    mock.expect_get(
        "/channels/1/pins",
        json!([fixtures::message("1", "10", "pinned")]),
    )
    .await;
    mock.expect_no_content("PUT", "/channels/1/pins/10").await;
    mock.expect_no_content("DELETE", "/channels/1/pins/10").await;

    let channel = client.channel("1");
    let pinned = channel.pinned_messages().await.unwrap();
    assert_eq!(pinned[0].content, "pinned");

    channel.pin("10").await.unwrap();
    channel.unpin("10").await.unwrap();

    mock.assert_received("PUT", "/channels/1/pins/10").await;
    mock.assert_received("DELETE", "/channels/1/pins/10").await;
    mock.assert_request_count(3).await;
}
