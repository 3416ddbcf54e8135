//! User and invite endpoint tests.

mod common;

use discord_testkit::fixtures;
use serde_json::json;

use common::{setup, TOKEN};

#[tokio::test]
async fn current_user() {
    let (mock, client) = setup().await;
    mock.expect_with_header(
        "GET",
        "/users/@me",
        "authorization",
        &format!("Bot {TOKEN}"),
        fixtures::bot_user(),
    )
    .await;

    let me = client.current_user().get().await.unwrap();

    assert!(me.bot);
    assert_eq!(me.id, fixtures::BOT_USER_ID);
    assert_eq!(me.mention(), format!("<@{}>", fixtures::BOT_USER_ID));
}

#[tokio::test]
async fn other_user() {
    let (mock, client) = setup().await;
    mock.expect_get("/users/5", fixtures::user("5", "Mason")).await;

    let user = client.user("5").get().await.unwrap();

    assert_eq!(user.username, "Mason");
    assert_eq!(user.discriminator.as_deref(), Some("1337"));
    assert!(!user.bot);
}

#[tokio::test]
async fn current_user_guilds_are_partial() {
    let (mock, client) = setup().await;
    mock.expect_get(
        "/users/@me/guilds",
        json!([{
            "id": "9",
            "name": "partial",
            "icon": null,
            "owner": true,
            "permissions": "2147483647",
            "features": []
        }]),
    )
    .await;

    let guilds = client.current_user().guilds().await.unwrap();

    assert_eq!(guilds[0].owner, Some(true));
    assert_eq!(guilds[0].permissions, Some(2_147_483_647));
    assert!(guilds[0].roles.is_empty());
}

#[tokio::test]
async fn leave_guild() {
    let (mock, client) = setup().await;
    mock.expect_no_content("DELETE", "/users/@me/guilds/9").await;

    client.current_user().leave_guild("9").await.unwrap();

    mock.assert_received("DELETE", "/users/@me/guilds/9").await;
}

#[tokio::test]
async fn create_dm() {
    let (mock, client) = setup().await;
    mock.expect_post("/users/@me/channels", fixtures::dm_channel("3", "5"))
        .await;

    let channel = client.current_user().create_dm("5").await.unwrap();

    assert!(channel.is_direct_message());
    assert_eq!(
        mock.last_request().await.json(),
        json!({"recipient_id": "5"})
    );
}

#[tokio::test]
async fn get_and_delete_invite() {
    let (mock, client) = setup().await;
    mock.expect_get("/invites/NP9NQ8v", fixtures::invite("NP9NQ8v")).await;
    mock.expect_delete("/invites/NP9NQ8v", fixtures::invite("NP9NQ8v"))
        .await;

    let invite = client.invite("NP9NQ8v").get().await.unwrap();
    assert_eq!(invite.guild.as_ref().unwrap().name, "CS:GO Fraggers Only");
    assert_eq!(invite.channel.as_ref().unwrap().name.as_deref(), Some("illuminati"));
    assert_eq!(invite.uses, None);
    assert_eq!(invite.url(), "https://discord.gg/NP9NQ8v");

    let deleted = client.invite("NP9NQ8v").delete().await.unwrap();
    assert_eq!(deleted.code, "NP9NQ8v");
    mock.assert_received("DELETE", "/invites/NP9NQ8v").await;
}
