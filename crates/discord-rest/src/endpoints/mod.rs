//! Endpoint handles.
//!
//! Each handle borrows the [`DiscordClient`](crate::DiscordClient) and the
//! identifiers of the resource it addresses. Creating one is free; every
//! method issues exactly one request.

mod channel;
mod guild;
mod invite;
mod message;
mod reaction;
mod user;

pub use channel::ChannelEndpoint;
pub use guild::{GuildEndpoint, GuildsEndpoint, MemberEndpoint};
pub use invite::InviteEndpoint;
pub use message::{MessageEndpoint, MessagesEndpoint};
pub use reaction::ReactionEndpoint;
pub use user::{CurrentUserEndpoint, UserEndpoint};
