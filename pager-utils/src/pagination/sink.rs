//! Outbound side of a pagination session: the message being paged.

use async_trait::async_trait;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker, UserMarker},
};

use super::{command::NavCommand, page::Page};

/// Location of the single message a session keeps editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageHandle {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

/// Rendering capability a session drives.
///
/// Errors are returned as-is; sessions never retry.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Post `page` as a new message.
    async fn send(&self, page: &Page) -> anyhow::Result<MessageHandle>;

    /// Replace the message's content and embed with `page`.
    async fn edit(&self, handle: MessageHandle, page: &Page) -> anyhow::Result<()>;

    /// Offer `command` on the message (one reaction per command).
    async fn add_affordance(&self, handle: MessageHandle, command: NavCommand)
    -> anyhow::Result<()>;

    /// Withdraw `actor`'s use of `command` so it can be pressed again.
    async fn remove_affordance_vote(
        &self,
        handle: MessageHandle,
        command: NavCommand,
        actor: Id<UserMarker>,
    ) -> anyhow::Result<()>;

    /// Remove every interactive affordance from the message.
    async fn clear_affordances(&self, handle: MessageHandle) -> anyhow::Result<()>;
}
