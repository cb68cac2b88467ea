//! Twilight-backed message sink for pagination sessions.

use std::sync::Arc;

use async_trait::async_trait;
use twilight_http::{Client, request::channel::reaction::RequestReactionType};
use twilight_model::{
    channel::message::embed::Embed,
    id::{
        Id,
        marker::{ChannelMarker, UserMarker},
    },
};

use super::{
    command::NavCommand,
    page::Page,
    sink::{MessageHandle, MessageSink},
};

/// Posts and edits paginated messages in one channel over the Discord HTTP API.
#[derive(Clone)]
pub struct ChannelSink {
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
}

impl ChannelSink {
    pub fn new(http: Arc<Client>, channel_id: Id<ChannelMarker>) -> Self {
        Self { http, channel_id }
    }
}

fn reaction(command: NavCommand) -> RequestReactionType<'static> {
    RequestReactionType::Unicode {
        name: command.emoji(),
    }
}

#[async_trait]
impl MessageSink for ChannelSink {
    async fn send(&self, page: &Page) -> anyhow::Result<MessageHandle> {
        let mut request = self.http.create_message(self.channel_id);
        if let Some(content) = page.content() {
            request = request.content(content);
        }
        if let Some(embed) = page.embed() {
            request = request.embeds(std::slice::from_ref(embed));
        }

        let created_message = request.await?.model().await?;

        Ok(MessageHandle {
            channel_id: created_message.channel_id,
            message_id: created_message.id,
        })
    }

    async fn edit(&self, handle: MessageHandle, page: &Page) -> anyhow::Result<()> {
        let no_embeds: [Embed; 0] = [];
        let embeds = page.embed().map_or(&no_embeds[..], std::slice::from_ref);

        self.http
            .update_message(handle.channel_id, handle.message_id)
            .content(page.content())
            .embeds(Some(embeds))
            .await?;

        Ok(())
    }

    async fn add_affordance(
        &self,
        handle: MessageHandle,
        command: NavCommand,
    ) -> anyhow::Result<()> {
        self.http
            .create_reaction(handle.channel_id, handle.message_id, &reaction(command))
            .await?;

        Ok(())
    }

    async fn remove_affordance_vote(
        &self,
        handle: MessageHandle,
        command: NavCommand,
        actor: Id<UserMarker>,
    ) -> anyhow::Result<()> {
        self.http
            .delete_reaction(handle.channel_id, handle.message_id, &reaction(command), actor)
            .await?;

        Ok(())
    }

    async fn clear_affordances(&self, handle: MessageHandle) -> anyhow::Result<()> {
        self.http
            .delete_all_reactions(handle.channel_id, handle.message_id)
            .await?;

        Ok(())
    }
}
