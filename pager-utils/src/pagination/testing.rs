//! Recording fakes for the session collaborators.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::mpsc;
use twilight_model::id::{Id, marker::UserMarker};

use super::{
    command::NavCommand,
    page::Page,
    sink::{MessageHandle, MessageSink},
    source::{CommandSource, ReactionEvent},
};

pub const TEST_CHANNEL_ID: u64 = 100;
pub const TEST_MESSAGE_ID: u64 = 200;
pub const BOT_USER_ID: u64 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkCall {
    Send(Option<String>),
    Edit(Option<String>),
    AddAffordance(NavCommand),
    RemoveVote(NavCommand, u64),
    Clear,
}

#[derive(Clone, Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
    fail_edits: bool,
    clear_delay: Option<Duration>,
}

impl RecordingSink {
    pub fn failing_edits() -> Self {
        Self {
            fail_edits: true,
            ..Self::default()
        }
    }

    /// Sink whose clear takes `delay` to complete, recorded once it has.
    pub fn slow_clear(delay: Duration) -> Self {
        Self {
            clear_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn edited_pages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SinkCall::Edit(content) => content,
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| **call == SinkCall::Clear)
            .count()
    }

    fn record(&self, call: SinkCall) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl MessageSink for RecordingSink {
    async fn send(&self, page: &Page) -> anyhow::Result<MessageHandle> {
        self.record(SinkCall::Send(page.content().map(ToOwned::to_owned)));
        Ok(MessageHandle {
            channel_id: Id::new(TEST_CHANNEL_ID),
            message_id: Id::new(TEST_MESSAGE_ID),
        })
    }

    async fn edit(&self, _handle: MessageHandle, page: &Page) -> anyhow::Result<()> {
        if self.fail_edits {
            return Err(anyhow!("edit rejected"));
        }
        self.record(SinkCall::Edit(page.content().map(ToOwned::to_owned)));
        Ok(())
    }

    async fn add_affordance(
        &self,
        _handle: MessageHandle,
        command: NavCommand,
    ) -> anyhow::Result<()> {
        self.record(SinkCall::AddAffordance(command));
        Ok(())
    }

    async fn remove_affordance_vote(
        &self,
        _handle: MessageHandle,
        command: NavCommand,
        actor: Id<UserMarker>,
    ) -> anyhow::Result<()> {
        self.record(SinkCall::RemoveVote(command, actor.get()));
        Ok(())
    }

    async fn clear_affordances(&self, _handle: MessageHandle) -> anyhow::Result<()> {
        if let Some(delay) = self.clear_delay {
            tokio::time::sleep(delay).await;
        }
        self.record(SinkCall::Clear);
        Ok(())
    }
}

/// Source fed by the test through an unbounded channel; closes when every sender drops.
pub struct ScriptedSource {
    receiver: mpsc::UnboundedReceiver<ReactionEvent>,
}

#[async_trait]
impl CommandSource for ScriptedSource {
    async fn next_event(&mut self) -> Option<ReactionEvent> {
        self.receiver.recv().await
    }
}

pub fn scripted_source() -> (mpsc::UnboundedSender<ReactionEvent>, ScriptedSource) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (sender, ScriptedSource { receiver })
}

pub fn reaction(message_id: u64, emoji: &str, actor: u64) -> ReactionEvent {
    ReactionEvent {
        message_id: Id::new(message_id),
        emoji: emoji.to_owned(),
        actor_id: Id::new(actor),
    }
}
