//! Inbound side of a pagination session: reaction events from the gateway.

use async_trait::async_trait;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;
use twilight_model::{
    channel::message::EmojiReactionType,
    gateway::GatewayReaction,
    id::{
        Id,
        marker::{MessageMarker, UserMarker},
    },
};

/// Default number of buffered reaction events per subscriber.
pub const DEFAULT_HUB_CAPACITY: usize = 256;

/// A unicode reaction added to some message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionEvent {
    pub message_id: Id<MessageMarker>,
    pub emoji: String,
    pub actor_id: Id<UserMarker>,
}

impl ReactionEvent {
    /// Convert a gateway reaction. Custom emoji never map to a command and are dropped.
    pub fn from_gateway(reaction: &GatewayReaction) -> Option<Self> {
        let EmojiReactionType::Unicode { name } = &reaction.emoji else {
            return None;
        };

        Some(Self {
            message_id: reaction.message_id,
            emoji: name.clone(),
            actor_id: reaction.user_id,
        })
    }
}

/// Awaitable stream of reaction events feeding a session.
#[async_trait]
pub trait CommandSource: Send {
    /// Next event, or `None` once the stream has closed for good.
    async fn next_event(&mut self) -> Option<ReactionEvent>;
}

/// Fan-out of gateway reaction events to every live session.
#[derive(Clone, Debug)]
pub struct ReactionHub {
    sender: broadcast::Sender<ReactionEvent>,
}

impl Default for ReactionHub {
    fn default() -> Self {
        Self::new(DEFAULT_HUB_CAPACITY)
    }
}

impl ReactionHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event. Nobody listening is not an error.
    pub fn publish(&self, event: ReactionEvent) {
        let _ = self.sender.send(event);
    }

    /// Publish a gateway reaction if it is a unicode emoji.
    pub fn publish_reaction(&self, reaction: &GatewayReaction) {
        if let Some(event) = ReactionEvent::from_gateway(reaction) {
            self.publish(event);
        }
    }

    /// Start receiving every event published from now on.
    pub fn subscribe(&self) -> ReactionSubscription {
        ReactionSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// One session's view of the hub.
#[derive(Debug)]
pub struct ReactionSubscription {
    receiver: broadcast::Receiver<ReactionEvent>,
}

#[async_trait]
impl CommandSource for ReactionSubscription {
    async fn next_event(&mut self) -> Option<ReactionEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "reaction subscription lagged, events dropped");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(message: u64, emoji: &str, actor: u64) -> ReactionEvent {
        ReactionEvent {
            message_id: Id::new(message),
            emoji: emoji.to_owned(),
            actor_id: Id::new(actor),
        }
    }

    #[tokio::test]
    async fn subscribers_each_receive_published_events() {
        let hub = ReactionHub::new(8);
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 2);

        hub.publish(event(1, "a", 2));

        assert_eq!(first.next_event().await, Some(event(1, "a", 2)));
        assert_eq!(second.next_event().await, Some(event(1, "a", 2)));
    }

    #[tokio::test]
    async fn lagged_subscriber_skips_to_newest_events() {
        let hub = ReactionHub::new(2);
        let mut subscription = hub.subscribe();

        for actor in 1..=4 {
            hub.publish(event(1, "a", actor));
        }

        assert_eq!(subscription.next_event().await, Some(event(1, "a", 3)));
        assert_eq!(subscription.next_event().await, Some(event(1, "a", 4)));
    }

    #[tokio::test]
    async fn dropped_hub_closes_subscription() {
        let hub = ReactionHub::new(2);
        let mut subscription = hub.subscribe();
        drop(hub);

        assert_eq!(subscription.next_event().await, None);
    }
}
