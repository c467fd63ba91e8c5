//! Broadcast publisher
//!
//! Fans reaction events out to every live subscriber over a tokio broadcast
//! channel. Slow subscribers lag and lose the oldest events; publishing never
//! blocks and never fails the caller.

use async_trait::async_trait;
use tokio::sync::broadcast;

use reactions_core::events::ReactionEvent;
use reactions_core::traits::EventPublisher;

/// Default channel capacity
pub const DEFAULT_EVENT_BUFFER: usize = 256;

/// Event publisher backed by `tokio::sync::broadcast`
#[derive(Debug, Clone)]
pub struct BroadcastPublisher {
    sender: broadcast::Sender<ReactionEvent>,
}

impl BroadcastPublisher {
    /// Create a publisher buffering up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to all events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<ReactionEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER)
    }
}

#[async_trait]
impl EventPublisher for BroadcastPublisher {
    async fn publish(&self, event: ReactionEvent) {
        let event_type = event.event_type();
        let reaction_id = event.payload().reaction.id;

        // Err only means nobody is listening
        let receivers = self.sender.send(event).unwrap_or(0);

        tracing::debug!(
            event_type = %event_type,
            reaction_id = reaction_id,
            receivers = receivers,
            "Published event"
        );
    }
}
