//! Event publisher port

use async_trait::async_trait;

use crate::events::ReactionEvent;

/// Fire-and-forget sink for reaction events
///
/// Implementations must not fail the calling operation; delivery problems
/// are logged and dropped.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: ReactionEvent);
}
