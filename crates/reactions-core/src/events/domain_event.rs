//! Reaction events - emitted when a reaction row is created or deleted
//!
//! Subscribers use these for denormalized counters, activity feeds, and
//! audit logging. Delivery is fire-and-forget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Reaction;
use crate::value_objects::EntityRef;

/// All reaction lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionEvent {
    /// A reaction row was created
    Reacted(ReactionPayload),
    /// A reaction row was deleted
    ReactionDeleted(ReactionPayload),
}

impl ReactionEvent {
    /// Build a creation event
    pub fn reacted(reactable: EntityRef, reaction: Reaction, reacter: EntityRef) -> Self {
        Self::Reacted(ReactionPayload::new(reactable, reaction, reacter))
    }

    /// Build a deletion event
    pub fn deleted(reactable: EntityRef, reaction: Reaction, reacter: EntityRef) -> Self {
        Self::ReactionDeleted(ReactionPayload::new(reactable, reaction, reacter))
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Reacted(_) => "REACTED",
            Self::ReactionDeleted(_) => "REACTION_DELETED",
        }
    }

    /// Get the event payload
    pub fn payload(&self) -> &ReactionPayload {
        match self {
            Self::Reacted(p) | Self::ReactionDeleted(p) => p,
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.payload().timestamp
    }
}

/// Shared event shape: (reactable, reaction, reacter)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionPayload {
    pub reactable: EntityRef,
    pub reaction: Reaction,
    pub reacter: EntityRef,
    pub timestamp: DateTime<Utc>,
}

impl ReactionPayload {
    pub fn new(reactable: EntityRef, reaction: Reaction, reacter: EntityRef) -> Self {
        Self {
            reactable,
            reaction,
            reacter,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reaction() -> Reaction {
        let now = Utc::now();
        Reaction {
            id: 5,
            reacter: EntityRef::new("users", 1),
            reactable: EntityRef::new("posts", 2),
            reaction_type: Some("like".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_event_serialization() {
        let reaction = sample_reaction();
        let event = ReactionEvent::reacted(
            reaction.reactable.clone(),
            reaction.clone(),
            reaction.reacter.clone(),
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"REACTED\""));

        let parsed: ReactionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.event_type(), "REACTED");
        assert_eq!(parsed.payload().reaction, reaction);
    }

    #[test]
    fn test_event_type() {
        let reaction = sample_reaction();
        let event = ReactionEvent::deleted(
            reaction.reactable.clone(),
            reaction.clone(),
            reaction.reacter.clone(),
        );
        assert_eq!(event.event_type(), "REACTION_DELETED");
        assert_eq!(event.payload().reacter, EntityRef::new("users", 1));
    }
}
