//! Reaction entity - one reacter's typed reaction on one reactable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{EntityRef, ReactionType};

/// Reaction entity (a row of the `reactions` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: i64,
    pub reacter: EntityRef,
    pub reactable: EntityRef,
    /// Nullable in storage; always set for rows written through this crate
    pub reaction_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// The entity that received this reaction
    #[inline]
    pub fn reactable(&self) -> &EntityRef {
        &self.reactable
    }

    /// The entity that issued this reaction
    #[inline]
    pub fn reacter(&self) -> &EntityRef {
        &self.reacter
    }

    /// Check if reaction carries a specific label
    #[inline]
    pub fn is_type(&self, reaction_type: &str) -> bool {
        self.reaction_type.as_deref() == Some(reaction_type)
    }

    /// Check if this reaction was issued by the given reacter
    #[inline]
    pub fn is_by(&self, reacter: &EntityRef) -> bool {
        &self.reacter == reacter
    }
}

/// Values needed to insert a reaction row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub reacter: EntityRef,
    pub reactable: EntityRef,
    pub reaction_type: ReactionType,
}

impl NewReaction {
    /// Create a new insert payload
    pub fn new(reacter: EntityRef, reactable: EntityRef, reaction_type: ReactionType) -> Self {
        Self {
            reacter,
            reactable,
            reaction_type,
        }
    }
}

/// Attribute used to group reactions in a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKey {
    /// Group by reaction label
    #[default]
    Type,
    /// Group by the reacter's type tag
    ReacterType,
}

impl SummaryKey {
    /// Extract the grouping value from a reaction (null labels group under "")
    pub fn value_of<'a>(&self, reaction: &'a Reaction) -> &'a str {
        match self {
            Self::Type => reaction.reaction_type.as_deref().unwrap_or_default(),
            Self::ReacterType => &reaction.reacter.entity_type,
        }
    }
}
