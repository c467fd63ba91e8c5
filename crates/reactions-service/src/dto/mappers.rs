//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use reactions_core::{EntityRef, Reaction};

use super::responses::{EntityRefResponse, ReactionResponse};

impl From<&EntityRef> for EntityRefResponse {
    fn from(entity: &EntityRef) -> Self {
        Self {
            entity_type: entity.entity_type.clone(),
            id: entity.id.to_string(),
        }
    }
}

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.to_string(),
            reacter: (&reaction.reacter).into(),
            reactable: (&reaction.reactable).into(),
            reaction_type: reaction.reaction_type.clone(),
            created_at: reaction.created_at,
        }
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self::from(&reaction)
    }
}
