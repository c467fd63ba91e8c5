//! Reaction entity <-> model mapper

use reactions_core::entities::{NewReaction, Reaction};
use reactions_core::value_objects::EntityRef;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            reacter: EntityRef::new(model.reacter_type, model.reacter_id),
            reactable: EntityRef::new(model.reactable_type, model.reactable_id),
            reaction_type: model.reaction_type,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Flattened column values for inserting a reaction
pub struct ReactionInsert<'a> {
    pub reacter_id: i64,
    pub reacter_type: &'a str,
    pub reactable_id: i64,
    pub reactable_type: &'a str,
    pub reaction_type: &'a str,
}

impl<'a> ReactionInsert<'a> {
    pub fn new(reaction: &'a NewReaction) -> Self {
        Self {
            reacter_id: reaction.reacter.id,
            reacter_type: &reaction.reacter.entity_type,
            reactable_id: reaction.reactable.id,
            reactable_type: &reaction.reactable.entity_type,
            reaction_type: reaction.reaction_type.as_str(),
        }
    }
}
