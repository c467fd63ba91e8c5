//! Value objects - immutable types that represent domain concepts

mod entity_ref;
mod reaction_type;

pub use entity_ref::EntityRef;
pub use reaction_type::ReactionType;
