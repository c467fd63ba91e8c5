//! Capability traits for entities taking part in reactions
//!
//! A domain type opts in by exposing its polymorphic reference. Nothing else
//! is required: the reaction operations live on the extension traits in the
//! service layer and work for any implementor.

use async_trait::async_trait;

use crate::traits::RepoResult;
use crate::value_objects::EntityRef;

/// An entity that can receive reactions (a post, a comment, ...)
pub trait Reactable: Send + Sync {
    fn reactable_ref(&self) -> EntityRef;
}

/// An entity that can issue reactions (a user, a team, ...)
pub trait Reacter: Send + Sync {
    fn reacter_ref(&self) -> EntityRef;
}

impl Reactable for EntityRef {
    fn reactable_ref(&self) -> EntityRef {
        self.clone()
    }
}

impl Reacter for EntityRef {
    fn reacter_ref(&self) -> EntityRef {
        self.clone()
    }
}

/// Loads entities of one type by id
///
/// Implemented by the host application for each entity type whose rows
/// should be resolved from reaction references.
#[async_trait]
pub trait EntityLoader<E>: Send + Sync {
    /// Type tag of the entities this loader returns
    fn entity_type(&self) -> &str;

    /// Load all existing entities among `ids`
    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<E>>;
}
