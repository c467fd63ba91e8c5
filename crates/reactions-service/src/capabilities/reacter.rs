//! Operations available on anything that can issue reactions

use async_trait::async_trait;

use reactions_core::entities::Reaction;
use reactions_core::traits::{Reactable, Reacter};

use crate::services::{ReactionService, ServiceResult};

/// Reaction operations on a reacter entity
#[async_trait]
pub trait ReacterExt: Reacter + Sized {
    /// React, replacing a reaction of another type
    async fn react_to(
        &self,
        service: &ReactionService<'_>,
        reactable: &dyn Reactable,
        reaction_type: &str,
    ) -> ServiceResult<Reaction> {
        service.react_to(self, reactable, reaction_type).await
    }

    async fn remove_reaction_from(
        &self,
        service: &ReactionService<'_>,
        reactable: &dyn Reactable,
    ) -> ServiceResult<Option<Reaction>> {
        service.remove_reaction_from(self, reactable).await
    }

    /// Toggle off on the same type, switch on another
    async fn toggle_reaction_on(
        &self,
        service: &ReactionService<'_>,
        reactable: &dyn Reactable,
        reaction_type: &str,
    ) -> ServiceResult<Option<Reaction>> {
        service.toggle_reaction_on(self, reactable, reaction_type).await
    }

    async fn reacted_on(
        &self,
        service: &ReactionService<'_>,
        reactable: &dyn Reactable,
    ) -> ServiceResult<Option<Reaction>> {
        service.reacted_on(self, reactable).await
    }

    async fn is_reacted_on(
        &self,
        service: &ReactionService<'_>,
        reactable: &dyn Reactable,
        reaction_type: Option<&str>,
    ) -> ServiceResult<bool> {
        service.is_reacted_on(self, reactable, reaction_type).await
    }

    /// Ids of reactables of one type this entity reacted on
    async fn reacted_ids(
        &self,
        service: &ReactionService<'_>,
        reactable_type: &str,
        reaction_type: Option<&str>,
    ) -> ServiceResult<Vec<i64>> {
        service.reacted_ids(self, reactable_type, reaction_type).await
    }
}

impl<T: Reacter> ReacterExt for T {}
