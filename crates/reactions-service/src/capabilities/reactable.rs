//! Operations available on anything that can receive reactions

use std::collections::BTreeMap;

use async_trait::async_trait;

use reactions_core::entities::{Reaction, SummaryKey};
use reactions_core::traits::{EntityLoader, Reactable, Reacter};

use crate::services::{ReactionService, ServiceResult};

/// Reaction operations on a reactable entity
///
/// Actor-scoped methods take the actor explicitly. Passing `None` fails with
/// `ActorNotResolvable`.
#[async_trait]
pub trait ReactableExt: Reactable + Sized {
    /// All reactions on this entity
    async fn reactions(&self, service: &ReactionService<'_>) -> ServiceResult<Vec<Reaction>> {
        service.reactions(self).await
    }

    /// Distinct reacters of the loader's type, optionally limited to one label
    async fn reactions_by<E: Send>(
        &self,
        service: &ReactionService<'_>,
        loader: &dyn EntityLoader<E>,
        reaction_type: Option<&str>,
    ) -> ServiceResult<Vec<E>> {
        service.reactions_by(self, loader, reaction_type).await
    }

    /// Reaction counts grouped by `key`
    async fn reaction_summary(
        &self,
        service: &ReactionService<'_>,
        key: SummaryKey,
    ) -> ServiceResult<BTreeMap<String, i64>> {
        service.reaction_summary(self, key).await
    }

    async fn react(
        &self,
        service: &ReactionService<'_>,
        reaction_type: &str,
        actor: Option<&dyn Reacter>,
    ) -> ServiceResult<Reaction> {
        service.react(self, reaction_type, actor).await
    }

    async fn remove_reaction(
        &self,
        service: &ReactionService<'_>,
        actor: Option<&dyn Reacter>,
    ) -> ServiceResult<Option<Reaction>> {
        service.remove_reaction(self, actor).await
    }

    async fn toggle_reaction(
        &self,
        service: &ReactionService<'_>,
        reaction_type: &str,
        actor: Option<&dyn Reacter>,
    ) -> ServiceResult<Option<Reaction>> {
        service.toggle_reaction(self, reaction_type, actor).await
    }

    /// The actor's reaction on this entity
    async fn reacted(
        &self,
        service: &ReactionService<'_>,
        actor: Option<&dyn Reacter>,
    ) -> ServiceResult<Option<Reaction>> {
        service.reacted(self, actor).await
    }

    async fn is_react_by(
        &self,
        service: &ReactionService<'_>,
        actor: Option<&dyn Reacter>,
        reaction_type: Option<&str>,
    ) -> ServiceResult<bool> {
        service.is_react_by(self, actor, reaction_type).await
    }
}

impl<T: Reactable> ReactableExt for T {}
