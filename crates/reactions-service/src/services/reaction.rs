//! Reaction service
//!
//! Decides whether a reacter's request inserts, replaces, or deletes the
//! single reaction row it owns on a reactable, and publishes the matching
//! events. Also answers the read-side queries (summaries, reacter lists,
//! "did X react" checks).

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::{debug, info, instrument, warn};
use validator::Validate;

use reactions_core::entities::{NewReaction, Reaction, SummaryKey};
use reactions_core::error::DomainError;
use reactions_core::events::ReactionEvent;
use reactions_core::traits::{EntityLoader, Reactable, Reacter};
use reactions_core::value_objects::{EntityRef, ReactionType};

use crate::dto::{ReactionCountResponse, ReactionFilter};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Reactable-side queries
    // ========================================================================

    /// A single reaction row by id
    #[instrument(skip(self))]
    pub async fn reaction(&self, id: i64) -> ServiceResult<Reaction> {
        self.ctx
            .reaction_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ReactionNotFound(id)))
    }

    /// All reaction rows on a reactable
    #[instrument(skip_all, fields(reactable = %reactable.reactable_ref()))]
    pub async fn reactions(&self, reactable: &dyn Reactable) -> ServiceResult<Vec<Reaction>> {
        let reactions = self
            .ctx
            .reaction_repo()
            .find_by_reactable(&reactable.reactable_ref())
            .await?;

        Ok(reactions)
    }

    /// Distinct ids of reacters of one type who reacted on a reactable
    ///
    /// `reacter_type` falls back to the configured default reacter type.
    #[instrument(skip_all, fields(reactable = %reactable.reactable_ref()))]
    pub async fn reacter_ids(
        &self,
        reactable: &dyn Reactable,
        reacter_type: Option<&str>,
        reaction_type: Option<&str>,
    ) -> ServiceResult<Vec<i64>> {
        let reacter_type = reacter_type.unwrap_or_else(|| self.ctx.default_reacter_type());
        let reaction_type = Self::type_filter(reaction_type)?;

        let ids = self
            .ctx
            .reaction_repo()
            .find_reacter_ids(
                &reactable.reactable_ref(),
                reacter_type,
                reaction_type.as_ref().map(ReactionType::as_str),
            )
            .await?;

        Ok(ids)
    }

    /// Same as [`Self::reacter_ids`], driven by a validated filter DTO
    pub async fn reacter_ids_matching(
        &self,
        reactable: &dyn Reactable,
        filter: &ReactionFilter,
    ) -> ServiceResult<Vec<i64>> {
        filter.validate()?;
        self.reacter_ids(
            reactable,
            filter.entity_type.as_deref(),
            filter.reaction_type.as_deref(),
        )
        .await
    }

    /// Distinct reacter entities who reacted on a reactable
    ///
    /// The loader fixes the reacter type: rows by reacters of any other type
    /// are never returned.
    #[instrument(skip_all, fields(reactable = %reactable.reactable_ref(), reacter_type = %loader.entity_type()))]
    pub async fn reactions_by<E: Send>(
        &self,
        reactable: &dyn Reactable,
        loader: &dyn EntityLoader<E>,
        reaction_type: Option<&str>,
    ) -> ServiceResult<Vec<E>> {
        let ids = self
            .reacter_ids(reactable, Some(loader.entity_type()), reaction_type)
            .await?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = loader.find_by_ids(&ids).await?;
        Ok(entities)
    }

    /// Count of reactions on a reactable grouped by `key`
    ///
    /// Rows with no reaction type count under the empty string.
    #[instrument(skip_all, fields(reactable = %reactable.reactable_ref(), key = ?key))]
    pub async fn reaction_summary(
        &self,
        reactable: &dyn Reactable,
        key: SummaryKey,
    ) -> ServiceResult<BTreeMap<String, i64>> {
        let counts = self
            .ctx
            .reaction_repo()
            .count_by(&reactable.reactable_ref(), key)
            .await?;

        Ok(counts.into_iter().collect())
    }

    /// Per-type counts on a reactable, flagging the viewer's own reaction
    ///
    /// A missing viewer is an anonymous read: every `me` is false.
    #[instrument(skip_all, fields(reactable = %reactable.reactable_ref()))]
    pub async fn reaction_counts(
        &self,
        reactable: &dyn Reactable,
        viewer: Option<&dyn Reacter>,
    ) -> ServiceResult<Vec<ReactionCountResponse>> {
        let reactable_ref = reactable.reactable_ref();
        let repo = self.ctx.reaction_repo();

        let counts = repo.count_by(&reactable_ref, SummaryKey::Type).await?;
        let mine = match viewer {
            Some(viewer) => repo.find(&viewer.reacter_ref(), &reactable_ref, None).await?,
            None => None,
        };

        Ok(counts
            .into_iter()
            .map(|(reaction_type, count)| ReactionCountResponse {
                me: mine.as_ref().is_some_and(|r| r.is_type(&reaction_type)),
                reaction_type,
                count,
            })
            .collect())
    }

    /// Resolve the reacter entity of a reaction row
    ///
    /// Returns `None` when the row's reacter is of another type than the
    /// loader's, or no longer exists.
    #[instrument(skip_all, fields(reaction_id = reaction.id))]
    pub async fn reacted_by<E: Send>(
        &self,
        reaction: &Reaction,
        loader: &dyn EntityLoader<E>,
    ) -> ServiceResult<Option<E>> {
        if !reaction.reacter.is_type(loader.entity_type()) {
            return Ok(None);
        }

        let entities = loader.find_by_ids(&[reaction.reacter.id]).await?;
        Ok(entities.into_iter().next())
    }

    // ========================================================================
    // Actor-scoped operations (Reactable side)
    // ========================================================================

    /// The actor's reaction on a reactable, if any
    #[instrument(skip_all, fields(reactable = %reactable.reactable_ref()))]
    pub async fn reacted(
        &self,
        reactable: &dyn Reactable,
        actor: Option<&dyn Reacter>,
    ) -> ServiceResult<Option<Reaction>> {
        let actor = Self::resolve_actor(actor)?;

        let reaction = self
            .ctx
            .reaction_repo()
            .find(&actor.reacter_ref(), &reactable.reactable_ref(), None)
            .await?;

        Ok(reaction)
    }

    /// Whether the actor reacted on a reactable, optionally with a given type
    #[instrument(skip_all, fields(reactable = %reactable.reactable_ref(), reaction_type = ?reaction_type))]
    pub async fn is_react_by(
        &self,
        reactable: &dyn Reactable,
        actor: Option<&dyn Reacter>,
        reaction_type: Option<&str>,
    ) -> ServiceResult<bool> {
        let actor = Self::resolve_actor(actor)?;
        let reaction_type = Self::type_filter(reaction_type)?;

        let exists = self
            .ctx
            .reaction_repo()
            .exists(
                &actor.reacter_ref(),
                &reactable.reactable_ref(),
                reaction_type.as_ref().map(ReactionType::as_str),
            )
            .await?;

        Ok(exists)
    }

    /// React on behalf of `actor`
    pub async fn react(
        &self,
        reactable: &dyn Reactable,
        reaction_type: &str,
        actor: Option<&dyn Reacter>,
    ) -> ServiceResult<Reaction> {
        let actor = Self::resolve_actor(actor)?;
        self.react_to(actor, reactable, reaction_type).await
    }

    /// Remove the reaction of `actor`
    pub async fn remove_reaction(
        &self,
        reactable: &dyn Reactable,
        actor: Option<&dyn Reacter>,
    ) -> ServiceResult<Option<Reaction>> {
        let actor = Self::resolve_actor(actor)?;
        self.remove_reaction_from(actor, reactable).await
    }

    /// Toggle the reaction of `actor`
    pub async fn toggle_reaction(
        &self,
        reactable: &dyn Reactable,
        reaction_type: &str,
        actor: Option<&dyn Reacter>,
    ) -> ServiceResult<Option<Reaction>> {
        let actor = Self::resolve_actor(actor)?;
        self.toggle_reaction_on(actor, reactable, reaction_type).await
    }

    /// Ids of reactables of `reactable_type` the actor reacted on
    pub async fn where_reacted_by(
        &self,
        actor: Option<&dyn Reacter>,
        reactable_type: &str,
        reaction_type: Option<&str>,
    ) -> ServiceResult<Vec<i64>> {
        let actor = Self::resolve_actor(actor)?;
        self.reacted_ids(actor, reactable_type, reaction_type).await
    }

    /// Keep only the items the actor reacted on
    ///
    /// Items may mix reactable types; one id query runs per distinct type.
    #[instrument(skip_all, fields(items = items.len(), reaction_type = ?reaction_type))]
    pub async fn filter_reacted_by<T: Reactable>(
        &self,
        items: Vec<T>,
        actor: Option<&dyn Reacter>,
        reaction_type: Option<&str>,
    ) -> ServiceResult<Vec<T>> {
        let actor = Self::resolve_actor(actor)?;
        let reacter = actor.reacter_ref();
        let reaction_type = Self::type_filter(reaction_type)?;
        let reaction_type = reaction_type.as_ref().map(ReactionType::as_str);

        let reactable_types: BTreeSet<String> = items
            .iter()
            .map(|item| item.reactable_ref().entity_type)
            .collect();

        let mut reacted: HashSet<EntityRef> = HashSet::new();
        for reactable_type in reactable_types {
            let ids = self
                .ctx
                .reaction_repo()
                .find_reactable_ids(&reacter, &reactable_type, reaction_type)
                .await?;
            reacted.extend(ids.into_iter().map(|id| EntityRef::new(reactable_type.clone(), id)));
        }

        Ok(items
            .into_iter()
            .filter(|item| reacted.contains(&item.reactable_ref()))
            .collect())
    }

    // ========================================================================
    // Reacter-side operations
    // ========================================================================

    /// React on a reactable
    ///
    /// - no reaction yet: insert one
    /// - same type: return it unchanged
    /// - other type: replace it
    #[instrument(skip_all, fields(
        reacter = %reacter.reacter_ref(),
        reactable = %reactable.reactable_ref(),
        reaction_type = %reaction_type,
    ))]
    pub async fn react_to(
        &self,
        reacter: &dyn Reacter,
        reactable: &dyn Reactable,
        reaction_type: &str,
    ) -> ServiceResult<Reaction> {
        let reaction_type = ReactionType::parse(reaction_type)?;
        let new = NewReaction::new(reacter.reacter_ref(), reactable.reactable_ref(), reaction_type);

        let existing = self
            .ctx
            .reaction_repo()
            .find(&new.reacter, &new.reactable, None)
            .await?;

        match existing {
            None => self.store_reaction(&new).await,
            Some(existing) if existing.is_type(new.reaction_type.as_str()) => {
                debug!(reaction_id = existing.id, "Reaction unchanged");
                Ok(existing)
            }
            Some(existing) => self.replace_reaction(existing, &new).await,
        }
    }

    /// Remove this reacter's reaction, returning the deleted row
    #[instrument(skip_all, fields(
        reacter = %reacter.reacter_ref(),
        reactable = %reactable.reactable_ref(),
    ))]
    pub async fn remove_reaction_from(
        &self,
        reacter: &dyn Reacter,
        reactable: &dyn Reactable,
    ) -> ServiceResult<Option<Reaction>> {
        let existing = self
            .ctx
            .reaction_repo()
            .find(&reacter.reacter_ref(), &reactable.reactable_ref(), None)
            .await?;

        match existing {
            Some(reaction) => self.delete_reaction(reaction).await,
            None => Ok(None),
        }
    }

    /// Toggle a reaction
    ///
    /// - no reaction yet: insert one
    /// - same type: delete it and return `None`
    /// - other type: replace it
    #[instrument(skip_all, fields(
        reacter = %reacter.reacter_ref(),
        reactable = %reactable.reactable_ref(),
        reaction_type = %reaction_type,
    ))]
    pub async fn toggle_reaction_on(
        &self,
        reacter: &dyn Reacter,
        reactable: &dyn Reactable,
        reaction_type: &str,
    ) -> ServiceResult<Option<Reaction>> {
        let reaction_type = ReactionType::parse(reaction_type)?;
        let new = NewReaction::new(reacter.reacter_ref(), reactable.reactable_ref(), reaction_type);

        let existing = self
            .ctx
            .reaction_repo()
            .find(&new.reacter, &new.reactable, None)
            .await?;

        match existing {
            None => self.store_reaction(&new).await.map(Some),
            Some(existing) if existing.is_type(new.reaction_type.as_str()) => {
                self.delete_reaction(existing).await?;
                Ok(None)
            }
            Some(existing) => self.replace_reaction(existing, &new).await.map(Some),
        }
    }

    /// This reacter's reaction on a reactable
    pub async fn reacted_on(
        &self,
        reacter: &dyn Reacter,
        reactable: &dyn Reactable,
    ) -> ServiceResult<Option<Reaction>> {
        self.reacted(reactable, Some(reacter)).await
    }

    /// Whether this reacter reacted on a reactable
    pub async fn is_reacted_on(
        &self,
        reacter: &dyn Reacter,
        reactable: &dyn Reactable,
        reaction_type: Option<&str>,
    ) -> ServiceResult<bool> {
        self.is_react_by(reactable, Some(reacter), reaction_type).await
    }

    /// Ids of reactables of `reactable_type` this reacter reacted on
    #[instrument(skip_all, fields(reacter = %reacter.reacter_ref(), reactable_type = %reactable_type))]
    pub async fn reacted_ids(
        &self,
        reacter: &dyn Reacter,
        reactable_type: &str,
        reaction_type: Option<&str>,
    ) -> ServiceResult<Vec<i64>> {
        let reaction_type = Self::type_filter(reaction_type)?;

        let ids = self
            .ctx
            .reaction_repo()
            .find_reactable_ids(
                &reacter.reacter_ref(),
                reactable_type,
                reaction_type.as_ref().map(ReactionType::as_str),
            )
            .await?;

        Ok(ids)
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn resolve_actor(actor: Option<&dyn Reacter>) -> ServiceResult<&dyn Reacter> {
        actor.ok_or(ServiceError::Domain(DomainError::ActorNotResolvable))
    }

    /// Normalize an optional type filter the way stored labels are normalized
    fn type_filter(reaction_type: Option<&str>) -> ServiceResult<Option<ReactionType>> {
        let filter = reaction_type.map(ReactionType::parse).transpose()?;
        Ok(filter)
    }

    /// Insert a reaction, answering a concurrent duplicate with the winner's row
    async fn store_reaction(&self, new: &NewReaction) -> ServiceResult<Reaction> {
        match self.ctx.reaction_repo().create(new).await {
            Ok(reaction) => {
                info!(
                    reaction_id = reaction.id,
                    reacter = %reaction.reacter,
                    reactable = %reaction.reactable,
                    reaction_type = %new.reaction_type,
                    "Reaction added"
                );
                self.publish_reacted(&reaction).await;
                Ok(reaction)
            }
            Err(DomainError::DuplicateReaction) => {
                warn!(
                    reacter = %new.reacter,
                    reactable = %new.reactable,
                    "Concurrent reaction detected, reading existing row"
                );
                self.find_existing(new).await
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Swap an existing reaction for a new one of another type
    async fn replace_reaction(&self, old: Reaction, new: &NewReaction) -> ServiceResult<Reaction> {
        match self.ctx.reaction_repo().replace(old.id, new).await {
            Ok((reaction, old_removed)) => {
                info!(
                    old_reaction_id = old.id,
                    old_removed = old_removed,
                    reaction_id = reaction.id,
                    reacter = %reaction.reacter,
                    reactable = %reaction.reactable,
                    reaction_type = %new.reaction_type,
                    "Reaction replaced"
                );
                // A concurrent remover already published this delete
                if old_removed {
                    self.publish_deleted(&old).await;
                }
                self.publish_reacted(&reaction).await;
                Ok(reaction)
            }
            Err(DomainError::DuplicateReaction) => {
                // The requested row already exists; the old one must still go
                warn!(
                    old_reaction_id = old.id,
                    reacter = %new.reacter,
                    reactable = %new.reactable,
                    "Concurrent reaction detected during replace"
                );
                self.delete_reaction(old).await?;
                self.find_existing(new).await
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a reaction row; `None` when it was already gone
    async fn delete_reaction(&self, reaction: Reaction) -> ServiceResult<Option<Reaction>> {
        if !self.ctx.reaction_repo().delete(reaction.id).await? {
            debug!(reaction_id = reaction.id, "Reaction already deleted");
            return Ok(None);
        }

        info!(
            reaction_id = reaction.id,
            reacter = %reaction.reacter,
            reactable = %reaction.reactable,
            "Reaction removed"
        );
        self.publish_deleted(&reaction).await;

        Ok(Some(reaction))
    }

    async fn find_existing(&self, new: &NewReaction) -> ServiceResult<Reaction> {
        self.ctx
            .reaction_repo()
            .find(&new.reacter, &new.reactable, Some(new.reaction_type.as_str()))
            .await?
            .ok_or(ServiceError::Domain(DomainError::DuplicateReaction))
    }

    async fn publish_reacted(&self, reaction: &Reaction) {
        let event = ReactionEvent::reacted(
            reaction.reactable.clone(),
            reaction.clone(),
            reaction.reacter.clone(),
        );
        self.ctx.publisher().publish(event).await;
    }

    async fn publish_deleted(&self, reaction: &Reaction) {
        let event = ReactionEvent::deleted(
            reaction.reactable.clone(),
            reaction.clone(),
            reaction.reacter.clone(),
        );
        self.ctx.publisher().publish(event).await;
    }
}
