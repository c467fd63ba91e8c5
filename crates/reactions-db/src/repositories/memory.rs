//! In-process implementation of ReactionRepository
//!
//! Keeps rows in a mutex-guarded map and enforces the same `react_unique`
//! constraint as the PostgreSQL schema. Useful for embedding and for tests
//! that should not need a database.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::instrument;

use reactions_core::entities::{NewReaction, Reaction, SummaryKey};
use reactions_core::error::DomainError;
use reactions_core::traits::{ReactionRepository, RepoResult};
use reactions_core::value_objects::EntityRef;

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    rows: BTreeMap<i64, Reaction>,
}

impl MemoryState {
    fn violates_unique(&self, new: &NewReaction) -> bool {
        self.rows.values().any(|r| {
            r.reacter == new.reacter
                && r.reactable == new.reactable
                && r.is_type(new.reaction_type.as_str())
        })
    }

    fn insert(&mut self, new: &NewReaction) -> RepoResult<Reaction> {
        if self.violates_unique(new) {
            return Err(DomainError::DuplicateReaction);
        }

        self.next_id += 1;
        let now = Utc::now();
        let reaction = Reaction {
            id: self.next_id,
            reacter: new.reacter.clone(),
            reactable: new.reactable.clone(),
            reaction_type: Some(new.reaction_type.as_str().to_string()),
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(reaction.id, reaction.clone());

        Ok(reaction)
    }

    fn matching<'a>(
        &'a self,
        reacter: &'a EntityRef,
        reactable: &'a EntityRef,
        reaction_type: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Reaction> + 'a {
        self.rows.values().filter(move |r| {
            r.reacter == *reacter
                && r.reactable == *reactable
                && reaction_type.is_none_or(|t| r.is_type(t))
        })
    }
}

/// In-process reaction store
#[derive(Debug, Default)]
pub struct MemoryReactionRepository {
    state: Mutex<MemoryState>,
}

impl MemoryReactionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.state.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reaction>> {
        Ok(self.state.lock().rows.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        reacter: &EntityRef,
        reactable: &EntityRef,
        reaction_type: Option<&str>,
    ) -> RepoResult<Option<Reaction>> {
        let state = self.state.lock();
        let found = state.matching(reacter, reactable, reaction_type).next().cloned();
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn find_by_reactable(&self, reactable: &EntityRef) -> RepoResult<Vec<Reaction>> {
        let state = self.state.lock();
        Ok(state
            .rows
            .values()
            .filter(|r| r.reactable == *reactable)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_reacter_ids(
        &self,
        reactable: &EntityRef,
        reacter_type: &str,
        reaction_type: Option<&str>,
    ) -> RepoResult<Vec<i64>> {
        let state = self.state.lock();
        let ids: BTreeSet<i64> = state
            .rows
            .values()
            .filter(|r| r.reactable == *reactable && r.reacter.is_type(reacter_type))
            .filter(|r| reaction_type.is_none_or(|t| r.is_type(t)))
            .map(|r| r.reacter.id)
            .collect();
        Ok(ids.into_iter().collect())
    }

    #[instrument(skip(self))]
    async fn find_reactable_ids(
        &self,
        reacter: &EntityRef,
        reactable_type: &str,
        reaction_type: Option<&str>,
    ) -> RepoResult<Vec<i64>> {
        let state = self.state.lock();
        let ids: BTreeSet<i64> = state
            .rows
            .values()
            .filter(|r| r.reacter == *reacter && r.reactable.is_type(reactable_type))
            .filter(|r| reaction_type.is_none_or(|t| r.is_type(t)))
            .map(|r| r.reactable.id)
            .collect();
        Ok(ids.into_iter().collect())
    }

    #[instrument(skip(self))]
    async fn exists(
        &self,
        reacter: &EntityRef,
        reactable: &EntityRef,
        reaction_type: Option<&str>,
    ) -> RepoResult<bool> {
        let state = self.state.lock();
        let exists = state.matching(reacter, reactable, reaction_type).next().is_some();
        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn count_by(
        &self,
        reactable: &EntityRef,
        key: SummaryKey,
    ) -> RepoResult<Vec<(String, i64)>> {
        let state = self.state.lock();
        let mut counts: HashMap<&str, i64> = HashMap::new();
        for reaction in state.rows.values().filter(|r| r.reactable == *reactable) {
            *counts.entry(key.value_of(reaction)).or_default() += 1;
        }

        let mut counts: Vec<(String, i64)> = counts
            .into_iter()
            .map(|(group, count)| (group.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(counts)
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &NewReaction) -> RepoResult<Reaction> {
        self.state.lock().insert(reaction)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.state.lock().rows.remove(&id).is_some())
    }

    #[instrument(skip(self))]
    async fn replace(
        &self,
        old_id: i64,
        reaction: &NewReaction,
    ) -> RepoResult<(Reaction, bool)> {
        let mut state = self.state.lock();
        let old = state.rows.remove(&old_id);

        match state.insert(reaction) {
            Ok(created) => Ok((created, old.is_some())),
            Err(e) => {
                // Roll back the delete
                if let Some(old) = old {
                    state.rows.insert(old.id, old);
                }
                Err(e)
            }
        }
    }
}
