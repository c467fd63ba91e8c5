//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-process).

use async_trait::async_trait;

use crate::entities::{NewReaction, Reaction, SummaryKey};
use crate::error::DomainError;
use crate::value_objects::EntityRef;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find reaction by primary key
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reaction>>;

    /// Find a reacter's reaction on a reactable, optionally restricted to a type
    async fn find(
        &self,
        reacter: &EntityRef,
        reactable: &EntityRef,
        reaction_type: Option<&str>,
    ) -> RepoResult<Option<Reaction>>;

    /// Get all reactions on a reactable
    async fn find_by_reactable(&self, reactable: &EntityRef) -> RepoResult<Vec<Reaction>>;

    /// Distinct ids of reacters of one type who reacted on a reactable
    async fn find_reacter_ids(
        &self,
        reactable: &EntityRef,
        reacter_type: &str,
        reaction_type: Option<&str>,
    ) -> RepoResult<Vec<i64>>;

    /// Distinct ids of reactables of one type a reacter reacted on
    async fn find_reactable_ids(
        &self,
        reacter: &EntityRef,
        reactable_type: &str,
        reaction_type: Option<&str>,
    ) -> RepoResult<Vec<i64>>;

    /// Check whether a reacter has reacted on a reactable
    async fn exists(
        &self,
        reacter: &EntityRef,
        reactable: &EntityRef,
        reaction_type: Option<&str>,
    ) -> RepoResult<bool>;

    /// Count reactions on a reactable grouped by the given attribute
    async fn count_by(&self, reactable: &EntityRef, key: SummaryKey)
        -> RepoResult<Vec<(String, i64)>>;

    /// Insert a reaction
    ///
    /// Returns `DomainError::DuplicateReaction` when the `react_unique`
    /// constraint rejects the row.
    async fn create(&self, reaction: &NewReaction) -> RepoResult<Reaction>;

    /// Delete a reaction, returning whether a row was removed
    async fn delete(&self, id: i64) -> RepoResult<bool>;

    /// Delete `old_id` and insert `reaction` as one unit
    ///
    /// The flag reports whether `old_id` still existed and was removed; it is
    /// false when a concurrent delete got there first.
    async fn replace(&self, old_id: i64, reaction: &NewReaction)
        -> RepoResult<(Reaction, bool)>;
}
