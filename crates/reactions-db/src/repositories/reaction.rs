//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reactions_core::entities::{NewReaction, Reaction, SummaryKey};
use reactions_core::traits::{ReactionRepository, RepoResult};
use reactions_core::value_objects::EntityRef;

use crate::mappers::ReactionInsert;
use crate::models::{ReactionCountModel, ReactionModel};

use super::error::{map_db_error, map_insert_error};

const REACTION_COLUMNS: &str = r#"id, reacter_id, reacter_type, reactable_id, reactable_type,
       "type" AS reaction_type, created_at, updated_at"#;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Expression used to group rows for a summary
    fn group_expr(key: SummaryKey) -> &'static str {
        match key {
            SummaryKey::Type => r#"COALESCE("type", '')"#,
            SummaryKey::ReacterType => "reacter_type",
        }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(&format!(
            "SELECT {REACTION_COLUMNS} FROM reactions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        reacter: &EntityRef,
        reactable: &EntityRef,
        reaction_type: Option<&str>,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(&format!(
            r#"
            SELECT {REACTION_COLUMNS}
            FROM reactions
            WHERE reacter_id = $1 AND reacter_type = $2
              AND reactable_id = $3 AND reactable_type = $4
              AND ($5::VARCHAR IS NULL OR "type" = $5)
            ORDER BY id
            LIMIT 1
            "#
        ))
        .bind(reacter.id)
        .bind(&reacter.entity_type)
        .bind(reactable.id)
        .bind(&reactable.entity_type)
        .bind(reaction_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_by_reactable(&self, reactable: &EntityRef) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(&format!(
            r#"
            SELECT {REACTION_COLUMNS}
            FROM reactions
            WHERE reactable_id = $1 AND reactable_type = $2
            ORDER BY created_at, id
            "#
        ))
        .bind(reactable.id)
        .bind(&reactable.entity_type)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_reacter_ids(
        &self,
        reactable: &EntityRef,
        reacter_type: &str,
        reaction_type: Option<&str>,
    ) -> RepoResult<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT DISTINCT reacter_id
            FROM reactions
            WHERE reactable_id = $1 AND reactable_type = $2
              AND reacter_type = $3
              AND ($4::VARCHAR IS NULL OR "type" = $4)
            ORDER BY reacter_id
            "#,
        )
        .bind(reactable.id)
        .bind(&reactable.entity_type)
        .bind(reacter_type)
        .bind(reaction_type)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn find_reactable_ids(
        &self,
        reacter: &EntityRef,
        reactable_type: &str,
        reaction_type: Option<&str>,
    ) -> RepoResult<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT DISTINCT reactable_id
            FROM reactions
            WHERE reacter_id = $1 AND reacter_type = $2
              AND reactable_type = $3
              AND ($4::VARCHAR IS NULL OR "type" = $4)
            ORDER BY reactable_id
            "#,
        )
        .bind(reacter.id)
        .bind(&reacter.entity_type)
        .bind(reactable_type)
        .bind(reaction_type)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn exists(
        &self,
        reacter: &EntityRef,
        reactable: &EntityRef,
        reaction_type: Option<&str>,
    ) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM reactions
                WHERE reacter_id = $1 AND reacter_type = $2
                  AND reactable_id = $3 AND reactable_type = $4
                  AND ($5::VARCHAR IS NULL OR "type" = $5)
            )
            "#,
        )
        .bind(reacter.id)
        .bind(&reacter.entity_type)
        .bind(reactable.id)
        .bind(&reactable.entity_type)
        .bind(reaction_type)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn count_by(
        &self,
        reactable: &EntityRef,
        key: SummaryKey,
    ) -> RepoResult<Vec<(String, i64)>> {
        let group = Self::group_expr(key);
        let results = sqlx::query_as::<_, ReactionCountModel>(&format!(
            r#"
            SELECT {group} AS group_key, COUNT(*) AS count
            FROM reactions
            WHERE reactable_id = $1 AND reactable_type = $2
            GROUP BY group_key
            ORDER BY count DESC, group_key
            "#
        ))
        .bind(reactable.id)
        .bind(&reactable.entity_type)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(|r| (r.group_key, r.count)).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &NewReaction) -> RepoResult<Reaction> {
        let insert = ReactionInsert::new(reaction);

        let model = sqlx::query_as::<_, ReactionModel>(&format!(
            r#"
            INSERT INTO reactions (reacter_id, reacter_type, reactable_id, reactable_type, "type")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {REACTION_COLUMNS}
            "#
        ))
        .bind(insert.reacter_id)
        .bind(insert.reacter_type)
        .bind(insert.reactable_id)
        .bind(insert.reactable_type)
        .bind(insert.reaction_type)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM reactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn replace(
        &self,
        old_id: i64,
        reaction: &NewReaction,
    ) -> RepoResult<(Reaction, bool)> {
        let insert = ReactionInsert::new(reaction);

        // Delete and insert must land together
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let deleted = sqlx::query("DELETE FROM reactions WHERE id = $1")
            .bind(old_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let model = sqlx::query_as::<_, ReactionModel>(&format!(
            r#"
            INSERT INTO reactions (reacter_id, reacter_type, reactable_id, reactable_type, "type")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {REACTION_COLUMNS}
            "#
        ))
        .bind(insert.reacter_id)
        .bind(insert.reacter_type)
        .bind(insert.reactable_id)
        .bind(insert.reactable_type)
        .bind(insert.reaction_type)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_insert_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok((model.into(), deleted.rows_affected() > 0))
    }
}
