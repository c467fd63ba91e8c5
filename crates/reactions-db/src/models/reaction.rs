//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
///
/// The `type` column is selected as `reaction_type`.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub reacter_id: i64,
    pub reacter_type: String,
    pub reactable_id: i64,
    pub reactable_type: String,
    pub reaction_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated reaction count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub group_key: String,
    pub count: i64,
}
