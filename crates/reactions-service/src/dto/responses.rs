//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Polymorphic reference as seen by API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRefResponse {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub id: String,
}

/// Single reaction row
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: String,
    pub reacter: EntityRefResponse,
    pub reactable: EntityRefResponse,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub reaction_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-type count on one reactable, with the viewer's own state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCountResponse {
    #[serde(rename = "type")]
    pub reaction_type: String,
    pub count: i64,
    pub me: bool,
}
