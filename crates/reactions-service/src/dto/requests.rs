//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use reactions_core::ReactionType;

use crate::services::ServiceResult;

// ============================================================================
// Reaction Requests
// ============================================================================

/// React / toggle request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactRequest {
    /// Reaction label ("like", "love", ...)
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 255, message = "Reaction type must be 1-255 characters"))]
    pub reaction_type: String,
}

impl ReactRequest {
    pub fn new(reaction_type: impl Into<String>) -> Self {
        Self {
            reaction_type: reaction_type.into(),
        }
    }

    /// Validate the request and return the normalized reaction type
    pub fn validated_type(&self) -> ServiceResult<ReactionType> {
        self.validate()?;
        Ok(ReactionType::parse(&self.reaction_type)?)
    }
}

/// Filters for reacter / reactable id queries
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReactionFilter {
    /// Restrict to one reaction label
    #[serde(default, rename = "type")]
    #[validate(length(min = 1, max = 255, message = "Reaction type must be 1-255 characters"))]
    pub reaction_type: Option<String>,

    /// Entity type tag of the other side of the relation
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Entity type must be 1-255 characters"))]
    pub entity_type: Option<String>,
}
