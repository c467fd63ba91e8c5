//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reaction not found: {0}")]
    ReactionNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid reaction type: {0}")]
    InvalidReactionType(String),

    // =========================================================================
    // Actor Errors
    // =========================================================================
    #[error("Reacter not defined: an actor is required for this operation")]
    ActorNotResolvable,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    DuplicateReaction,

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",
            Self::InvalidReactionType(_) => "INVALID_REACTION_TYPE",
            Self::ActorNotResolvable => "INVALID_REACTION_USER",
            Self::DuplicateReaction => "REACTION_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReactionNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidReactionType(_))
    }

    /// Check if this is an authorization error (no usable actor)
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::ActorNotResolvable)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateReaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::ActorNotResolvable.code(), "INVALID_REACTION_USER");
        assert_eq!(DomainError::DuplicateReaction.code(), "REACTION_ALREADY_EXISTS");
        assert_eq!(DomainError::ReactionNotFound(1).code(), "UNKNOWN_REACTION");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::ReactionNotFound(1).is_not_found());
        assert!(DomainError::DuplicateReaction.is_conflict());
        assert!(DomainError::ActorNotResolvable.is_authorization());
        assert!(DomainError::InvalidReactionType("x".to_string()).is_validation());
        assert!(!DomainError::DatabaseError("x".to_string()).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ReactionNotFound(123);
        assert_eq!(err.to_string(), "Reaction not found: 123");
    }
}
