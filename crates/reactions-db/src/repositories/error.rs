//! Error handling utilities for repositories

use reactions_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map an insert failure, turning `react_unique` violations into a conflict
pub fn map_insert_error(e: SqlxError) -> DomainError {
    map_unique_violation(e, || DomainError::DuplicateReaction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_wrapped() {
        let err = map_insert_error(SqlxError::RowNotFound);
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
