//! ReactionType - validated reaction label ("like", "love", ...)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Reaction label
///
/// Labels are free-form but must be non-empty after trimming and fit the
/// `type` column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReactionType(String);

impl ReactionType {
    /// Maximum label length in characters
    pub const MAX_LEN: usize = 255;

    /// Parse and validate a reaction label
    pub fn parse(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(DomainError::InvalidReactionType(
                "reaction type must not be empty".to_string(),
            ));
        }

        if value.chars().count() > Self::MAX_LEN {
            return Err(DomainError::InvalidReactionType(format!(
                "reaction type exceeds {} characters",
                Self::MAX_LEN
            )));
        }

        Ok(Self(value.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReactionType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReactionType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for ReactionType {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ReactionType> for String {
    fn from(value: ReactionType) -> Self {
        value.0
    }
}
