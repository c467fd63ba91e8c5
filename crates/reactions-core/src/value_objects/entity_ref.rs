//! EntityRef - polymorphic (type tag, id) reference
//!
//! Both sides of a reaction are stored as a morph pair: the owning table's
//! type tag plus the row id. Any domain entity can therefore receive or issue
//! reactions without the reactions table knowing about it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polymorphic reference to a row of some entity type
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// Type tag stored in the `*_type` column (e.g. "users", "posts")
    pub entity_type: String,
    /// Row id stored in the `*_id` column
    pub id: i64,
}

impl EntityRef {
    /// Create a new reference
    pub fn new(entity_type: impl Into<String>, id: i64) -> Self {
        Self {
            entity_type: entity_type.into(),
            id,
        }
    }

    /// Check whether this reference points at an entity of the given type
    #[inline]
    pub fn is_type(&self, entity_type: &str) -> bool {
        self.entity_type == entity_type
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.entity_type, self.id)
    }
}
