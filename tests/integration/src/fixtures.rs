//! Test fixtures and data generators
//!
//! Sample domain types that opt into reactions, and a loader for them.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use reactions_core::{EntityLoader, EntityRef, Reactable, Reacter, RepoResult};
use serde::Serialize;

/// Counter for unique test ids
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Get a unique id for test data
///
/// Offset by the process id so runs against a shared database do not collide.
pub fn unique_id() -> i64 {
    i64::from(std::process::id()) * 1_000_000 + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user: reacts to posts and comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

impl User {
    pub fn unique() -> Self {
        let id = unique_id();
        Self {
            id,
            username: format!("testuser{id}"),
        }
    }
}

impl Reacter for User {
    fn reacter_ref(&self) -> EntityRef {
        EntityRef::new("users", self.id)
    }
}

/// A team: a second reacter type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
}

impl Team {
    pub fn unique() -> Self {
        Self { id: unique_id() }
    }
}

impl Reacter for Team {
    fn reacter_ref(&self) -> EntityRef {
        EntityRef::new("teams", self.id)
    }
}

/// A post: receives reactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
}

impl Post {
    pub fn unique() -> Self {
        let id = unique_id();
        Self {
            id,
            title: format!("Post {id}"),
        }
    }
}

impl Reactable for Post {
    fn reactable_ref(&self) -> EntityRef {
        EntityRef::new("posts", self.id)
    }
}

/// A comment: receives reactions and can itself react
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
}

impl Comment {
    pub fn unique() -> Self {
        Self { id: unique_id() }
    }
}

impl Reactable for Comment {
    fn reactable_ref(&self) -> EntityRef {
        EntityRef::new("comments", self.id)
    }
}

impl Reacter for Comment {
    fn reacter_ref(&self) -> EntityRef {
        EntityRef::new("comments", self.id)
    }
}

/// Loads users from a fixed list
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().collect(),
        }
    }
}

#[async_trait]
impl EntityLoader<User> for UserDirectory {
    fn entity_type(&self) -> &str {
        "users"
    }

    async fn find_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}
