//! Traits (ports) - capabilities, data access, and event publication

mod capabilities;
mod publisher;
mod repositories;

pub use capabilities::{EntityLoader, Reactable, Reacter};
pub use publisher::EventPublisher;
pub use repositories::{ReactionRepository, RepoResult};
