//! # reactions-core
//!
//! Domain layer containing the reaction entity, polymorphic references,
//! capability traits, repository ports, and reaction events.
//! This crate has zero dependencies on infrastructure (database, runtime, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewReaction, Reaction, SummaryKey};
pub use error::DomainError;
pub use events::{ReactionEvent, ReactionPayload};
pub use traits::{
    EntityLoader, EventPublisher, Reactable, ReactionRepository, Reacter, RepoResult,
};
pub use value_objects::{EntityRef, ReactionType};
