//! Reaction capabilities for domain types
//!
//! Any type implementing [`Reactable`](reactions_core::Reactable) or
//! [`Reacter`](reactions_core::Reacter) gets the matching extension trait
//! for free, so reaction operations read as methods on the entity itself:
//!
//! ```rust,ignore
//! use reactions_service::{ReactableExt, ReacterExt, ReactionService};
//!
//! let service = ReactionService::new(&ctx);
//! user.react_to(&service, &post, "like").await?;
//! let summary = post.reaction_summary(&service, SummaryKey::Type).await?;
//! ```

mod reactable;
mod reacter;

pub use reactable::ReactableExt;
pub use reacter::ReacterExt;
