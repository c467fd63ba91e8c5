//! Repository implementations
//!
//! PostgreSQL and in-process implementations of the repository traits
//! defined in reactions-core.

mod error;
mod memory;
mod reaction;

pub use memory::MemoryReactionRepository;
pub use reaction::PgReactionRepository;
