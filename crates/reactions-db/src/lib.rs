//! # reactions-db
//!
//! Storage layer implementing `ReactionRepository`.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations (PostgreSQL via SQLx)
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - `PgReactionRepository` and the in-process `MemoryReactionRepository`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reactions_db::{create_pool, run_migrations, DatabaseConfig, PgReactionRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let reaction_repo = PgReactionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::{migrations_dir, run_migrations, run_migrations_from};
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{MemoryReactionRepository, PgReactionRepository};
