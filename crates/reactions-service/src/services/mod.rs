//! Business logic services
//!
//! This module contains the service layer that decides reaction state
//! transitions and orchestrates repository calls and event publication.

pub mod context;
pub mod error;
pub mod reaction;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;
