//! # reactions-service
//!
//! Application layer containing the reaction service, capability extension
//! traits, event publication, and DTOs.

pub mod capabilities;
pub mod dto;
pub mod events;
pub mod services;

pub use capabilities::{ReactableExt, ReacterExt};
pub use events::BroadcastPublisher;
pub use services::{
    ReactionService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
