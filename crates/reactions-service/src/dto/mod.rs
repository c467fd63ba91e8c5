//! Data transfer objects for requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{ReactRequest, ReactionFilter};
pub use responses::{EntityRefResponse, ReactionCountResponse, ReactionResponse};
