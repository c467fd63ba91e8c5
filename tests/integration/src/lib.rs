//! Integration test utilities for the reactions workspace
//!
//! This crate provides fixtures and helpers for running end-to-end reaction
//! scenarios against the in-process store or a PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
