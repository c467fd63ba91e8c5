//! Event publication
//!
//! In-process delivery of reaction events to subscribers.

mod broadcast;

pub use broadcast::BroadcastPublisher;
