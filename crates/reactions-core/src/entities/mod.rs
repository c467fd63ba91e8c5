//! Domain entities - core business objects

mod reaction;

pub use reaction::{NewReaction, Reaction, SummaryKey};
