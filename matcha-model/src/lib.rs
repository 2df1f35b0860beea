//! Core data model definitions shared across Matcha Analytics crates.

pub mod interaction;
pub mod present;
pub mod user;

pub use interaction::{InteractionCounts, InteractionType, UserStats};
pub use user::{User, UserId};
