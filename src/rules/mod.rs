//! Rule trait for game variants.
//!
//! Variants implement `Rule` to define:
//! - How dice are rolled and consumed
//! - Which moves are legal and how they change the board
//! - Win detection, scoring and turn advancement
//!
//! The controller calls into `Rule` but never interprets variant-specific
//! concepts directly.

pub mod engine;

pub use engine::{GameOf, MatchOf, Rule};
