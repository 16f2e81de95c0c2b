//! # solo-match
//!
//! Turn controller for solo backgammon-family matches, where one local
//! player runs both seats.
//!
//! ## Design Principles
//!
//! 1. **Rule-Agnostic**: Board, dice, pieces and actions belong to the
//!    variant. The controller only sequences calls into `Rule`.
//!
//! 2. **Turns Are Transactions**: A roll snapshots the game. Moves mutate
//!    the live board. Confirm commits, undo restores the snapshot as a
//!    whole.
//!
//! 3. **Rejections Are Values**: Every refused request comes back as a
//!    reply record with an error message, and leaves the match untouched.
//!
//! ## Modules
//!
//! - `core`: Sides, players, games, matches, dice RNG, configuration
//! - `rules`: `Rule` trait for game variants
//! - `controller`: `TurnController`, `SoloGameManager`, reply records
//! - `games`: Reference variants (casual backgammon)
//! - `error`: `TurnError` and `ConfigError`

pub mod core;
pub mod rules;
pub mod controller;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DiceRngState, Game, Match, MatchConfig, PieceType, Player, SideMap, Snapshot,
};

pub use crate::rules::{GameOf, MatchOf, Rule};

pub use crate::controller::{
    ConfirmEvent, MoveReply, RollReply, SoloGameManager, TurnController, TurnEvent, TurnPhase,
    UndoReply,
};

pub use crate::error::{ConfigError, TurnError};
