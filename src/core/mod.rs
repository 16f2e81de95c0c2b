//! Core records: sides and players, games, matches, dice RNG, configuration.
//!
//! These are the model the controller mutates. They carry no game rules;
//! variants plug those in through `rules::Rule`.

pub mod player;
pub mod rng;
pub mod config;
pub mod game;
pub mod match_record;

pub use player::{PieceType, Player, SideMap};
pub use rng::{DiceRng, DiceRngState};
pub use config::{MatchConfig, DEFAULT_MATCH_LENGTH};
pub use game::{Game, Snapshot};
pub use match_record::Match;
