//! One game within a match, and its turn snapshot.
//!
//! ## Snapshot
//!
//! `snapshot_state` copies the live `state` and `turn_dice` by value.
//! `restore_state` replaces both wholesale. Board types built on `im`
//! persistent structures make both O(1) through structural sharing.
//!
//! Exactly one snapshot is live per turn. Taking a new one supersedes the
//! old one, and starting the next turn drops it.

use serde::{Deserialize, Serialize};

use super::player::PieceType;

/// Point-in-time copy of the turn's mutable data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<S, D> {
    pub state: S,
    pub turn_dice: Option<D>,
}

/// A single game: board state plus per-turn bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game<S, D> {
    /// Live board state, mutated by applied moves.
    pub state: S,

    /// Side whose turn it is. Resolves to one of the match's players.
    pub turn_player: PieceType,

    /// Result of this turn's roll, including the rule's remaining-moves
    /// budget. `None` until the turn rolls.
    pub turn_dice: Option<D>,

    /// Set when the turn player confirmed their moves.
    pub turn_confirmed: bool,

    /// Moves applied since the turn's roll.
    pub move_sequence: u32,

    pub has_started: bool,

    pub is_over: bool,

    #[serde(skip, default = "Option::default")]
    snapshot: Option<Snapshot<S, D>>,
}

impl<S: Clone, D: Clone> Game<S, D> {
    /// Create a game that has not started yet, with `first` to move.
    #[must_use]
    pub fn new(state: S, first: PieceType) -> Self {
        Self {
            state,
            turn_player: first,
            turn_dice: None,
            turn_confirmed: false,
            move_sequence: 0,
            has_started: false,
            is_over: false,
            snapshot: None,
        }
    }

    /// True between a roll and the confirmation of that turn.
    #[must_use]
    pub fn has_pending_roll(&self) -> bool {
        self.turn_dice.is_some() && !self.turn_confirmed
    }

    /// Record the turn's rollback point, replacing any earlier one.
    pub fn snapshot_state(&mut self) {
        self.snapshot = Some(Snapshot {
            state: self.state.clone(),
            turn_dice: self.turn_dice.clone(),
        });
    }

    /// Put the live state back to the rollback point.
    ///
    /// The snapshot stays in place, so the turn can be rolled back again
    /// after further moves. Returns false when no snapshot exists.
    pub fn restore_state(&mut self) -> bool {
        match &self.snapshot {
            Some(snapshot) => {
                self.state = snapshot.state.clone();
                self.turn_dice = snapshot.turn_dice.clone();
                true
            }
            None => false,
        }
    }

    /// The live rollback point, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot<S, D>> {
        self.snapshot.as_ref()
    }

    /// Hand the turn to `player` and clear per-turn data.
    pub fn start_turn(&mut self, player: PieceType) {
        self.turn_player = player;
        self.turn_dice = None;
        self.turn_confirmed = false;
        self.move_sequence = 0;
        self.snapshot = None;
    }
}
