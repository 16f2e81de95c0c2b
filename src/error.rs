//! Error types.
//!
//! Every turn rejection is an ordinary outcome of player input. The
//! `Display` text of a `TurnError` is the exact message put on the wire.

use thiserror::Error;

/// Why a turn operation was rejected. State is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The rule rejected the move, or it decomposed into no actions.
    #[error("Invalid move.")]
    InvalidMove,

    /// The rule does not accept the turn as complete.
    #[error("Cannot confirm moves.")]
    CannotConfirm,

    /// The rule does not allow rolling the turn back.
    #[error("Cannot undo moves.")]
    CannotUndo,

    /// A roll is already pending for this turn.
    #[error("Dice already rolled.")]
    AlreadyRolled,

    /// The turn has no roll yet.
    #[error("Dice not rolled.")]
    DiceNotRolled,

    /// The current game has ended.
    #[error("Game is over.")]
    GameOver,

    /// The match has ended.
    #[error("Match is over.")]
    MatchOver,

    /// A new game was requested while the current one is still running.
    #[error("Game in progress.")]
    GameInProgress,

    /// The match has no current game or an empty seat.
    #[error("Match is not set up.")]
    NotReady,
}

/// Invalid match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Configuration error: match length must be at least 1")]
    ZeroLength,

    #[error("Configuration error: player names must not be empty")]
    EmptyPlayerName,
}
