//! Reply records handed to the messaging layer.
//!
//! Each turn operation has one reply type. They serialize to the
//! camelCase shape frontends expect (`result`, `errorMessage`,
//! `moveActionList`, `event`). Replies are built from the controller's
//! `Result`s, so the error text is always the `TurnError` message.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::error::TurnError;

/// Reply to a dice roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollReply<D> {
    pub result: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice: Option<D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<D> From<Result<D, TurnError>> for RollReply<D> {
    fn from(outcome: Result<D, TurnError>) -> Self {
        match outcome {
            Ok(dice) => Self {
                result: true,
                dice: Some(dice),
                error_message: None,
            },
            Err(err) => Self {
                result: false,
                dice: None,
                error_message: Some(err.to_string()),
            },
        }
    }
}

/// Reply to a single piece move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveReply<A> {
    pub result: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_action_list: Option<Vec<A>>,
}

impl<A> From<Result<Vec<A>, TurnError>> for MoveReply<A> {
    fn from(outcome: Result<Vec<A>, TurnError>) -> Self {
        match outcome {
            Ok(actions) => Self {
                result: true,
                error_message: None,
                move_action_list: Some(actions),
            },
            Err(err) => Self {
                result: false,
                error_message: Some(err.to_string()),
                move_action_list: None,
            },
        }
    }
}

/// Reply to an undo request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoReply {
    pub result: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<Result<(), TurnError>> for UndoReply {
    fn from(outcome: Result<(), TurnError>) -> Self {
        Self {
            result: outcome.is_ok(),
            error_message: outcome.err().map(|err| err.to_string()),
        }
    }
}

/// What a successful confirmation led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// The turn player won the game and the match.
    MatchOver { winner: Player },
    /// The turn player won the game; the match goes on.
    GameOver { winner: Player },
    /// No winner yet; the other side is up.
    TurnStart { turn_player: Player },
}

/// Reply to a confirmation, tagged by `event`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum ConfirmEvent {
    #[serde(rename = "error")]
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
    #[serde(rename = "MATCH_OVER")]
    MatchOver { winner: Player },
    #[serde(rename = "GAME_OVER")]
    GameOver { winner: Player },
    #[serde(rename = "TURN_START")]
    TurnStart {
        #[serde(rename = "turnPlayer")]
        turn_player: Player,
    },
}

impl From<Result<TurnEvent, TurnError>> for ConfirmEvent {
    fn from(outcome: Result<TurnEvent, TurnError>) -> Self {
        match outcome {
            Ok(TurnEvent::MatchOver { winner }) => ConfirmEvent::MatchOver { winner },
            Ok(TurnEvent::GameOver { winner }) => ConfirmEvent::GameOver { winner },
            Ok(TurnEvent::TurnStart { turn_player }) => ConfirmEvent::TurnStart { turn_player },
            Err(err) => ConfirmEvent::Error {
                error_message: err.to_string(),
            },
        }
    }
}
