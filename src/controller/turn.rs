//! Turn protocol: roll, move, confirm or undo.
//!
//! ```text
//! AwaitingRoll --roll_dice--> Rolled --move_piece--> Rolled
//!      ^                        |  \--undo_moves--> Rolled (board back at roll)
//!      |                        |
//!      +---confirm (no win)-----+---confirm (win)--> GameOver | MatchOver
//! ```
//!
//! The roll snapshots the game. Moves mutate the live board. Undo
//! restores the snapshot as a whole: there is no per-move rollback.
//! Every rejection leaves the match exactly as it was.

use tracing::{debug, info};

use super::reply::TurnEvent;
use crate::core::{DiceRng, Match, Player};
use crate::error::TurnError;
use crate::rules::{GameOf, MatchOf, Rule};

/// Where the current game is in the turn protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// No game has been created yet.
    NoGame,
    /// The turn player has to roll.
    AwaitingRoll,
    /// Dice are rolled; moves can be applied, confirmed or undone.
    Rolled,
    /// The game ended; the match goes on once a new game is created.
    GameOver,
    /// The match ended.
    MatchOver,
}

impl TurnPhase {
    /// Phase of a match record.
    #[must_use]
    pub fn of<S: Clone, D: Clone>(session: &Match<S, D>) -> Self {
        if session.is_over {
            return TurnPhase::MatchOver;
        }
        match &session.current_game {
            None => TurnPhase::NoGame,
            Some(game) if game.is_over => TurnPhase::GameOver,
            Some(game) if game.has_pending_roll() => TurnPhase::Rolled,
            Some(_) => TurnPhase::AwaitingRoll,
        }
    }
}

/// Drives one match's turns against a rule.
///
/// Borrows the rule, the match record and the dice stream for the
/// duration of one or more calls. Every method runs to completion.
pub struct TurnController<'a, R: Rule> {
    rule: &'a R,
    session: &'a mut MatchOf<R>,
    rng: &'a mut DiceRng,
}

impl<'a, R: Rule> TurnController<'a, R> {
    /// Wire a controller to a match.
    pub fn new(rule: &'a R, session: &'a mut MatchOf<R>, rng: &'a mut DiceRng) -> Self {
        Self { rule, session, rng }
    }

    /// Current protocol phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        TurnPhase::of(&*self.session)
    }

    /// Roll the turn's dice and take the turn's rollback snapshot.
    pub fn roll_dice(&mut self) -> Result<R::Dice, TurnError> {
        let game = open_game::<R>(self.session)?;
        if game.has_pending_roll() {
            debug!(turn_player = %game.turn_player, "roll rejected: dice already rolled");
            return Err(TurnError::AlreadyRolled);
        }

        let dice = self.rule.roll_dice(game, self.rng);

        let game = open_game_mut::<R>(self.session)?;
        game.turn_dice = Some(dice.clone());
        game.turn_confirmed = false;
        game.move_sequence = 0;
        game.snapshot_state();

        debug!(turn_player = %game.turn_player, ?dice, "dice rolled");
        Ok(dice)
    }

    /// Apply one move of `piece` by `steps` to the live board.
    ///
    /// Returns the atomic actions that implemented the move.
    pub fn move_piece(&mut self, piece: R::Piece, steps: u8) -> Result<Vec<R::Action>, TurnError> {
        let player = turn_player::<R>(self.session)?;
        let game = rolled_game::<R>(self.session)?;

        if !self.rule.validate_move(game, &player, piece, steps) {
            debug!(player = %player.name, ?piece, steps, "move rejected by rule");
            return Err(TurnError::InvalidMove);
        }

        let actions = self.rule.get_move_actions(&game.state, &player, piece, steps);
        if actions.is_empty() {
            debug!(player = %player.name, ?piece, steps, "move rejected: no actions");
            return Err(TurnError::InvalidMove);
        }

        let game = open_game_mut::<R>(self.session)?;
        self.rule.apply_move_actions(&mut game.state, &actions);
        self.rule.mark_as_played(game, steps);
        game.move_sequence += 1;

        debug!(
            player = %player.name,
            ?piece,
            steps,
            sequence = game.move_sequence,
            "move applied"
        );
        Ok(actions)
    }

    /// Commit the turn: settle a win or pass the turn.
    pub fn confirm_moves(&mut self) -> Result<TurnEvent, TurnError> {
        let player = turn_player::<R>(self.session)?;
        let game = rolled_game::<R>(self.session)?;

        if !self.rule.validate_confirm(game, &player) {
            debug!(player = %player.name, "confirm rejected by rule");
            return Err(TurnError::CannotConfirm);
        }

        let game = open_game_mut::<R>(self.session)?;
        game.turn_confirmed = true;

        if !self.rule.has_won(&game.state, &player) {
            self.rule.next_turn(self.session);
            let next = turn_player::<R>(self.session)?;
            info!(from = %player.name, to = %next.name, "turn passed");
            return Ok(TurnEvent::TurnStart { turn_player: next });
        }

        game.is_over = true;
        let points = self.rule.get_game_score(&game.state, &player);
        self.session.add_score(player.piece_type, points);

        info!(
            winner = %player.name,
            points,
            score = self.session.score[player.piece_type],
            length = self.session.length,
            "game won"
        );

        if self.session.is_over {
            info!(winner = %player.name, "match over");
            Ok(TurnEvent::MatchOver { winner: player })
        } else {
            Ok(TurnEvent::GameOver { winner: player })
        }
    }

    /// Roll the board back to the turn's snapshot.
    ///
    /// The roll itself stays; `move_sequence` is left as is until the
    /// next roll.
    pub fn undo_moves(&mut self) -> Result<(), TurnError> {
        let player = turn_player::<R>(self.session)?;
        let game = rolled_game::<R>(self.session)?;

        if !self.rule.validate_undo(game, &player) {
            debug!(player = %player.name, "undo rejected by rule");
            return Err(TurnError::CannotUndo);
        }

        let game = open_game_mut::<R>(self.session)?;
        if !game.restore_state() {
            return Err(TurnError::CannotUndo);
        }

        debug!(player = %player.name, discarded = game.move_sequence, "moves undone");
        Ok(())
    }
}

/// The current game, if the match and the game are both still running.
fn open_game<R: Rule>(session: &MatchOf<R>) -> Result<&GameOf<R>, TurnError> {
    if session.is_over {
        return Err(TurnError::MatchOver);
    }
    let game = session.current_game.as_ref().ok_or(TurnError::NotReady)?;
    if game.is_over {
        return Err(TurnError::GameOver);
    }
    Ok(game)
}

fn open_game_mut<R: Rule>(session: &mut MatchOf<R>) -> Result<&mut GameOf<R>, TurnError> {
    if session.is_over {
        return Err(TurnError::MatchOver);
    }
    let game = session.current_game.as_mut().ok_or(TurnError::NotReady)?;
    if game.is_over {
        return Err(TurnError::GameOver);
    }
    Ok(game)
}

/// The current game, if it has an unconfirmed roll.
fn rolled_game<R: Rule>(session: &MatchOf<R>) -> Result<&GameOf<R>, TurnError> {
    let game = open_game::<R>(session)?;
    if !game.has_pending_roll() {
        return Err(TurnError::DiceNotRolled);
    }
    Ok(game)
}

fn turn_player<R: Rule>(session: &MatchOf<R>) -> Result<Player, TurnError> {
    session.turn_player().cloned().ok_or(TurnError::NotReady)
}
