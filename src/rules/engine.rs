//! Rule trait for game variants.
//!
//! A variant supplies its own board state, dice, piece addressing and
//! atomic board actions. The controller calls into `Rule` at each step of
//! the turn protocol but never interprets those types itself.

use std::fmt::Debug;

use crate::core::config::DEFAULT_MATCH_LENGTH;
use crate::core::game::Game;
use crate::core::match_record::Match;
use crate::core::player::Player;
use crate::core::rng::DiceRng;

/// Game record type for a rule.
pub type GameOf<R> = Game<<R as Rule>::State, <R as Rule>::Dice>;

/// Match record type for a rule.
pub type MatchOf<R> = Match<<R as Rule>::State, <R as Rule>::Dice>;

/// Movement, scoring and turn-advancement logic of one game variant.
///
/// ## Implementation Notes
///
/// - `Dice` holds both the rolled faces and whatever budget of remaining
///   moves `mark_as_played` consumes, so an undo restores the budget too.
/// - `get_move_actions`: return empty if the move has no decomposition;
///   the controller treats that as an invalid move.
/// - `apply_move_actions` and `mark_as_played` are only called after the
///   move validated and decomposed.
/// - Methods may panic on inputs that break these contracts; the
///   controller does not catch it.
pub trait Rule {
    /// Board position.
    type State: Clone + Debug;
    /// A turn's roll plus its remaining-moves budget.
    type Dice: Clone + Debug;
    /// Addresses the piece being moved.
    type Piece: Copy + Debug;
    /// One atomic board change.
    type Action: Clone + Debug;

    /// Opening position of a new game.
    fn initial_state(&self) -> Self::State;

    /// Points needed to win a match unless configured otherwise.
    fn default_match_length(&self) -> u32 {
        DEFAULT_MATCH_LENGTH
    }

    /// Roll the dice for the current turn of `game`.
    fn roll_dice(&self, game: &GameOf<Self>, rng: &mut DiceRng) -> Self::Dice;

    /// Check whether `player` may move `piece` by `steps` right now.
    fn validate_move(
        &self,
        game: &GameOf<Self>,
        player: &Player,
        piece: Self::Piece,
        steps: u8,
    ) -> bool;

    /// Decompose a move into atomic board actions.
    fn get_move_actions(
        &self,
        state: &Self::State,
        player: &Player,
        piece: Self::Piece,
        steps: u8,
    ) -> Vec<Self::Action>;

    /// Apply actions to the board in order.
    fn apply_move_actions(&self, state: &mut Self::State, actions: &[Self::Action]);

    /// Consume `steps` from the turn's remaining-moves budget.
    fn mark_as_played(&self, game: &mut GameOf<Self>, steps: u8);

    /// Check whether the turn may be committed.
    fn validate_confirm(&self, game: &GameOf<Self>, player: &Player) -> bool;

    /// Check whether `player` has won on this board.
    fn has_won(&self, state: &Self::State, player: &Player) -> bool;

    /// Points awarded to `player` for the won game.
    fn get_game_score(&self, state: &Self::State, player: &Player) -> u32;

    /// Pass the turn to the other side and reset per-turn data.
    fn next_turn(&self, session: &mut MatchOf<Self>) {
        if let Some(game) = session.current_game.as_mut() {
            let next = game.turn_player.other();
            game.start_turn(next);
        }
    }

    /// Check whether the turn may be rolled back to its snapshot.
    fn validate_undo(&self, game: &GameOf<Self>, player: &Player) -> bool;
}
