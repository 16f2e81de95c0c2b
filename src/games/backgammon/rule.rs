//! Casual backgammon rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Checker, Target, CHECKERS_PER_SIDE};
use crate::core::{DiceRng, PieceType, Player, DEFAULT_MATCH_LENGTH};
use crate::rules::{GameOf, Rule};

/// Faces on a backgammon die.
pub const DIE_SIDES: u8 = 6;

/// A turn's roll and the moves still to play from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dice {
    /// The two rolled faces.
    pub values: SmallVec<[u8; 2]>,
    /// Steps not yet played. Doubles give four.
    pub moves_left: SmallVec<[u8; 4]>,
}

impl Dice {
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        let mut moves_left = SmallVec::new();
        moves_left.push(first);
        moves_left.push(second);
        if first == second {
            moves_left.push(first);
            moves_left.push(first);
        }
        Self {
            values: SmallVec::from_slice(&[first, second]),
            moves_left,
        }
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.values[0] == self.values[1]
    }

    /// Is a move of `steps` still available?
    #[must_use]
    pub fn has(&self, steps: u8) -> bool {
        self.moves_left.contains(&steps)
    }

    /// Spend one move of `steps`. Returns false if none was left.
    pub fn consume(&mut self, steps: u8) -> bool {
        match self.moves_left.iter().position(|&left| left == steps) {
            Some(index) => {
                self.moves_left.remove(index);
                true
            }
            None => false,
        }
    }
}

/// One atomic board change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveAction {
    /// A lone checker of `side` on `point` is sent to the bar.
    Hit { side: PieceType, point: u8 },
    /// A checker of `side` moves from `from` to `to`.
    Move { side: PieceType, from: Checker, to: u8 },
    /// A checker of `side` is borne off from `from`.
    BearOff { side: PieceType, from: u8 },
}

/// Standard backgammon without the doubling cube.
///
/// Legal-move checking is per checker: the rule does not force playing
/// both dice or the larger die when only one can be played. A turn may be
/// confirmed once every die is played or none of the remaining dice has a
/// legal move.
#[derive(Clone, Debug)]
pub struct Backgammon {
    match_length: u32,
}

impl Default for Backgammon {
    fn default() -> Self {
        Self {
            match_length: DEFAULT_MATCH_LENGTH,
        }
    }
}

impl Backgammon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different default match length.
    #[must_use]
    pub fn with_match_length(mut self, length: u32) -> Self {
        self.match_length = length;
        self
    }

    fn apply_action(board: &mut Board, action: &MoveAction) {
        match *action {
            MoveAction::Hit { side, point } => {
                board.lift(side, point);
                board.bar[side] += 1;
            }
            MoveAction::Move { side, from, to } => {
                match from {
                    Checker::Bar => board.bar[side] -= 1,
                    Checker::Point(point) => board.lift(side, point),
                }
                board.drop_on(side, to);
            }
            MoveAction::BearOff { side, from } => {
                board.lift(side, from);
                board.off[side] += 1;
            }
        }
    }
}

impl Rule for Backgammon {
    type State = Board;
    type Dice = Dice;
    type Piece = Checker;
    type Action = MoveAction;

    fn initial_state(&self) -> Board {
        Board::opening()
    }

    fn default_match_length(&self) -> u32 {
        self.match_length
    }

    fn roll_dice(&self, _game: &GameOf<Self>, rng: &mut DiceRng) -> Dice {
        Dice::new(rng.roll_die(DIE_SIDES), rng.roll_die(DIE_SIDES))
    }

    fn validate_move(&self, game: &GameOf<Self>, player: &Player, piece: Checker, steps: u8) -> bool {
        let Some(dice) = &game.turn_dice else {
            return false;
        };
        !game.turn_confirmed
            && game.turn_player == player.piece_type
            && dice.has(steps)
            && game.state.can_move(player.piece_type, piece, steps)
    }

    fn get_move_actions(
        &self,
        state: &Board,
        player: &Player,
        piece: Checker,
        steps: u8,
    ) -> Vec<MoveAction> {
        let side = player.piece_type;
        if !state.can_move(side, piece, steps) {
            return Vec::new();
        }

        match Board::target(side, piece, steps) {
            Some(Target::Point(to)) => {
                let mut actions = Vec::with_capacity(2);
                if state.count(side.other(), to) == 1 {
                    actions.push(MoveAction::Hit {
                        side: side.other(),
                        point: to,
                    });
                }
                actions.push(MoveAction::Move { side, from: piece, to });
                actions
            }
            Some(Target::Off) => match piece {
                Checker::Point(from) => vec![MoveAction::BearOff { side, from }],
                Checker::Bar => Vec::new(),
            },
            None => Vec::new(),
        }
    }

    fn apply_move_actions(&self, state: &mut Board, actions: &[MoveAction]) {
        for action in actions {
            Self::apply_action(state, action);
        }
    }

    fn mark_as_played(&self, game: &mut GameOf<Self>, steps: u8) {
        if let Some(dice) = game.turn_dice.as_mut() {
            dice.consume(steps);
        }
    }

    fn validate_confirm(&self, game: &GameOf<Self>, player: &Player) -> bool {
        let Some(dice) = &game.turn_dice else {
            return false;
        };
        if game.turn_confirmed || game.turn_player != player.piece_type {
            return false;
        }
        dice.moves_left.is_empty()
            || game
                .state
                .legal_moves(player.piece_type, &dice.moves_left)
                .is_empty()
    }

    fn has_won(&self, state: &Board, player: &Player) -> bool {
        state.off[player.piece_type] == CHECKERS_PER_SIDE
    }

    fn get_game_score(&self, state: &Board, player: &Player) -> u32 {
        let loser = player.piece_type.other();
        if state.off[loser] > 0 {
            return 1;
        }
        let trapped = state.bar[loser] > 0
            || (0..super::board::POINTS)
                .any(|point| state.count(loser, point) > 0 && Board::is_home(player.piece_type, point));
        if trapped {
            3
        } else {
            2
        }
    }

    /// Undo needs a live move: the board or dice differ from the roll.
    fn validate_undo(&self, game: &GameOf<Self>, player: &Player) -> bool {
        game.has_pending_roll()
            && game.turn_player == player.piece_type
            && game.snapshot().is_some_and(|snapshot| {
                snapshot.state != game.state || snapshot.turn_dice != game.turn_dice
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;

    fn white() -> Player {
        Player::new("Player 1", PieceType::White)
    }

    fn rolled(board: Board, first: u8, second: u8) -> GameOf<Backgammon> {
        let mut game = Game::new(board, PieceType::White);
        game.has_started = true;
        game.turn_dice = Some(Dice::new(first, second));
        game
    }

    #[test]
    fn test_dice_doubles() {
        let dice = Dice::new(4, 4);
        assert!(dice.is_double());
        assert_eq!(dice.moves_left.as_slice(), &[4, 4, 4, 4]);

        let dice = Dice::new(2, 5);
        assert!(!dice.is_double());
        assert_eq!(dice.moves_left.as_slice(), &[2, 5]);
    }

    #[test]
    fn test_dice_consume() {
        let mut dice = Dice::new(3, 3);
        assert!(dice.consume(3));
        assert_eq!(dice.moves_left.len(), 3);
        assert!(!dice.consume(5));
    }

    #[test]
    fn test_roll_dice_in_range() {
        let rule = Backgammon::new();
        let game = rolled(Board::opening(), 1, 2);
        let mut rng = DiceRng::new(5);

        for _ in 0..50 {
            let dice = rule.roll_dice(&game, &mut rng);
            assert!(dice.values.iter().all(|v| (1..=DIE_SIDES).contains(v)));
        }
    }

    #[test]
    fn test_validate_move_needs_matching_die() {
        let rule = Backgammon::new();
        let game = rolled(Board::opening(), 3, 1);

        assert!(rule.validate_move(&game, &white(), Checker::Point(7), 3));
        assert!(!rule.validate_move(&game, &white(), Checker::Point(7), 4));
    }

    #[test]
    fn test_validate_move_wrong_side() {
        let rule = Backgammon::new();
        let game = rolled(Board::opening(), 3, 1);
        let black = Player::new("Player 2", PieceType::Black);

        assert!(!rule.validate_move(&game, &black, Checker::Point(0), 3));
    }

    #[test]
    fn test_hit_actions() {
        let rule = Backgammon::new();
        let mut board = Board::opening();
        board.place(PieceType::Black, 9, 1);
        board.lift(PieceType::Black, 11);

        let actions = rule.get_move_actions(&board, &white(), Checker::Point(12), 3);
        assert_eq!(
            actions,
            vec![
                MoveAction::Hit { side: PieceType::Black, point: 9 },
                MoveAction::Move { side: PieceType::White, from: Checker::Point(12), to: 9 },
            ]
        );

        rule.apply_move_actions(&mut board, &actions);
        assert_eq!(board.bar[PieceType::Black], 1);
        assert_eq!(board.count(PieceType::White, 9), 1);
        assert_eq!(board.count(PieceType::White, 12), 4);
    }

    #[test]
    fn test_no_actions_for_blocked_move() {
        let rule = Backgammon::new();
        let actions = rule.get_move_actions(&Board::opening(), &white(), Checker::Point(23), 5);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_bear_off_action() {
        let rule = Backgammon::new();
        let mut board = Board::empty();
        board.place(PieceType::White, 0, 15);

        let actions = rule.get_move_actions(&board, &white(), Checker::Point(0), 1);
        assert_eq!(actions, vec![MoveAction::BearOff { side: PieceType::White, from: 0 }]);

        rule.apply_move_actions(&mut board, &actions);
        assert_eq!(board.off[PieceType::White], 1);
    }

    #[test]
    fn test_bar_entry_action() {
        let rule = Backgammon::new();
        let mut board = Board::opening();
        board.lift(PieceType::White, 12);
        board.bar[PieceType::White] = 1;

        let actions = rule.get_move_actions(&board, &white(), Checker::Bar, 2);
        rule.apply_move_actions(&mut board, &actions);

        assert_eq!(board.bar[PieceType::White], 0);
        assert_eq!(board.count(PieceType::White, 22), 1);
    }

    #[test]
    fn test_mark_as_played() {
        let rule = Backgammon::new();
        let mut game = rolled(Board::opening(), 6, 2);

        rule.mark_as_played(&mut game, 6);

        assert_eq!(game.turn_dice.unwrap().moves_left.as_slice(), &[2]);
    }

    #[test]
    fn test_validate_confirm_requires_dice_used() {
        let rule = Backgammon::new();
        let mut game = rolled(Board::opening(), 6, 2);

        assert!(!rule.validate_confirm(&game, &white()));

        game.turn_dice.as_mut().unwrap().moves_left.clear();
        assert!(rule.validate_confirm(&game, &white()));
    }

    #[test]
    fn test_validate_confirm_when_no_die_playable() {
        let rule = Backgammon::new();
        let mut board = Board::opening();
        board.lift(PieceType::White, 12);
        board.bar[PieceType::White] = 1;
        // Close Black's home board from White's entry side.
        for point in 18..24 {
            board.place(PieceType::Black, point, 2);
        }

        let game = rolled(board, 6, 5);
        assert!(rule.validate_confirm(&game, &white()));
    }

    #[test]
    fn test_has_won() {
        let rule = Backgammon::new();
        let mut board = Board::empty();
        board.off[PieceType::White] = CHECKERS_PER_SIDE;

        assert!(rule.has_won(&board, &white()));
        assert!(!rule.has_won(&Board::opening(), &white()));
    }

    #[test]
    fn test_game_scores() {
        let rule = Backgammon::new();

        let mut single = Board::empty();
        single.off[PieceType::White] = 15;
        single.off[PieceType::Black] = 1;
        single.place(PieceType::Black, 20, 14);
        assert_eq!(rule.get_game_score(&single, &white()), 1);

        let mut gammon = Board::empty();
        gammon.off[PieceType::White] = 15;
        gammon.place(PieceType::Black, 20, 15);
        assert_eq!(rule.get_game_score(&gammon, &white()), 2);

        let mut backgammon = Board::empty();
        backgammon.off[PieceType::White] = 15;
        backgammon.place(PieceType::Black, 20, 14);
        backgammon.place(PieceType::Black, 3, 1);
        assert_eq!(rule.get_game_score(&backgammon, &white()), 3);
    }

    #[test]
    fn test_validate_undo_needs_a_move() {
        let rule = Backgammon::new();
        let mut game = rolled(Board::opening(), 6, 2);
        game.snapshot_state();

        assert!(!rule.validate_undo(&game, &white()));

        let actions = rule.get_move_actions(&game.state, &white(), Checker::Point(12), 6);
        rule.apply_move_actions(&mut game.state, &actions);
        rule.mark_as_played(&mut game, 6);
        game.move_sequence = 1;
        assert!(rule.validate_undo(&game, &white()));

        game.turn_confirmed = true;
        assert!(!rule.validate_undo(&game, &white()));
    }

    #[test]
    fn test_validate_undo_after_undo() {
        let rule = Backgammon::new();
        let mut game = rolled(Board::opening(), 6, 2);
        game.snapshot_state();

        let actions = rule.get_move_actions(&game.state, &white(), Checker::Point(7), 2);
        rule.apply_move_actions(&mut game.state, &actions);
        rule.mark_as_played(&mut game, 2);
        game.move_sequence = 1;
        assert!(game.restore_state());

        // The counter keeps its value, but nothing is left to undo.
        assert_eq!(game.move_sequence, 1);
        assert!(!rule.validate_undo(&game, &white()));
    }

    #[test]
    fn test_action_wire_shape() {
        let action = MoveAction::Move {
            side: PieceType::White,
            from: Checker::Bar,
            to: 20,
        };
        let json = serde_json::to_value(action).unwrap();

        assert_eq!(json["type"], "MOVE");
        assert_eq!(json["side"], "WHITE");
        assert_eq!(json["from"], "bar");
        assert_eq!(json["to"], 20);
    }
}
