//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::cell::Cell;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use solo_match::core::{DiceRng, Player};
use solo_match::games::backgammon::{Backgammon, Checker};
use solo_match::rules::{GameOf, MatchOf, Rule};
use solo_match::{ConfirmEvent, SoloGameManager};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test log subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then "warn".
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A rule whose decisions are set by the test.
///
/// The board is a row of counters; moving piece `i` by `steps` adds
/// `steps` to counter `i`. Steps above six are always rejected.
pub struct ScriptedRule {
    pub allow_move: Cell<bool>,
    pub produce_actions: Cell<bool>,
    pub allow_confirm: Cell<bool>,
    pub allow_undo: Cell<bool>,
    pub won: Cell<bool>,
    pub points: Cell<u32>,
    /// `next_turn` only swaps the side and leaves per-turn data alone.
    pub bare_next_turn: Cell<bool>,
    pub length: u32,
}

impl ScriptedRule {
    pub fn new(length: u32) -> Self {
        Self {
            allow_move: Cell::new(true),
            produce_actions: Cell::new(true),
            allow_confirm: Cell::new(true),
            allow_undo: Cell::new(true),
            won: Cell::new(false),
            points: Cell::new(1),
            bare_next_turn: Cell::new(false),
            length,
        }
    }
}

impl Rule for ScriptedRule {
    type State = Vec<i32>;
    type Dice = Vec<u8>;
    type Piece = usize;
    type Action = (usize, i32);

    fn initial_state(&self) -> Vec<i32> {
        vec![0; 4]
    }

    fn default_match_length(&self) -> u32 {
        self.length
    }

    fn roll_dice(&self, _game: &GameOf<Self>, rng: &mut DiceRng) -> Vec<u8> {
        vec![rng.roll_die(6), rng.roll_die(6)]
    }

    fn validate_move(&self, game: &GameOf<Self>, _player: &Player, piece: usize, steps: u8) -> bool {
        self.allow_move.get() && (1..=6).contains(&steps) && piece < game.state.len()
    }

    fn get_move_actions(
        &self,
        _state: &Vec<i32>,
        _player: &Player,
        piece: usize,
        steps: u8,
    ) -> Vec<(usize, i32)> {
        if self.produce_actions.get() {
            vec![(piece, steps as i32)]
        } else {
            Vec::new()
        }
    }

    fn apply_move_actions(&self, state: &mut Vec<i32>, actions: &[(usize, i32)]) {
        for &(piece, delta) in actions {
            state[piece] += delta;
        }
    }

    fn mark_as_played(&self, game: &mut GameOf<Self>, steps: u8) {
        if let Some(dice) = game.turn_dice.as_mut() {
            if let Some(index) = dice.iter().position(|&face| face == steps) {
                dice.remove(index);
            }
        }
    }

    fn validate_confirm(&self, _game: &GameOf<Self>, _player: &Player) -> bool {
        self.allow_confirm.get()
    }

    fn has_won(&self, _state: &Vec<i32>, _player: &Player) -> bool {
        self.won.get()
    }

    fn get_game_score(&self, _state: &Vec<i32>, _player: &Player) -> u32 {
        self.points.get()
    }

    fn validate_undo(&self, _game: &GameOf<Self>, _player: &Player) -> bool {
        self.allow_undo.get()
    }

    fn next_turn(&self, session: &mut MatchOf<Self>) {
        let Some(game) = session.current_game.as_mut() else {
            return;
        };
        if self.bare_next_turn.get() {
            game.turn_player = game.turn_player.other();
            game.turn_dice = None;
        } else {
            let next = game.turn_player.other();
            game.start_turn(next);
        }
    }
}

/// Legal (checker, steps) pairs for the turn player of a backgammon match.
pub fn legal_moves(manager: &SoloGameManager<Backgammon>) -> Vec<(Checker, u8)> {
    let game = manager.game().expect("game in progress");
    match &game.turn_dice {
        Some(dice) => game.state.legal_moves(game.turn_player, &dice.moves_left),
        None => Vec::new(),
    }
}

/// Roll, play legal moves picked by `pick` until none is left, confirm.
pub fn play_turn(
    manager: &mut SoloGameManager<Backgammon>,
    mut pick: impl FnMut(usize) -> usize,
) -> ConfirmEvent {
    let roll = manager.roll_dice();
    assert!(roll.result, "roll rejected: {:?}", roll.error_message);

    loop {
        let moves = legal_moves(manager);
        if moves.is_empty() {
            break;
        }
        let (checker, steps) = moves[pick(moves.len()) % moves.len()];
        let reply = manager.move_piece(checker, steps);
        assert!(reply.result, "legal move rejected: {checker:?} by {steps}");
    }

    manager.confirm_moves()
}
