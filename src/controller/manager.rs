//! Solo match setup and the request/response surface.
//!
//! `SoloGameManager` owns the rule, the match record and the dice stream
//! for one session. One local actor plays both seats, so every request
//! acts for whichever side holds the turn.

use tracing::info;

use super::reply::{ConfirmEvent, MoveReply, RollReply, UndoReply};
use super::turn::{TurnController, TurnPhase};
use crate::core::{DiceRng, DiceRngState, MatchConfig, PieceType, Player};
use crate::error::{ConfigError, TurnError};
use crate::rules::{GameOf, MatchOf, Rule};

/// A solo match: the user plays both sides.
///
/// ## Example
///
/// ```
/// use solo_match::controller::SoloGameManager;
/// use solo_match::games::backgammon::Backgammon;
///
/// let mut manager = SoloGameManager::init(Backgammon::new());
/// assert_eq!(manager.host().unwrap().name, "Player 1");
///
/// let roll = manager.roll_dice();
/// assert!(roll.result);
/// ```
pub struct SoloGameManager<R: Rule> {
    rule: R,
    session: MatchOf<R>,
    rng: DiceRng,
}

impl<R: Rule> SoloGameManager<R> {
    /// Set up a match with the rule's default length: "Player 1" hosts as
    /// White, "Player 2" guests as Black, and the first game is started
    /// with the host to roll.
    #[must_use]
    pub fn init(rule: R) -> Self {
        let config = MatchConfig::for_rule(&rule);
        Self::build(rule, &config)
    }

    /// Set up a match from an explicit configuration.
    pub fn init_with_config(rule: R, config: &MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(rule, config))
    }

    fn build(rule: R, config: &MatchConfig) -> Self {
        let mut session = MatchOf::<R>::with_length(config.length);
        session.add_host_player(Player::new(config.host_name.clone(), PieceType::White));
        session.add_guest_player(Player::new(config.guest_name.clone(), PieceType::Black));

        let game = session.create_new_game(&rule);
        game.has_started = true;
        game.turn_player = PieceType::White;

        info!(length = config.length, seed = config.seed, "solo match created");

        Self {
            rule,
            session,
            rng: DiceRng::new(config.seed),
        }
    }

    /// Start the next game of the match.
    ///
    /// Only allowed once the current game is over and the match is not.
    pub fn new_game(&mut self) -> Result<&GameOf<R>, TurnError> {
        if self.session.is_over {
            return Err(TurnError::MatchOver);
        }
        if self.session.current_game.as_ref().is_some_and(|game| !game.is_over) {
            return Err(TurnError::GameInProgress);
        }

        let host = self.session.host.as_ref().map(|host| host.piece_type);
        let game = self.session.create_new_game(&self.rule);
        game.has_started = true;
        if let Some(side) = host {
            game.turn_player = side;
        }

        info!(game = self.session.games_played, "new game started");
        self.session.current_game.as_ref().ok_or(TurnError::NotReady)
    }

    /// Turn controller bound to this match.
    pub fn turn(&mut self) -> TurnController<'_, R> {
        TurnController::new(&self.rule, &mut self.session, &mut self.rng)
    }

    /// Roll for the current turn.
    pub fn roll_dice(&mut self) -> RollReply<R::Dice> {
        self.turn().roll_dice().into()
    }

    /// Move one piece for the turn player.
    pub fn move_piece(&mut self, piece: R::Piece, steps: u8) -> MoveReply<R::Action> {
        self.turn().move_piece(piece, steps).into()
    }

    /// Commit the turn.
    pub fn confirm_moves(&mut self) -> ConfirmEvent {
        self.turn().confirm_moves().into()
    }

    /// Discard every move of the turn.
    pub fn undo_moves(&mut self) -> UndoReply {
        self.turn().undo_moves().into()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        TurnPhase::of(&self.session)
    }

    #[must_use]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The match record.
    #[must_use]
    pub fn current_match(&self) -> &MatchOf<R> {
        &self.session
    }

    #[must_use]
    pub fn game(&self) -> Option<&GameOf<R>> {
        self.session.current_game.as_ref()
    }

    #[must_use]
    pub fn host(&self) -> Option<&Player> {
        self.session.host.as_ref()
    }

    #[must_use]
    pub fn guest(&self) -> Option<&Player> {
        self.session.guest.as_ref()
    }

    /// Position of the dice stream, for replaying the match.
    #[must_use]
    pub fn rng_state(&self) -> DiceRngState {
        self.rng.state()
    }
}
