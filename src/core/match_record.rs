//! The match: two seats, a running score, and the game being played.

use serde::{Deserialize, Serialize};

use super::game::Game;
use super::player::{PieceType, Player, SideMap};
use crate::rules::Rule;

/// A first-to-`length` series of games between two players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match<S, D> {
    pub host: Option<Player>,
    pub guest: Option<Player>,

    /// Points needed to win the match.
    pub length: u32,

    /// Accumulated points per side. Never decreases.
    pub score: SideMap<u32>,

    pub current_game: Option<Game<S, D>>,

    /// Set once a side reaches `length`. Never cleared.
    pub is_over: bool,

    /// Games created so far, including the current one.
    pub games_played: u32,
}

impl<S: Clone, D: Clone> Match<S, D> {
    /// Create an empty match using the rule's default length.
    #[must_use]
    pub fn create_new<R>(rule: &R) -> Self
    where
        R: Rule<State = S, Dice = D>,
    {
        Self::with_length(rule.default_match_length())
    }

    /// Create an empty match played to `length` points.
    #[must_use]
    pub fn with_length(length: u32) -> Self {
        Self {
            host: None,
            guest: None,
            length,
            score: SideMap::default(),
            current_game: None,
            is_over: false,
            games_played: 0,
        }
    }

    /// Seat the host, replacing any previous one.
    pub fn add_host_player(&mut self, player: Player) {
        self.host = Some(player);
    }

    /// Seat the guest, replacing any previous one.
    pub fn add_guest_player(&mut self, player: Player) {
        self.guest = Some(player);
    }

    /// Replace the current game with a fresh one from the rule's opening
    /// position. The host moves first.
    pub fn create_new_game<R>(&mut self, rule: &R) -> &mut Game<S, D>
    where
        R: Rule<State = S, Dice = D>,
    {
        let first = self
            .host
            .as_ref()
            .map_or(PieceType::White, |host| host.piece_type);
        self.games_played += 1;
        self.current_game.insert(Game::new(rule.initial_state(), first))
    }

    /// The seated player playing `side`.
    #[must_use]
    pub fn player(&self, side: PieceType) -> Option<&Player> {
        [self.host.as_ref(), self.guest.as_ref()]
            .into_iter()
            .flatten()
            .find(|player| player.piece_type == side)
    }

    /// The player whose turn it is in the current game.
    #[must_use]
    pub fn turn_player(&self) -> Option<&Player> {
        let game = self.current_game.as_ref()?;
        self.player(game.turn_player)
    }

    /// Add `points` to `side` and close the match if it reached `length`.
    ///
    /// Returns true if this call ended the match.
    pub fn add_score(&mut self, side: PieceType, points: u32) -> bool {
        self.score[side] = self.score[side].saturating_add(points);
        if !self.is_over && self.score[side] >= self.length {
            self.is_over = true;
            return true;
        }
        false
    }
}
