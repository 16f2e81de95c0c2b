//! Casual backgammon: the reference `Rule` for solo matches.
//!
//! - 24 points, bar and borne-off checkers per side, standard opening
//! - Two six-sided dice; doubles play four times
//! - Hitting blots, mandatory bar entry, bearing off from home
//! - Single game = 1 point, gammon = 2, backgammon = 3
//!
//! No doubling cube.

mod board;
mod rule;

pub use board::{Board, Checker, Target, CHECKERS_PER_SIDE, HOME_SIZE, POINTS};
pub use rule::{Backgammon, Dice, MoveAction, DIE_SIDES};
