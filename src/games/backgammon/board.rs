//! Backgammon board geometry and checker bookkeeping.
//!
//! Points are indexed 0..24. White moves from high to low indices and
//! bears off below 0; Black moves from low to high and bears off above 23.
//! A point holds a signed count: positive for White, negative for Black.
//!
//! The point array is an `im::Vector`, so cloning a board for a turn
//! snapshot shares structure instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PieceType, SideMap};

/// Number of points on the board.
pub const POINTS: u8 = 24;

/// Checkers each side owns.
pub const CHECKERS_PER_SIDE: u8 = 15;

/// Points in a home board.
pub const HOME_SIZE: u8 = 6;

/// Where a checker is moved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Checker {
    /// The side's checker waiting on the bar.
    Bar,
    /// The side's top checker on a point (0..24).
    Point(u8),
}

/// Where a move lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Point(u8),
    Off,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    points: Vector<i8>,
    pub bar: SideMap<u8>,
    pub off: SideMap<u8>,
}

impl Board {
    /// A board with no checkers anywhere.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: Vector::from(vec![0i8; POINTS as usize]),
            bar: SideMap::default(),
            off: SideMap::default(),
        }
    }

    /// The standard opening position.
    #[must_use]
    pub fn opening() -> Self {
        let mut board = Self::empty();
        for (point, count) in [(23, 2), (12, 5), (7, 3), (5, 5)] {
            board.place(PieceType::White, point, count);
            board.place(PieceType::Black, POINTS - 1 - point, count);
        }
        board
    }

    /// Put `count` checkers of `side` on `point`, replacing its content.
    pub fn place(&mut self, side: PieceType, point: u8, count: u8) {
        let value = count as i8;
        let signed = match side {
            PieceType::White => value,
            PieceType::Black => -value,
        };
        self.points.set(point as usize, signed);
    }

    /// Checkers of `side` on `point`.
    #[must_use]
    pub fn count(&self, side: PieceType, point: u8) -> u8 {
        let value = self.points[point as usize];
        match side {
            PieceType::White if value > 0 => value as u8,
            PieceType::Black if value < 0 => value.unsigned_abs(),
            _ => 0,
        }
    }

    /// Side holding `point`, if any.
    #[must_use]
    pub fn owner(&self, point: u8) -> Option<PieceType> {
        match self.points[point as usize] {
            0 => None,
            v if v > 0 => Some(PieceType::White),
            _ => Some(PieceType::Black),
        }
    }

    /// Checkers of `side` on points (excluding bar and off).
    #[must_use]
    pub fn on_board(&self, side: PieceType) -> u8 {
        (0..POINTS).map(|point| self.count(side, point)).sum()
    }

    /// Pips from `point` to bearing off for `side`.
    #[must_use]
    pub fn distance_from_off(side: PieceType, point: u8) -> u8 {
        match side {
            PieceType::White => point + 1,
            PieceType::Black => POINTS - point,
        }
    }

    /// Is `point` in `side`'s home board?
    #[must_use]
    pub fn is_home(side: PieceType, point: u8) -> bool {
        Self::distance_from_off(side, point) <= HOME_SIZE
    }

    /// True when `side` has every remaining checker in its home board.
    #[must_use]
    pub fn all_home(&self, side: PieceType) -> bool {
        self.bar[side] == 0
            && (0..POINTS).all(|point| self.count(side, point) == 0 || Self::is_home(side, point))
    }

    /// Distance from off of `side`'s farthest checker on a point.
    #[must_use]
    pub fn farthest_distance(&self, side: PieceType) -> u8 {
        (0..POINTS)
            .filter(|&point| self.count(side, point) > 0)
            .map(|point| Self::distance_from_off(side, point))
            .max()
            .unwrap_or(0)
    }

    /// Landing spot for moving `checker` of `side` by `steps`, ignoring
    /// blocking. `None` if the move leaves the board in an impossible way.
    #[must_use]
    pub fn target(side: PieceType, checker: Checker, steps: u8) -> Option<Target> {
        if steps == 0 {
            return None;
        }
        match checker {
            Checker::Bar if steps > POINTS => None,
            Checker::Bar => Some(Target::Point(match side {
                PieceType::White => POINTS - steps,
                PieceType::Black => steps - 1,
            })),
            Checker::Point(point) if point >= POINTS => None,
            Checker::Point(point) => {
                let to = match side {
                    PieceType::White => point as i16 - steps as i16,
                    PieceType::Black => point as i16 + steps as i16,
                };
                if (0..POINTS as i16).contains(&to) {
                    Some(Target::Point(to as u8))
                } else {
                    Some(Target::Off)
                }
            }
        }
    }

    /// Can `side` legally move `checker` by `steps` on this board?
    #[must_use]
    pub fn can_move(&self, side: PieceType, checker: Checker, steps: u8) -> bool {
        match checker {
            Checker::Bar if self.bar[side] == 0 => return false,
            Checker::Point(_) if self.bar[side] > 0 => return false,
            Checker::Point(point) if point >= POINTS || self.count(side, point) == 0 => {
                return false
            }
            _ => {}
        }

        match Self::target(side, checker, steps) {
            None => false,
            Some(Target::Point(to)) => self.count(side.other(), to) < 2,
            Some(Target::Off) => {
                let Checker::Point(point) = checker else {
                    return false;
                };
                if !self.all_home(side) {
                    return false;
                }
                let distance = Self::distance_from_off(side, point);
                steps == distance || self.farthest_distance(side) == distance
            }
        }
    }

    /// Every (checker, steps) pair `side` can play with one of `dice`.
    #[must_use]
    pub fn legal_moves(&self, side: PieceType, dice: &[u8]) -> Vec<(Checker, u8)> {
        let mut faces: Vec<u8> = dice.to_vec();
        faces.sort_unstable();
        faces.dedup();

        let sources = std::iter::once(Checker::Bar).chain((0..POINTS).map(Checker::Point));
        sources
            .flat_map(|checker| faces.iter().map(move |&steps| (checker, steps)))
            .filter(|&(checker, steps)| self.can_move(side, checker, steps))
            .collect()
    }

    /// Take one checker of `side` off `point`.
    pub(crate) fn lift(&mut self, side: PieceType, point: u8) {
        let count = self.count(side, point);
        debug_assert!(count > 0, "no {side} checker on point {point}");
        self.place(side, point, count.saturating_sub(1));
    }

    /// Drop one checker of `side` on `point`.
    pub(crate) fn drop_on(&mut self, side: PieceType, point: u8) {
        let count = self.count(side, point);
        debug_assert!(
            self.owner(point).map_or(true, |owner| owner == side),
            "point {point} is held by the other side"
        );
        self.place(side, point, count + 1);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::opening()
    }
}
