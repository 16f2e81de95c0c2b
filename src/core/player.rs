//! Sides, players, and per-side data storage.
//!
//! ## PieceType
//!
//! The two sides of a backgammon-family board. Every player plays exactly
//! one side, and per-side data (score, bar, borne-off checkers) is keyed
//! by it.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `PieceType` with O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two piece colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceType {
    White,
    Black,
}

impl PieceType {
    /// Both sides, White first.
    pub const ALL: [PieceType; 2] = [PieceType::White, PieceType::Black];

    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PieceType::White => PieceType::Black,
            PieceType::Black => PieceType::White,
        }
    }

    /// Slot index used by `SideMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PieceType::White => 0,
            PieceType::Black => 1,
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceType::White => write!(f, "White"),
            PieceType::Black => write!(f, "Black"),
        }
    }
}

/// A seat at the table: display name plus the side it plays.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub piece_type: PieceType,
}

impl Player {
    /// Create a player.
    #[must_use]
    pub fn new(name: impl Into<String>, piece_type: PieceType) -> Self {
        Self {
            name: name.into(),
            piece_type,
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use solo_match::core::{PieceType, SideMap};
///
/// let mut score: SideMap<u32> = SideMap::default();
/// score[PieceType::Black] += 2;
///
/// assert_eq!(score[PieceType::White], 0);
/// assert_eq!(score[PieceType::Black], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PieceType) -> T) -> Self {
        Self {
            data: [factory(PieceType::White), factory(PieceType::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: PieceType) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: PieceType) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (PieceType, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (PieceType, &T)> {
        PieceType::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PieceType> for SideMap<T> {
    type Output = T;

    fn index(&self, side: PieceType) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<PieceType> for SideMap<T> {
    fn index_mut(&mut self, side: PieceType) -> &mut Self::Output {
        self.get_mut(side)
    }
}
