//! Board positions and position sets.
//!
//! The 8-puzzle board is a 3×3 grid. Cells are addressed either by a
//! [`Position`] (`x` column, `y` row) or by a row-major index in the range 0-8
//! (`index = x + y * 3`).
//!
//! # Examples
//!
//! ```
//! use puzzle8_core::{Move, Position, PositionSet};
//!
//! let pos = Position::new(2, 1);
//! assert_eq!(pos.index(), 5);
//! assert_eq!(Position::from_index(5), pos);
//!
//! // Neighbours stop at the border
//! assert_eq!(pos.neighbor(Move::Left), Some(Position::new(1, 1)));
//! assert_eq!(pos.neighbor(Move::Right), None);
//!
//! let mut set = PositionSet::EMPTY;
//! set.insert(pos);
//! assert!(set.contains(pos));
//! assert_eq!(set.len(), 1);
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::Move;

/// Width (and height) of the board.
pub const SIDE: u8 = 3;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A cell position on the 3×3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All positions in row-major order.
    pub const ALL: [Self; CELLS] = {
        let mut all = [Self { x: 0, y: 0 }; CELLS];
        let mut i = 0;
        #[allow(clippy::cast_possible_truncation)]
        while i < CELLS {
            all[i] = Self::from_index(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a position from its column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-2.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < SIDE && y < SIDE, "Invalid position");
        Self { x, y }
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < SIDE * SIDE, "Invalid cell index");
        Self {
            x: index % SIDE,
            y: index / SIDE,
        }
    }

    /// Returns the column (0-2).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-2).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.x + self.y * SIDE
    }

    /// Returns the adjacent position in the direction of `mv`, or `None` when
    /// this position is on that border.
    #[must_use]
    pub const fn neighbor(self, mv: Move) -> Option<Self> {
        let Self { x, y } = self;
        match mv {
            Move::Left if x > 0 => Some(Self { x: x - 1, y }),
            Move::Right if x < SIDE - 1 => Some(Self { x: x + 1, y }),
            Move::Up if y > 0 => Some(Self { x, y: y - 1 }),
            Move::Down if y < SIDE - 1 => Some(Self { x, y: y + 1 }),
            _ => None,
        }
    }

    /// Returns the Manhattan distance `|dx| + |dy|` to another position.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        u32::from(self.x.abs_diff(other.x) + self.y.abs_diff(other.y))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A set of board positions, stored as a 9-bit mask.
///
/// Bit `i` corresponds to the position with row-major index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet {
    bits: u16,
}

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set of all nine positions.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Returns `true` if the set contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & (1 << pos.index()) != 0
    }

    /// Adds a position to the set.
    ///
    /// Returns `true` if the position was not already present.
    pub fn insert(&mut self, pos: Position) -> bool {
        let inserted = !self.contains(pos);
        self.bits |= 1 << pos.index();
        inserted
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if every position of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    pub fn iter(self) -> PositionSetIter {
        PositionSetIter { bits: self.bits }
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = PositionSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`].
#[derive(Debug, Clone)]
pub struct PositionSetIter {
    bits: u16,
}

impl Iterator for PositionSetIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Position::from_index(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for PositionSetIter {}

impl FusedIterator for PositionSetIter {}
