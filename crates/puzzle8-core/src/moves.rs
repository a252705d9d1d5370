//! Moves of the blank and move sequences.
//!
//! A [`Move`] slides the blank one step in a direction, which is the same as
//! swapping the blank with the tile currently in that direction. Search
//! engines that identify operations by integer use [`Move::code`] and
//! [`Move::from_code`].
//!
//! A [`MoveSequence`] is an ordered trace of moves. Traces for consecutive
//! sub-goals are merged with [`MoveSequence::append`].
//!
//! # Examples
//!
//! ```
//! use puzzle8_core::{Move, MoveSequence};
//!
//! assert_eq!(Move::from_code(3), Some(Move::Left));
//! assert_eq!(Move::Left.code(), 3);
//! assert_eq!(Move::Left.opposite(), Move::Right);
//!
//! let mut trace: MoveSequence = "up, left".parse()?;
//! trace.append(&"DR".parse()?);
//! assert_eq!(trace.to_string(), "UP, LEFT, DOWN, RIGHT");
//! # Ok::<(), puzzle8_core::ParseMoveError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A direction in which the blank slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Slide the blank one row up.
    Up,
    /// Slide the blank one row down.
    Down,
    /// Slide the blank one column left.
    Left,
    /// Slide the blank one column right.
    Right,
}

impl Move {
    /// All moves, in integer-code order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the integer code of this move (`UP` = 1, `DOWN` = 2, `LEFT` = 3,
    /// `RIGHT` = 4).
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => 2,
            Self::Left => 3,
            Self::Right => 4,
        }
    }

    /// Converts an integer code back into a move.
    ///
    /// Returns `None` for codes outside 1-4.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Up),
            2 => Some(Self::Down),
            3 => Some(Self::Left),
            4 => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the upper-case name of this move.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a move name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid move: {token:?} (expected UP, DOWN, LEFT, RIGHT or U, D, L, R)")]
pub struct ParseMoveError {
    /// The token that failed to parse.
    pub token: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|mv| {
                token.eq_ignore_ascii_case(mv.name()) || token.eq_ignore_ascii_case(&mv.name()[..1])
            })
            .ok_or_else(|| ParseMoveError {
                token: token.to_owned(),
            })
    }
}

/// An ordered trace of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Appends every move of `other`, merging two traces into one.
    pub fn append(&mut self, other: &Self) {
        self.moves.extend_from_slice(&other.moves);
    }

    /// Returns the number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the sequence has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the moves as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the sequence that undoes this one: the opposite moves in
    /// reverse order.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.moves.iter().rev().map(|mv| mv.opposite()).collect()
    }

    /// Returns an iterator over the moves.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Move>> {
        self.moves.iter().copied()
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for MoveSequence {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = Move;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses a move trace.
///
/// Tokens are separated by whitespace or commas (`"UP, left d"`). A single
/// token made only of the letters `U`, `D`, `L` and `R` is read as one move per
/// letter (`"LURD"`). An empty string is an empty sequence.
impl FromStr for MoveSequence {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut moves = Vec::new();
        for token in s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            if let Ok(mv) = token.parse::<Move>() {
                moves.push(mv);
                continue;
            }
            if token.chars().all(|c| "UDLRudlr".contains(c)) {
                for c in token.chars() {
                    moves.push(c.encode_utf8(&mut [0; 4]).parse::<Move>()?);
                }
                continue;
            }
            return Err(ParseMoveError {
                token: token.to_owned(),
            });
        }
        Ok(Self { moves })
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(mv, f)?;
        }
        Ok(())
    }
}
