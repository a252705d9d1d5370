//! Puzzle configurations.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    Move, MoveSequence, Position, PositionSet, Rejection, Tile, Transition, position::CELLS,
};

/// Integer cell value marking a wildcard in [`PuzzleState::from_cells_with_wildcards`].
pub const WILDCARD: i32 = -1;

/// Errors returned when building a [`PuzzleState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidStateError {
    /// The input does not have exactly nine cells.
    #[display("invalid state: expected 9 cells, got {len}")]
    InvalidLength {
        /// Number of cells supplied.
        len: usize,
    },
    /// A cell holds a value that is not a tile.
    #[display("invalid state: cell {index} holds {value}, expected a tile 0-8")]
    InvalidTile {
        /// Row-major index of the cell.
        index: usize,
        /// The rejected value.
        value: i32,
    },
    /// A tile appears in more than one cell.
    #[display("invalid state: tile {tile} appears more than once")]
    DuplicateTile {
        /// The repeated tile.
        tile: Tile,
    },
    /// The text form contains a character that is neither a tile nor a wildcard.
    #[display("invalid state: unexpected character {ch:?}")]
    UnexpectedChar {
        /// The rejected character.
        ch: char,
    },
}

/// One configuration of the 3×3 board.
///
/// A state holds nine cells in row-major order. Each cell holds a [`Tile`], or
/// nothing when the cell is a wildcard. A state without wildcards is a
/// permutation of the tiles 0-8 and has exactly one blank. States with
/// wildcards are patterns: they serve as goals or references for
/// [`distance_to`](Self::distance_to) and cannot be moved.
///
/// States are immutable values; [`apply`](Self::apply) produces a new state.
///
/// Equality and hashing are structural over the nine cells, so equal
/// configurations hash equal.
///
/// # Examples
///
/// ```
/// use puzzle8_core::{Move, PuzzleState, Transition};
///
/// let state = PuzzleState::from_cells(&[8, 7, 6, 5, 4, 3, 2, 1, 0])?;
/// let Transition::Moved(next) = state.apply(Move::Left) else {
///     panic!("move should be accepted");
/// };
/// assert_eq!(next.cells(), [8, 7, 6, 5, 4, 3, 2, 0, 1]);
///
/// // The blank cannot leave the board
/// assert!(PuzzleState::GOAL.apply(Move::Right).is_rejected());
///
/// // Wildcards on the reference are ignored by the exact distance
/// let pattern = PuzzleState::from_cells_with_wildcards(&[1, 2, 3, 7, -1, -1, -1, -1, -1])?;
/// let state = PuzzleState::from_cells(&[1, 2, 3, 7, 0, 6, 5, 8, 4])?;
/// assert_eq!(state.distance_to(&pattern), 0);
/// # Ok::<(), puzzle8_core::InvalidStateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    cells: [Option<Tile>; CELLS],
}

impl PuzzleState {
    /// The solved configuration `1 2 3 / 4 5 6 / 7 8 0`.
    pub const GOAL: Self = Self {
        cells: [
            Some(Tile::new(1)),
            Some(Tile::new(2)),
            Some(Tile::new(3)),
            Some(Tile::new(4)),
            Some(Tile::new(5)),
            Some(Tile::new(6)),
            Some(Tile::new(7)),
            Some(Tile::new(8)),
            Some(Tile::BLANK),
        ],
    };

    /// Builds a state from nine integer cells without wildcard processing.
    ///
    /// # Errors
    ///
    /// - [`InvalidStateError::InvalidLength`] if `cells.len() != 9`
    /// - [`InvalidStateError::InvalidTile`] if a value is outside 0-8
    /// - [`InvalidStateError::DuplicateTile`] if a value appears twice
    pub fn from_cells(cells: &[i32]) -> Result<Self, InvalidStateError> {
        Self::parse_cells(cells, false)
    }

    /// Builds a state from nine integer cells, treating [`WILDCARD`] (`-1`)
    /// cells as wildcards.
    ///
    /// # Errors
    ///
    /// Same as [`from_cells`](Self::from_cells), except that `-1` is accepted.
    pub fn from_cells_with_wildcards(cells: &[i32]) -> Result<Self, InvalidStateError> {
        Self::parse_cells(cells, true)
    }

    /// Builds a fully specified state from nine tiles.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError::DuplicateTile`] if a tile appears twice.
    pub fn from_tiles(tiles: [Tile; CELLS]) -> Result<Self, InvalidStateError> {
        Self::from_cell_array(tiles.map(Some))
    }

    /// Builds a state from nine optional tiles; `None` cells are wildcards.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError::DuplicateTile`] if a tile appears twice.
    pub fn from_cell_array(cells: [Option<Tile>; CELLS]) -> Result<Self, InvalidStateError> {
        let mut seen = [false; CELLS];
        for tile in cells.iter().flatten() {
            let slot = &mut seen[usize::from(tile.value())];
            if *slot {
                return Err(InvalidStateError::DuplicateTile { tile: *tile });
            }
            *slot = true;
        }
        Ok(Self { cells })
    }

    fn parse_cells(cells: &[i32], wildcards: bool) -> Result<Self, InvalidStateError> {
        let values: &[i32; CELLS] = cells
            .try_into()
            .map_err(|_| InvalidStateError::InvalidLength { len: cells.len() })?;
        let mut out = [None; CELLS];
        for (index, (&value, slot)) in values.iter().zip(&mut out).enumerate() {
            if wildcards && value == WILDCARD {
                continue;
            }
            let tile = Tile::try_from(value)
                .map_err(|_| InvalidStateError::InvalidTile { index, value })?;
            *slot = Some(tile);
        }
        Self::from_cell_array(out)
    }

    /// Returns the tile at `pos`, or `None` if the cell is a wildcard.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.cells[usize::from(pos.index())]
    }

    /// Returns the position of `tile`, or `None` if no cell holds it.
    ///
    /// Cells are scanned in row-major order.
    #[must_use]
    pub fn position_of(&self, tile: Tile) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| self.tile_at(pos) == Some(tile))
    }

    /// Returns the position of the blank, or `None` if the blank is a wildcard.
    #[must_use]
    pub fn blank_position(&self) -> Option<Position> {
        self.position_of(Tile::BLANK)
    }

    /// Returns the set of wildcard cells.
    #[must_use]
    pub fn wildcards(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.tile_at(pos).is_none())
            .collect()
    }

    /// Returns `true` if any cell is a wildcard.
    #[must_use]
    pub fn has_wildcards(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Returns the cells as integers, with wildcards as [`WILDCARD`].
    #[must_use]
    pub fn cells(&self) -> [i32; CELLS] {
        self.cells.map(|cell| cell.map_or(WILDCARD, i32::from))
    }

    /// Slides the blank one step in the direction of `mv`.
    ///
    /// The blank swaps places with the tile next to it; every other cell is
    /// unchanged. The move is rejected with [`Rejection::AtEdge`] when the
    /// blank is already on that border, and with
    /// [`Rejection::WildcardPattern`] when `self` has wildcards.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Transition<Self> {
        let blank = match self.blank_position() {
            Some(blank) if !self.has_wildcards() => blank,
            _ => return Transition::Rejected(Rejection::WildcardPattern),
        };
        let Some(target) = blank.neighbor(mv) else {
            return Transition::Rejected(Rejection::AtEdge);
        };
        let mut cells = self.cells;
        cells.swap(usize::from(blank.index()), usize::from(target.index()));
        Transition::Moved(Self { cells })
    }

    /// Applies a move given by its integer code (see [`Move::code`]).
    ///
    /// Unknown codes are rejected with [`Rejection::UnknownMove`].
    #[must_use]
    pub fn apply_code(&self, code: i32) -> Transition<Self> {
        match Move::from_code(code) {
            Some(mv) => self.apply(mv),
            None => Transition::Rejected(Rejection::UnknownMove { code }),
        }
    }

    /// Returns an iterator over every accepted `(move, next state)` pair, in
    /// [`Move::ALL`] order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Self)> {
        let this = *self;
        Move::ALL
            .into_iter()
            .filter_map(move |mv| this.apply(mv).moved().map(|next| (mv, next)))
    }

    /// Applies every move of `moves` in order and returns the final state.
    ///
    /// Rejected moves leave the state unchanged.
    #[must_use]
    pub fn apply_all(&self, moves: &MoveSequence) -> Self {
        moves
            .iter()
            .fold(*self, |state, mv| state.apply(mv).unwrap_or(state))
    }

    /// Returns the number of cells where `self` and `other` differ.
    ///
    /// Cells that are wildcards in `other` are never counted. Wildcards in
    /// `self` are not consulted, so a wildcard in `self` facing a tile in
    /// `other` counts as a mismatch. The result is in the range 0-9.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> u32 {
        if self == other {
            return 0;
        }
        let mut distance = 0;
        for pos in Position::ALL {
            let Some(expected) = other.tile_at(pos) else {
                continue;
            };
            if self.tile_at(pos) != Some(expected) {
                distance += 1;
            }
        }
        distance
    }

    /// Returns the sum of the Manhattan distances of every tile between
    /// `self` and `other`.
    ///
    /// The blank counts as a tile. A tile missing from either state (a
    /// wildcard) contributes 0, which keeps the result symmetric.
    #[must_use]
    pub fn heuristic(&self, other: &Self) -> u32 {
        Tile::ALL
            .into_iter()
            .filter_map(|tile| {
                let from = self.position_of(tile)?;
                let to = other.position_of(tile)?;
                Some(from.manhattan_distance(to))
            })
            .sum()
    }

    /// Returns the number of inversions among the numbered tiles, or `None`
    /// for wildcard patterns.
    ///
    /// An inversion is a pair of numbered tiles that appear in row-major order
    /// with the larger one first. The blank is ignored.
    #[must_use]
    pub fn inversions(&self) -> Option<u32> {
        if self.has_wildcards() {
            return None;
        }
        let tiles: Vec<u8> = self
            .cells
            .iter()
            .flatten()
            .filter(|tile| !tile.is_blank())
            .map(|tile| tile.value())
            .collect();
        let mut count = 0;
        for (i, &a) in tiles.iter().enumerate() {
            for &b in &tiles[i + 1..] {
                if b < a {
                    count += 1;
                }
            }
        }
        Some(count)
    }

    /// Returns whether `goal` is reachable from `self` by sliding moves, or
    /// `None` when either state has wildcards.
    ///
    /// On a board of odd width two states are mutually reachable exactly when
    /// their inversion counts have the same parity.
    #[must_use]
    pub fn can_reach(&self, goal: &Self) -> Option<bool> {
        Some(self.inversions()? % 2 == goal.inversions()? % 2)
    }

    fn fmt_compact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let ch = cell.map_or('?', Tile::to_char);
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Renders the board as three rows.
///
/// Wildcard cells render as `?`. The alternate form (`{:#}`) renders the nine
/// cells on one line (`123456780`), which [`FromStr`] reads back.
impl Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.fmt_compact(f);
        }
        for (y, row) in self.cells.chunks(3).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{tile}")?,
                    None => write!(f, "?")?,
                }
            }
        }
        Ok(())
    }
}

/// Parses a state from text.
///
/// - `0`-`8` are tiles, `?` and `*` are wildcards
/// - whitespace, `,` and `|` are ignored
///
/// ```
/// use puzzle8_core::PuzzleState;
///
/// let state: PuzzleState = "1 2 3 | 4 5 6 | 7 8 0".parse()?;
/// assert_eq!(state, PuzzleState::GOAL);
///
/// let pattern: PuzzleState = "123 7?? ???".parse()?;
/// assert_eq!(pattern.wildcards().len(), 5);
/// # Ok::<(), puzzle8_core::InvalidStateError>(())
/// ```
impl FromStr for PuzzleState {
    type Err = InvalidStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in s
            .chars()
            .filter(|&ch| !ch.is_whitespace() && ch != ',' && ch != '|')
        {
            let cell = match ch {
                '?' | '*' => None,
                _ => Some(Tile::from_char(ch).ok_or(InvalidStateError::UnexpectedChar { ch })?),
            };
            cells.push(cell);
        }
        let cells = <[Option<Tile>; CELLS]>::try_from(cells)
            .map_err(|cells| InvalidStateError::InvalidLength { len: cells.len() })?;
        Self::from_cell_array(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> PuzzleState {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_cells_validates_length() {
        assert_eq!(
            PuzzleState::from_cells(&[1, 2, 3]),
            Err(InvalidStateError::InvalidLength { len: 3 })
        );
        assert_eq!(
            PuzzleState::from_cells_with_wildcards(&[0; 10]),
            Err(InvalidStateError::InvalidLength { len: 10 })
        );
        assert!(PuzzleState::from_cells(&[1, 2, 3, 4, 5, 6, 7, 8, 0]).is_ok());
    }

    #[test]
    fn test_from_cells_rejects_non_tiles() {
        assert_eq!(
            PuzzleState::from_cells(&[1, 2, 3, 4, 5, 6, 7, 9, 0]),
            Err(InvalidStateError::InvalidTile { index: 7, value: 9 })
        );
        // -1 is only a wildcard when wildcard processing is requested
        assert_eq!(
            PuzzleState::from_cells(&[-1, 2, 3, 4, 5, 6, 7, 8, 0]),
            Err(InvalidStateError::InvalidTile {
                index: 0,
                value: -1
            })
        );
        assert_eq!(
            PuzzleState::from_cells_with_wildcards(&[-2, 2, 3, 4, 5, 6, 7, 8, 0]),
            Err(InvalidStateError::InvalidTile {
                index: 0,
                value: -2
            })
        );
    }

    #[test]
    fn test_from_cells_rejects_duplicates() {
        assert_eq!(
            PuzzleState::from_cells(&[0, 2, 3, 4, 5, 6, 7, 8, 0]),
            Err(InvalidStateError::DuplicateTile { tile: Tile::BLANK })
        );
        assert_eq!(
            PuzzleState::from_cells_with_wildcards(&[1, 1, -1, -1, -1, -1, -1, -1, -1]),
            Err(InvalidStateError::DuplicateTile { tile: Tile::new(1) })
        );
    }

    #[test]
    fn test_wildcards_are_recorded() {
        let pattern =
            PuzzleState::from_cells_with_wildcards(&[1, 2, 3, 7, -1, -1, -1, -1, -1]).unwrap();
        assert!(pattern.has_wildcards());
        let indices: Vec<_> = pattern.wildcards().iter().map(Position::index).collect();
        assert_eq!(indices, vec![4, 5, 6, 7, 8]);
        assert_eq!(pattern.tile_at(Position::from_index(4)), None);
        assert_eq!(pattern.cells(), [1, 2, 3, 7, -1, -1, -1, -1, -1]);
        assert_eq!(pattern.blank_position(), None);

        assert!(!PuzzleState::GOAL.has_wildcards());
        assert!(PuzzleState::GOAL.wildcards().is_empty());
    }

    #[test]
    fn test_queries() {
        let s = state("876 543 210");
        assert_eq!(s.blank_position(), Some(Position::new(2, 2)));
        assert_eq!(s.position_of(Tile::new(8)), Some(Position::new(0, 0)));
        assert_eq!(s.tile_at(Position::new(1, 1)), Some(Tile::new(4)));
    }

    #[test]
    fn test_apply_left_from_reverse_order() {
        let s = PuzzleState::from_cells(&[8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        let next = s.apply(Move::Left).moved().unwrap();
        assert_eq!(next.cells(), [8, 7, 6, 5, 4, 3, 2, 0, 1]);
        // The source is untouched
        assert_eq!(s.cells(), [8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_apply_each_direction_from_center() {
        let s = state("123 405 678");
        assert_eq!(s.apply(Move::Up), Transition::Moved(state("103 425 678")));
        assert_eq!(s.apply(Move::Down), Transition::Moved(state("123 475 608")));
        assert_eq!(s.apply(Move::Left), Transition::Moved(state("123 045 678")));
        assert_eq!(s.apply(Move::Right), Transition::Moved(state("123 450 678")));
    }

    #[test]
    fn test_apply_rejected_at_edges() {
        let s = PuzzleState::GOAL;
        assert_eq!(
            s.apply(Move::Right),
            Transition::Rejected(Rejection::AtEdge)
        );
        assert_eq!(s.apply(Move::Down), Transition::Rejected(Rejection::AtEdge));

        let top_left = state("012 345 678");
        assert!(top_left.apply(Move::Up).is_rejected());
        assert!(top_left.apply(Move::Left).is_rejected());
        assert!(top_left.apply(Move::Down).is_moved());
        assert!(top_left.apply(Move::Right).is_moved());
    }

    #[test]
    fn test_apply_rejects_wildcard_patterns() {
        let pattern = state("123 ??? ?80");
        assert_eq!(
            pattern.apply(Move::Up),
            Transition::Rejected(Rejection::WildcardPattern)
        );
        assert_eq!(pattern.successors().count(), 0);
    }

    #[test]
    fn test_apply_code() {
        let s = state("876 543 210");
        assert_eq!(s.apply_code(3), s.apply(Move::Left));
        assert_eq!(s.apply_code(1), s.apply(Move::Up));
        assert_eq!(
            s.apply_code(0),
            Transition::Rejected(Rejection::UnknownMove { code: 0 })
        );
        assert_eq!(
            s.apply_code(42),
            Transition::Rejected(Rejection::UnknownMove { code: 42 })
        );
    }

    #[test]
    fn test_successors() {
        let moves: Vec<_> = PuzzleState::GOAL.successors().map(|(mv, _)| mv).collect();
        assert_eq!(moves, vec![Move::Up, Move::Left]);

        let s = state("123 405 678");
        let next: Vec<_> = s.successors().collect();
        assert_eq!(next.len(), 4);
        for (mv, n) in next {
            assert_eq!(n.apply(mv.opposite()), Transition::Moved(s));
        }
    }

    #[test]
    fn test_apply_all_skips_rejected_moves() {
        let s = PuzzleState::GOAL;
        let moves: MoveSequence = "RIGHT LEFT UP DOWN".parse().unwrap();
        // RIGHT is rejected; LEFT, UP, DOWN leave the blank at (1, 2)
        assert_eq!(s.apply_all(&moves), state("123 456 708"));
        assert_eq!(s.apply_all(&MoveSequence::new()), s);
    }

    #[test]
    fn test_distance_to() {
        let s = PuzzleState::GOAL;
        assert_eq!(s.distance_to(&s), 0);
        assert_eq!(s.distance_to(&state("123 456 708")), 2);
        assert_eq!(s.distance_to(&state("876 543 210")), 8);
        assert_eq!(state("012 345 678").distance_to(&s), 9);
    }

    #[test]
    fn test_distance_skips_reference_wildcards_only() {
        let pattern =
            PuzzleState::from_cells_with_wildcards(&[1, 2, 3, 7, -1, -1, -1, -1, -1]).unwrap();
        let s = PuzzleState::from_cells(&[1, 2, 3, 7, 0, 6, 5, 8, 4]).unwrap();
        assert_eq!(s.distance_to(&pattern), 0);
        // Wildcards on self are mismatches against real tiles
        assert_eq!(pattern.distance_to(&s), 5);

        let off = PuzzleState::from_cells(&[2, 1, 3, 7, 0, 6, 5, 8, 4]).unwrap();
        assert_eq!(off.distance_to(&pattern), 2);
    }

    #[test]
    fn test_heuristic() {
        let goal = PuzzleState::GOAL;
        assert_eq!(goal.heuristic(&goal), 0);

        // Every value shifted one cell forward in row-major order
        let shifted = state("012 345 678");
        assert_eq!(goal.heuristic(&shifted), 16);
        assert_eq!(shifted.heuristic(&goal), 16);

        // One slide moves the blank and one tile by one step each
        assert_eq!(goal.heuristic(&state("123 456 708")), 2);
    }

    #[test]
    fn test_heuristic_ignores_missing_tiles() {
        let pattern = state("123 7?? ???");
        let s = PuzzleState::from_cells(&[1, 2, 3, 7, 0, 6, 5, 8, 4]).unwrap();
        assert_eq!(s.heuristic(&pattern), 0);
        assert_eq!(pattern.heuristic(&s), 0);

        let swapped = PuzzleState::from_cells(&[2, 1, 3, 7, 0, 6, 5, 8, 4]).unwrap();
        assert_eq!(swapped.heuristic(&pattern), 2);
    }

    #[test]
    fn test_inversions_and_reachability() {
        assert_eq!(PuzzleState::GOAL.inversions(), Some(0));
        assert_eq!(state("123 456 870").inversions(), Some(1));
        assert_eq!(state("876 543 210").inversions(), Some(28));
        assert_eq!(state("123 ??? ???").inversions(), None);

        let goal = PuzzleState::GOAL;
        assert_eq!(state("876 543 210").can_reach(&goal), Some(true));
        assert_eq!(state("213 456 780").can_reach(&goal), Some(false));
        assert_eq!(goal.can_reach(&state("12? ??? ???")), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PuzzleState::GOAL.to_string(), "1 2 3\n4 5 6\n7 8 0");
        assert_eq!(state("123 7?? ???").to_string(), "1 2 3\n7 ? ?\n? ? ?");
        assert_eq!(format!("{:#}", PuzzleState::GOAL), "123456780");
        assert_eq!(format!("{:#}", state("12? 7?? ???")), "12?7?????");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "12345678".parse::<PuzzleState>(),
            Err(InvalidStateError::InvalidLength { len: 8 })
        );
        assert_eq!(
            "123 456 789".parse::<PuzzleState>(),
            Err(InvalidStateError::UnexpectedChar { ch: '9' })
        );
        assert_eq!(
            "123 456 711".parse::<PuzzleState>(),
            Err(InvalidStateError::DuplicateTile { tile: Tile::new(1) })
        );
        assert_eq!(
            "".parse::<PuzzleState>(),
            Err(InvalidStateError::InvalidLength { len: 0 })
        );
    }

    #[test]
    fn test_parse_accepts_separators_and_star() {
        assert_eq!(state("1,2,3|4,5,6|7,8,0"), PuzzleState::GOAL);
        assert_eq!(state("123 *** ***"), state("123 ??? ???"));
        let compact = format!("{:#}", state("876 543 210"));
        assert_eq!(state(&compact), state("876 543 210"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            InvalidStateError::InvalidLength { len: 4 }.to_string(),
            "invalid state: expected 9 cells, got 4"
        );
        assert_eq!(
            InvalidStateError::DuplicateTile { tile: Tile::new(3) }.to_string(),
            "invalid state: tile 3 appears more than once"
        );
    }
}
