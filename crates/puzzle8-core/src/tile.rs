//! Puzzle tile representation.

use std::fmt::{self, Display};

/// A tile of the 8-puzzle in the range 0-8.
///
/// The value 0 is the blank slot ([`Tile::BLANK`]); the values 1-8 are the
/// numbered tiles.
///
/// # Examples
///
/// ```
/// use puzzle8_core::Tile;
///
/// let tile = Tile::new(5);
/// assert_eq!(tile.value(), 5);
/// assert!(!tile.is_blank());
/// assert!(Tile::BLANK.is_blank());
///
/// // Fallible conversion from integer cell values
/// assert_eq!(Tile::try_from(7), Ok(Tile::new(7)));
/// assert!(Tile::try_from(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// The blank slot (value 0).
    pub const BLANK: Self = Self(0);

    /// Array containing all tiles from 0 to 8, in value order.
    ///
    /// ```
    /// use puzzle8_core::Tile;
    ///
    /// assert_eq!(Tile::ALL.len(), 9);
    /// assert_eq!(Tile::ALL[0], Tile::BLANK);
    /// assert_eq!(Tile::ALL[8].value(), 8);
    /// ```
    pub const ALL: [Self; 9] = {
        let mut all = [Self(0); 9];
        let mut i = 0;
        #[allow(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a tile from a value in the range 0-8.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-8.
    ///
    /// ```should_panic
    /// use puzzle8_core::Tile;
    ///
    /// let _ = Tile::new(9);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value < 9, "Invalid tile value");
        Self(value)
    }

    /// Returns the numeric value of this tile (0-8).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` if this is the blank slot.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// Parses a tile from its digit character `'0'`-`'8'`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='8' => Some(Self(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// Returns the digit character of this tile.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.value()
    }
}

impl From<Tile> for i32 {
    fn from(tile: Tile) -> i32 {
        i32::from(tile.value())
    }
}

/// Error returned when an integer is not a valid tile value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("tile value out of range: {value}")]
pub struct TileRangeError {
    /// The rejected value.
    pub value: i32,
}

impl TryFrom<i32> for Tile {
    type Error = TileRangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if v < 9 => Ok(Self(v)),
            _ => Err(TileRangeError { value }),
        }
    }
}
