//! Core data structures for the 8-puzzle.
//!
//! This crate models the 3×3 sliding tile puzzle as a problem space for generic
//! search engines. It answers two questions: what does applying a move
//! produce, and how far apart are two configurations.
//!
//! # Overview
//!
//! 1. **Board types**
//!    - [`tile`]: tile values 0-8, with 0 as the blank
//!    - [`position`]: cell coordinates and position sets
//!
//! 2. **States and moves**
//!    - [`state`]: [`PuzzleState`], an immutable board configuration that may
//!      contain wildcard cells
//!    - [`moves`]: [`Move`] and [`MoveSequence`] traces
//!
//! 3. **Search integration**
//!    - [`problem`]: the [`ProblemSpace`] contract and [`Transition`] results
//!    - [`replay`]: applying move traces and recording rejected moves
//!    - [`scramble`]: seeded random walks for producing start states
//!
//! # Examples
//!
//! ```
//! use puzzle8_core::{Move, PuzzleState};
//!
//! let start: PuzzleState = "123 456 708".parse()?;
//! let next = start.apply(Move::Right).moved().expect("blank can move right");
//!
//! assert_eq!(next, PuzzleState::GOAL);
//! assert_eq!(start.distance_to(&PuzzleState::GOAL), 2);
//! assert_eq!(start.heuristic(&PuzzleState::GOAL), 2);
//!
//! // Wildcard goals only constrain the cells they name
//! let top_row: PuzzleState = "123 ??? ???".parse()?;
//! assert_eq!(start.distance_to(&top_row), 0);
//! # Ok::<(), puzzle8_core::InvalidStateError>(())
//! ```

pub mod moves;
pub mod position;
pub mod problem;
pub mod replay;
pub mod scramble;
pub mod state;
pub mod tile;

// Re-export commonly used types
pub use self::{
    moves::{Move, MoveSequence, ParseMoveError},
    position::{Position, PositionSet},
    problem::{ProblemSpace, Rejection, Transition},
    replay::{Replay, ReplayStep},
    scramble::Scramble,
    state::{InvalidStateError, PuzzleState, WILDCARD},
    tile::{Tile, TileRangeError},
};
