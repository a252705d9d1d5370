//! The problem-space contract consumed by generic search engines.
//!
//! A search engine (breadth-first, greedy best-first, A*, ...) only needs three
//! things from a problem: what applying an operation produces, how far two
//! states are from each other, and an estimate used for priority ordering.
//! [`ProblemSpace`] captures exactly that, and [`PuzzleState`] implements it
//! with [`Move`] as the operation type.
//!
//! [`PuzzleState`]: crate::PuzzleState
//! [`Move`]: crate::Move

use std::fmt::Debug;

use crate::{Move, PuzzleState};

/// The result of applying an operation to a state.
///
/// Rejected operations are reported explicitly rather than by handing back the
/// unchanged state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Transition<S> {
    /// The operation was applied and produced a new state.
    Moved(S),
    /// The operation could not be applied; the source state stands.
    Rejected(Rejection),
}

impl<S> Transition<S> {
    /// Returns the produced state, or `None` if the operation was rejected.
    #[must_use]
    pub fn moved(self) -> Option<S> {
        match self {
            Self::Moved(state) => Some(state),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the rejection reason, or `None` if the operation was applied.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Moved(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }

    /// Returns the produced state, or `current` if the operation was rejected.
    #[must_use]
    pub fn unwrap_or(self, current: S) -> S {
        self.moved().unwrap_or(current)
    }
}

/// Why an operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// The blank is already on the border in the requested direction.
    #[display("blank is at the edge")]
    AtEdge,
    /// The state is a wildcard pattern, which only serves as a reference.
    #[display("state contains wildcards")]
    WildcardPattern,
    /// The integer operation code does not name a move.
    #[display("unknown move code {code}")]
    UnknownMove {
        /// The rejected code.
        code: i32,
    },
}

/// A state space that a generic search engine can explore.
///
/// # Examples
///
/// ```
/// use puzzle8_core::{ProblemSpace, PuzzleState};
///
/// fn nearest_successor<P: ProblemSpace>(state: &P, goal: &P) -> Option<P::Operation> {
///     state
///         .expand()
///         .into_iter()
///         .min_by_key(|(_, next)| next.heuristic(goal))
///         .map(|(op, _)| op)
/// }
///
/// let start: PuzzleState = "123 456 708".parse()?;
/// let op = nearest_successor(&start, &PuzzleState::GOAL);
/// assert_eq!(op, Some(puzzle8_core::Move::Right));
/// # Ok::<(), puzzle8_core::InvalidStateError>(())
/// ```
pub trait ProblemSpace: Sized {
    /// The operation type understood by [`predict`](Self::predict).
    type Operation: Copy + Debug + 'static;

    /// Returns every operation the engine may try, in a fixed order.
    fn operations() -> &'static [Self::Operation];

    /// Applies an operation without mutating `self`.
    fn predict(&self, operation: Self::Operation) -> Transition<Self>;

    /// Returns the exact distance to `other`, used for goal tests.
    ///
    /// Wildcards on `other` are honoured; wildcards on `self` are not.
    fn distance_to(&self, other: &Self) -> u32;

    /// Returns the estimated cost of reaching `other`, used for priority
    /// ordering in best-first searches.
    fn heuristic(&self, other: &Self) -> u32;

    /// Returns `true` if `self` satisfies `goal`.
    fn is_goal(&self, goal: &Self) -> bool {
        self.distance_to(goal) == 0
    }

    /// Returns every accepted `(operation, next state)` pair, in
    /// [`operations`](Self::operations) order.
    fn expand(&self) -> Vec<(Self::Operation, Self)> {
        Self::operations()
            .iter()
            .filter_map(|&op| self.predict(op).moved().map(|next| (op, next)))
            .collect()
    }
}

impl ProblemSpace for PuzzleState {
    type Operation = Move;

    fn operations() -> &'static [Move] {
        &Move::ALL
    }

    fn predict(&self, operation: Move) -> Transition<Self> {
        self.apply(operation)
    }

    fn distance_to(&self, other: &Self) -> u32 {
        PuzzleState::distance_to(self, other)
    }

    fn heuristic(&self, other: &Self) -> u32 {
        PuzzleState::heuristic(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic_goal_test<P: ProblemSpace>(state: &P, goal: &P) -> bool {
        state.is_goal(goal)
    }

    #[test]
    fn test_transition_accessors() {
        let moved: Transition<u8> = Transition::Moved(3);
        assert!(moved.is_moved());
        assert_eq!(moved.moved(), Some(3));
        assert_eq!(moved.rejection(), None);
        assert_eq!(moved.unwrap_or(7), 3);

        let rejected: Transition<u8> = Transition::Rejected(Rejection::AtEdge);
        assert!(rejected.is_rejected());
        assert_eq!(rejected.moved(), None);
        assert_eq!(rejected.rejection(), Some(Rejection::AtEdge));
        assert_eq!(rejected.unwrap_or(7), 7);
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(Rejection::AtEdge.to_string(), "blank is at the edge");
        assert_eq!(
            Rejection::UnknownMove { code: 9 }.to_string(),
            "unknown move code 9"
        );
    }

    #[test]
    fn test_puzzle_operations_are_all_moves() {
        assert_eq!(<PuzzleState as ProblemSpace>::operations(), &Move::ALL);
    }

    #[test]
    fn test_expand_from_corner_and_center() {
        // Blank in the bottom-right corner: only UP and LEFT are accepted
        let corner = PuzzleState::GOAL;
        let ops: Vec<_> = corner.expand().into_iter().map(|(op, _)| op).collect();
        assert_eq!(ops, vec![Move::Up, Move::Left]);

        let center: PuzzleState = "123 405 678".parse().unwrap();
        assert_eq!(center.expand().len(), 4);
    }

    #[test]
    fn test_predict_matches_apply() {
        let state: PuzzleState = "123 405 678".parse().unwrap();
        for mv in Move::ALL {
            assert_eq!(ProblemSpace::predict(&state, mv), state.apply(mv));
        }
    }

    #[test]
    fn test_is_goal_honours_wildcards() {
        let pattern = PuzzleState::from_cells_with_wildcards(&[1, 2, 3, -1, -1, -1, -1, -1, -1])
            .unwrap();
        let state: PuzzleState = "123 456 780".parse().unwrap();
        assert!(generic_goal_test(&state, &pattern));
        assert!(!generic_goal_test(&pattern, &state));

        let other: PuzzleState = "213 456 780".parse().unwrap();
        assert!(!generic_goal_test(&other, &pattern));
    }
}
