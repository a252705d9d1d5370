//! Seeded random walks for producing start states.
//!
//! A scrambled state is always reachable from the state it was scrambled from,
//! since it is produced by sliding moves. The walk never immediately undoes
//! its previous move.

use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64;

use crate::{Move, MoveSequence, PuzzleState, Rejection};

/// A scrambled state together with the walk that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// The seed the walk was drawn from.
    pub seed: u64,
    /// The state at the end of the walk.
    pub state: PuzzleState,
    /// The moves of the walk.
    pub moves: MoveSequence,
}

impl Scramble {
    /// Returns a move trace leading from [`state`](Self::state) back to the
    /// scrambled-from state.
    #[must_use]
    pub fn solution(&self) -> MoveSequence {
        self.moves.inverse()
    }
}

/// Performs a random walk of `steps` moves from `start`.
///
/// The same `seed` always produces the same walk.
///
/// # Errors
///
/// Returns [`Rejection::WildcardPattern`] if `start` has wildcards.
///
/// # Examples
///
/// ```
/// use puzzle8_core::{PuzzleState, scramble};
///
/// let scramble = scramble::scramble(&PuzzleState::GOAL, 20, 42)?;
/// assert_eq!(scramble.moves.len(), 20);
/// assert_eq!(scramble.state.apply_all(&scramble.solution()), PuzzleState::GOAL);
/// # Ok::<(), puzzle8_core::Rejection>(())
/// ```
pub fn scramble(start: &PuzzleState, steps: usize, seed: u64) -> Result<Scramble, Rejection> {
    if start.has_wildcards() {
        return Err(Rejection::WildcardPattern);
    }
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut state = *start;
    let mut moves = MoveSequence::new();
    let mut last: Option<Move> = None;
    for _ in 0..steps {
        let candidates: Vec<(Move, PuzzleState)> = state
            .successors()
            .filter(|&(mv, _)| last != Some(mv.opposite()))
            .collect();
        // Every cell has at least two neighbours, so a candidate always remains.
        let Some(&(mv, next)) = candidates.choose(&mut rng) else {
            break;
        };
        moves.push(mv);
        state = next;
        last = Some(mv);
    }
    Ok(Scramble { seed, state, moves })
}
