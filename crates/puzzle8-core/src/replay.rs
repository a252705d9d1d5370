//! Replaying move traces.

use crate::{Move, MoveSequence, PuzzleState, Rejection, Transition};

/// One replayed move and the state it left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStep {
    /// The move that was attempted.
    pub mv: Move,
    /// The state after the move; unchanged from the previous step if the move
    /// was rejected.
    pub state: PuzzleState,
    /// Why the move was rejected, if it was.
    pub rejection: Option<Rejection>,
}

impl ReplayStep {
    /// Returns `true` if the move was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.rejection.is_none()
    }
}

/// The result of applying a move trace to a start state.
///
/// # Examples
///
/// ```
/// use puzzle8_core::{PuzzleState, Replay};
///
/// let start: PuzzleState = "123 456 078".parse()?;
/// let replay = Replay::run(start, &"RIGHT RIGHT RIGHT".parse().unwrap());
///
/// assert_eq!(replay.final_state(), PuzzleState::GOAL);
/// assert_eq!(replay.applied().len(), 2);
/// assert_eq!(replay.rejected_count(), 1);
/// # Ok::<(), puzzle8_core::InvalidStateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    start: PuzzleState,
    steps: Vec<ReplayStep>,
}

impl Replay {
    /// Applies every move of `moves` to `start` in order.
    ///
    /// Rejected moves leave the state unchanged and are recorded as rejected
    /// steps.
    #[must_use]
    pub fn run(start: PuzzleState, moves: &MoveSequence) -> Self {
        let mut state = start;
        let steps = moves
            .iter()
            .map(|mv| {
                let rejection = match state.apply(mv) {
                    Transition::Moved(next) => {
                        state = next;
                        None
                    }
                    Transition::Rejected(reason) => Some(reason),
                };
                ReplayStep {
                    mv,
                    state,
                    rejection,
                }
            })
            .collect();
        Self { start, steps }
    }

    /// Returns the start state.
    #[must_use]
    pub fn start(&self) -> PuzzleState {
        self.start
    }

    /// Returns the replayed steps in order.
    #[must_use]
    pub fn steps(&self) -> &[ReplayStep] {
        &self.steps
    }

    /// Returns the state after the last step.
    #[must_use]
    pub fn final_state(&self) -> PuzzleState {
        self.steps.last().map_or(self.start, |step| step.state)
    }

    /// Returns the moves that were actually applied.
    #[must_use]
    pub fn applied(&self) -> MoveSequence {
        self.steps
            .iter()
            .filter(|step| step.is_applied())
            .map(|step| step.mv)
            .collect()
    }

    /// Returns the number of rejected moves.
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.steps.iter().filter(|step| !step.is_applied()).count()
    }
}
