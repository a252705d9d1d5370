//! Guided replay: tracking sub-goals while a move trace is replayed.

use puzzle8_core::{MoveSequence, ProblemSpace as _, PuzzleState, Replay};

/// A move trace replayed against an ordered list of sub-goals.
///
/// Sub-goals are reached in order. After the start and after every applied
/// move, the current sub-goal is checked with an exact distance test; when it
/// holds, the sub-goal is recorded as reached and the next one becomes
/// current. One state may satisfy several consecutive sub-goals at once.
///
/// # Examples
///
/// ```
/// use puzzle8_cli::GuidedReplay;
/// use puzzle8_core::PuzzleState;
///
/// let start: PuzzleState = "123 456 078".parse()?;
/// let goals = ["123 456 7??".parse()?, PuzzleState::GOAL];
/// let guided = GuidedReplay::run(start, &goals, &"RR".parse().unwrap());
///
/// assert!(guided.all_reached());
/// assert_eq!(guided.reached_at(), &[1, 2]);
/// # Ok::<(), puzzle8_core::InvalidStateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GuidedReplay {
    goals: Vec<PuzzleState>,
    replay: Replay,
    reached_at: Vec<usize>,
}

impl GuidedReplay {
    /// Replays `moves` from `start`, checking `goals` in order.
    #[must_use]
    pub fn run(start: PuzzleState, goals: &[PuzzleState], moves: &MoveSequence) -> Self {
        let replay = Replay::run(start, moves);
        let mut reached_at = Vec::with_capacity(goals.len());
        advance(goals, &mut reached_at, &start, 0);
        for (i, step) in replay.steps().iter().enumerate() {
            if step.is_applied() {
                advance(goals, &mut reached_at, &step.state, i + 1);
            }
        }
        Self {
            goals: goals.to_vec(),
            replay,
            reached_at,
        }
    }

    /// Returns the sub-goals in order.
    #[must_use]
    pub fn goals(&self) -> &[PuzzleState] {
        &self.goals
    }

    /// Returns the underlying replay.
    #[must_use]
    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    /// Returns, for every reached sub-goal, the number of replayed steps
    /// after which it was reached (0 for the start state).
    #[must_use]
    pub fn reached_at(&self) -> &[usize] {
        &self.reached_at
    }

    /// Returns `true` if every sub-goal was reached.
    #[must_use]
    pub fn all_reached(&self) -> bool {
        self.reached_at.len() == self.goals.len()
    }

    /// Returns the index of the sub-goal that is current after `step`
    /// replayed steps, or `None` once every sub-goal was reached.
    #[must_use]
    pub fn current_goal_after(&self, step: usize) -> Option<usize> {
        let done = self.reached_at.iter().filter(|&&at| at <= step).count();
        (done < self.goals.len()).then_some(done)
    }
}

fn advance(goals: &[PuzzleState], reached_at: &mut Vec<usize>, state: &PuzzleState, step: usize) {
    while let Some(goal) = goals.get(reached_at.len()) {
        if !state.is_goal(goal) {
            break;
        }
        log::info!("reached sub-goal #{} after {step} moves", reached_at.len() + 1);
        reached_at.push(step);
    }
}
