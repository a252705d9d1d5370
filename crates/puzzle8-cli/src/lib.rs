//! Console driver for the 8-puzzle.
//!
//! The `puzzle8` binary has three commands:
//!
//! - `replay`: replays a move trace from a start state through an ordered list
//!   of guided sub-goals and prints the final grid and the applied trace,
//!   optionally animating every step ([`GuidedReplay`]).
//! - `inspect`: prints a state, its successors and, against a reference, the
//!   exact distance, the heuristic and reachability.
//! - `scramble`: produces a reachable start state by a seeded random walk.
//!
//! Output is written to any [`Write`]; the binary passes standard output.
//!
//! [`Write`]: std::io::Write

use std::io::{self, Write};

use puzzle8_core::PuzzleState;

pub use self::{
    args::{Args, Command, InspectArgs, ReplayArgs, ScrambleArgs},
    error::CliError,
    guide::GuidedReplay,
};

pub mod args;
mod error;
mod guide;
mod inspect;
mod replay;
mod scramble;

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did everything it was asked to.
    Success,
    /// A replay ended without reaching every sub-goal.
    GoalsMissed,
}

impl Outcome {
    /// Returns the process exit status for this outcome.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::GoalsMissed => 1,
        }
    }
}

/// Runs the command selected by `args`, writing its report to `out`.
///
/// # Errors
///
/// Returns [`CliError`] if writing fails or the command cannot start from the
/// given state.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<Outcome, CliError> {
    let outcome = match &args.command {
        Command::Replay(args) => replay::run(args, out)?,
        Command::Inspect(args) => inspect::run(args, out)?,
        Command::Scramble(args) => scramble::run(args, out)?,
    };
    out.flush()?;
    Ok(outcome)
}

/// Writes the three rows of `state`, each prefixed by `indent`.
fn write_grid<W: Write>(out: &mut W, state: &PuzzleState, indent: &str) -> io::Result<()> {
    for row in state.to_string().lines() {
        writeln!(out, "{indent}{row}")?;
    }
    Ok(())
}
