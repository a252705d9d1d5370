//! Command-line arguments of the `puzzle8` binary.

use clap::{Parser, Subcommand};
use puzzle8_core::{MoveSequence, PuzzleState};

/// Replays, inspects and scrambles 8-puzzle states.
///
/// States are written as nine cells in row-major order (`"123456780"`,
/// `"1 2 3 | 4 5 6 | 7 8 0"`); `0` is the blank and `?` marks a wildcard cell.
/// Moves slide the blank and are written as names or letters
/// (`"UP, LEFT"`, `"ULDR"`).
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `puzzle8` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replay a move trace through guided sub-goals.
    Replay(ReplayArgs),
    /// Print a state, its successors and its distance to another state.
    Inspect(InspectArgs),
    /// Produce a reachable start state by a seeded random walk.
    Scramble(ScrambleArgs),
}

/// Arguments of `puzzle8 replay`.
#[derive(Debug, clap::Args)]
pub struct ReplayArgs {
    /// Start state.
    #[arg(long, value_name = "STATE", default_value = "876543210")]
    pub start: PuzzleState,

    /// Guided sub-goal, reached in order (wildcards allowed). Repeatable.
    #[arg(long = "goal", value_name = "STATE", default_value = "123456780")]
    pub goals: Vec<PuzzleState>,

    /// Move trace to replay.
    #[arg(long, value_name = "MOVES")]
    pub moves: MoveSequence,

    /// Redraw the grid after every move.
    #[arg(long)]
    pub animate: bool,

    /// Pause between animation frames, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 50)]
    pub delay_ms: u64,
}

/// Arguments of `puzzle8 inspect`.
#[derive(Debug, clap::Args)]
pub struct InspectArgs {
    /// State to inspect (wildcards allowed).
    #[arg(long, value_name = "STATE")]
    pub state: PuzzleState,

    /// Reference state to measure against (wildcards allowed).
    #[arg(long, value_name = "STATE")]
    pub against: Option<PuzzleState>,
}

/// Arguments of `puzzle8 scramble`.
#[derive(Debug, clap::Args)]
pub struct ScrambleArgs {
    /// State the walk starts from.
    #[arg(long, value_name = "STATE", default_value = "123456780")]
    pub from: PuzzleState,

    /// Number of moves in the walk.
    #[arg(long, value_name = "COUNT", default_value_t = 30)]
    pub steps: usize,

    /// Seed of the walk; drawn at random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}
