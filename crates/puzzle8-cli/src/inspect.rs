//! The `inspect` command.

use std::io::Write;

use puzzle8_core::{ProblemSpace as _, PuzzleState};

use crate::{CliError, InspectArgs, Outcome, write_grid};

pub(crate) fn run<W: Write>(args: &InspectArgs, out: &mut W) -> Result<Outcome, CliError> {
    let state = &args.state;

    writeln!(out, "State:")?;
    write_grid(out, state, "  ")?;
    writeln!(out)?;

    writeln!(out, "Wildcards:")?;
    let wildcards = state.wildcards();
    if wildcards.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        let cells: Vec<String> = wildcards.iter().map(|pos| pos.to_string()).collect();
        writeln!(out, "  {}", cells.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "Successors:")?;
    let successors = state.expand();
    if successors.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (mv, next) in successors {
        writeln!(out, "  {mv}")?;
        write_grid(out, &next, "    ")?;
    }

    if let Some(against) = &args.against {
        writeln!(out)?;
        write_comparison(out, state, against)?;
    }
    Ok(Outcome::Success)
}

fn write_comparison<W: Write>(
    out: &mut W,
    state: &PuzzleState,
    against: &PuzzleState,
) -> Result<(), CliError> {
    let reachable = match state.can_reach(against) {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown",
    };
    writeln!(out, "Against {against:#}:")?;
    writeln!(out, "  distance: {}", state.distance_to(against))?;
    writeln!(out, "  heuristic: {}", state.heuristic(against))?;
    writeln!(out, "  goal: {}", state.is_goal(against))?;
    writeln!(out, "  reachable: {reachable}")?;
    Ok(())
}
