//! The `scramble` command.

use std::io::Write;

use puzzle8_core::scramble;

use crate::{CliError, Outcome, ScrambleArgs, write_grid};

pub(crate) fn run<W: Write>(args: &ScrambleArgs, out: &mut W) -> Result<Outcome, CliError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("scrambling {} moves from {:#}, seed={seed}", args.steps, args.from);
    let scramble = scramble::scramble(&args.from, args.steps, seed)?;

    writeln!(out, "Seed:")?;
    writeln!(out, "  {}", scramble.seed)?;
    writeln!(out)?;

    writeln!(out, "Start:")?;
    writeln!(out, "  {:#}", scramble.state)?;
    write_grid(out, &scramble.state, "  ")?;
    writeln!(out)?;

    writeln!(out, "Walk:")?;
    writeln!(out, "  {}", scramble.moves)?;
    writeln!(out)?;

    let solution = scramble.solution();
    writeln!(out, "Solution:")?;
    writeln!(out, "  {solution}")?;
    writeln!(out)?;

    writeln!(out, "Replay with:")?;
    writeln!(
        out,
        "  puzzle8 replay --start {:#} --goal {:#} --moves \"{solution}\"",
        scramble.state, args.from
    )?;
    Ok(Outcome::Success)
}
