//! The `replay` command.

use std::{io::Write, thread, time::Duration};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use puzzle8_core::{PuzzleState, Rejection, ReplayStep};

use crate::{CliError, GuidedReplay, Outcome, ReplayArgs, write_grid};

pub(crate) fn run<W: Write>(args: &ReplayArgs, out: &mut W) -> Result<Outcome, CliError> {
    if args.start.has_wildcards() {
        return Err(Rejection::WildcardPattern.into());
    }

    writeln!(out, "Start:")?;
    write_grid(out, &args.start, "  ")?;
    writeln!(out)?;
    writeln!(out, "Goals:")?;
    for (i, goal) in args.goals.iter().enumerate() {
        writeln!(out, "  #{} {goal:#}", i + 1)?;
    }
    writeln!(out)?;
    warn_unreachable(out, &args.start, &args.goals)?;

    log::info!(
        "replaying {} moves through {} sub-goals",
        args.moves.len(),
        args.goals.len()
    );
    let guided = GuidedReplay::run(args.start, &args.goals, &args.moves);

    let steps = guided.replay().steps();
    for (i, step) in steps.iter().enumerate() {
        match step.rejection {
            Some(reason) => log::warn!("move {} ({}) rejected: {reason}", i + 1, step.mv),
            None => log::debug!("move {} ({}) -> {:#}", i + 1, step.mv, step.state),
        }
        if args.animate {
            draw_frame(out, &guided, i, step)?;
            thread::sleep(Duration::from_millis(args.delay_ms));
        }
    }

    write_summary(out, &guided)?;

    if guided.all_reached() {
        Ok(Outcome::Success)
    } else {
        log::warn!(
            "{} of {} sub-goals reached",
            guided.reached_at().len(),
            guided.goals().len()
        );
        Ok(Outcome::GoalsMissed)
    }
}

fn warn_unreachable<W: Write>(
    out: &mut W,
    start: &PuzzleState,
    goals: &[PuzzleState],
) -> Result<(), CliError> {
    for (i, goal) in goals.iter().enumerate() {
        if start.can_reach(goal) == Some(false) {
            log::warn!("sub-goal #{} {goal:#} has the wrong parity", i + 1);
            writeln!(
                out,
                "warning: sub-goal #{} {goal:#} is not reachable from the start",
                i + 1
            )?;
        }
    }
    Ok(())
}

fn draw_frame<W: Write>(
    out: &mut W,
    guided: &GuidedReplay,
    index: usize,
    step: &ReplayStep,
) -> Result<(), CliError> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    let total = guided.replay().steps().len();
    match step.rejection {
        Some(reason) => writeln!(out, "{}/{total} {} (rejected: {reason})", index + 1, step.mv)?,
        None => writeln!(out, "{}/{total} {}", index + 1, step.mv)?,
    }
    write_grid(out, &step.state, "")?;
    if let Some(goal) = guided.current_goal_after(index + 1) {
        writeln!(
            out,
            "sub-goal #{}: distance {}",
            goal + 1,
            step.state.distance_to(&guided.goals()[goal])
        )?;
    }
    out.flush()?;
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, guided: &GuidedReplay) -> Result<(), CliError> {
    let replay = guided.replay();
    let final_state = replay.final_state();

    writeln!(out, "FINAL RESULT")?;
    write_grid(out, &final_state, "  ")?;
    writeln!(out)?;

    let applied = replay.applied();
    writeln!(out, "ALL STEPS")?;
    if applied.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        writeln!(out, "  {applied}")?;
    }
    writeln!(out, "  total: {}", applied.len())?;
    let rejected = replay.rejected_count();
    if rejected > 0 {
        writeln!(out, "  rejected: {rejected}")?;
    }
    writeln!(out)?;

    writeln!(out, "Goals:")?;
    for (i, goal) in guided.goals().iter().enumerate() {
        let distance = final_state.distance_to(goal);
        let heuristic = final_state.heuristic(goal);
        match guided.reached_at().get(i) {
            Some(step) => writeln!(
                out,
                "  #{} {goal:#}: reached after {step} moves (distance {distance}, heuristic {heuristic})",
                i + 1
            )?,
            None => writeln!(
                out,
                "  #{} {goal:#}: not reached (distance {distance}, heuristic {heuristic})",
                i + 1
            )?,
        }
    }
    Ok(())
}
