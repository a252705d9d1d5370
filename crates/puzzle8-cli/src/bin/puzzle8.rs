//! `puzzle8` command-line driver.
//!
//! # Usage
//!
//! Replay a move trace from the reverse-order start to the solved grid:
//!
//! ```sh
//! cargo run -- replay --moves "ULDR..." --animate
//! ```
//!
//! Guide the replay through sub-goals (`?` marks a wildcard cell):
//!
//! ```sh
//! cargo run -- replay --start 876543210 --goal "123??????" --goal 123456780 --moves "..."
//! ```
//!
//! Inspect a state and compare it with a reference:
//!
//! ```sh
//! cargo run -- inspect --state 123456708 --against 123456780
//! ```
//!
//! Produce a reproducible start state and the trace that solves it:
//!
//! ```sh
//! cargo run -- scramble --steps 40 --seed 7
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to follow sub-goal progress and every step.

use std::{io, process};

use clap::Parser as _;
use puzzle8_cli::Args;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result = {
        let mut out = io::stdout().lock();
        puzzle8_cli::run(&args, &mut out)
    };

    match result {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}
