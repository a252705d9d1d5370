//! Errors reported by the `puzzle8` commands.

use std::io;

use puzzle8_core::Rejection;

/// Errors that abort a command.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// Writing to the output failed.
    #[display("failed to write output: {_0}")]
    Io(#[from] io::Error),
    /// The start state cannot be moved.
    #[display("cannot start from this state: {_0}")]
    Start(#[from] Rejection),
}
