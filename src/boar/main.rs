//! # Boar CLI
//!
//! The binary is thin: the CLI lives in `cli/`, this file runs it and owns the process exit.
//!
//! Exit codes: `0` on success, when an edit changed nothing, or when the user aborted a
//! prompt. Any other error prints `Error: <message>` to stderr and exits with `1`.

use boar::error::BoarError;
use colored::Colorize;

mod cli;

fn main() {
    match cli::run() {
        Ok(()) => {}
        Err(BoarError::NoChanges { skipped }) => {
            for note in skipped {
                println!("{}", note.yellow());
            }
            println!("{}", "No changes made".yellow());
        }
        Err(BoarError::Aborted) => println!("{}", "Aborted".dimmed()),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}
