//! # CLI Behavior
//!
//! The terminal client for boar. It is the only place that reads stdin, writes stdout and
//! picks colors; everything it does goes through [`boar::api::BoarApi`].
//!
//! Running `boar` with no arguments lists the book.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: dispatch and per-command handlers
//! - `prompt`: asking for parameters missing from the command line
//! - `render`: turning results into text
//! - `styles`: the terminal theme and the template `style` filter
//! - `templates`: embedded output templates

mod commands;
mod prompt;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
