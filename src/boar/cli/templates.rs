//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone files and embedded
//! at compile time, so layout can be edited and diffed without touching Rust.
//!
//! Templates are rendered with `trim_blocks` and `lstrip_blocks` on: a line holding only a
//! block tag produces no output, and every other line break in the file is a line break in
//! the output. Widths, padding and truncation are computed in Rust and handed in as ready
//! strings; templates only pick styles.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const CHANGES_TEMPLATE: &str = include_str!("templates/changes.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const HISTORY_TEMPLATE: &str = include_str!("templates/history.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
