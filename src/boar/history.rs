//! # History
//!
//! Every save pushes the book being replaced onto a bounded stack of snapshots called tomes.
//! `tome1` is always the most recent previous version and `tome<history length>` the oldest
//! one kept.
//!
//! Pushing (before each save, with a retention of `n`):
//!
//! ```text
//! tome1 tome2 ... tome(n-1) tome(n)      before
//!   |     |          |        x          tome(n) and above are discarded
//! tome2 tome3 ... tome(n)                shifted up, highest first
//! tome1 = current book
//! ```
//!
//! Undoing `d` steps restores `tome<d>` as the live book, drops tomes `1..=d` and moves every
//! older tome `k` down to `k - d`, so a later undo keeps walking back in time.
//!
//! A retention of 0 disables history entirely. Both the live book and the tomes are written
//! with [`Book::to_json`], which is what makes push-then-undo restore the exact same bytes.

use crate::error::{BoarError, Result};
use crate::model::Book;
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use tracing::debug;

/// What a tome contains, as far as a listing cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TomeState {
    Readable { categories: usize, items: usize },
    Corrupt(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomeInfo {
    pub number: usize,
    pub modified: Option<DateTime<Utc>>,
    pub state: TomeState,
}

/// Pushes `current` as tome 1, keeping at most `history_length` tomes.
pub fn snapshot_before_save<S: DataStore>(
    store: &mut S,
    current: &Book,
    history_length: usize,
) -> Result<()> {
    if history_length == 0 {
        return Ok(());
    }

    let numbers = store.tome_numbers()?;
    for &number in numbers.iter().filter(|n| **n >= history_length) {
        store.remove_tome(number)?;
    }
    // Highest first so a rename never lands on a tome that still has to move.
    for &number in numbers.iter().rev().filter(|n| **n < history_length) {
        store.rename_tome(number, number + 1)?;
    }

    store.write_tome(1, &current.to_json()?)?;
    debug!(history_length, "pushed tome1");
    Ok(())
}

/// Parses the user supplied undo depth. No input means one step.
pub fn parse_depth(input: Option<&str>) -> Result<usize> {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(1);
    };
    match raw.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        // Too many digits to count: a positive depth no tome can reach.
        Err(_) if raw.chars().all(|c| c.is_ascii_digit()) && raw.chars().any(|c| c != '0') => {
            Ok(usize::MAX)
        }
        _ => Err(BoarError::InvalidDepth(raw.to_string())),
    }
}

/// Restores tome `depth` as the live book and renumbers the remaining history.
///
/// The tome is read and parsed before anything is written, so a missing or corrupt tome
/// leaves both the book and the history untouched.
pub fn undo<S: DataStore>(store: &mut S, depth: usize) -> Result<Book> {
    if depth == 0 {
        return Err(BoarError::InvalidDepth(depth.to_string()));
    }

    let content = store
        .read_tome(depth)?
        .ok_or(BoarError::TomeNotFound(depth))?;
    let book = Book::from_slice(&content).map_err(|e| BoarError::TomeCorrupt {
        depth,
        reason: e.to_string(),
    })?;

    store.save_book(&book)?;

    let numbers = store.tome_numbers()?;
    for &number in numbers.iter().filter(|n| **n <= depth) {
        store.remove_tome(number)?;
    }
    // Lowest first, the targets below are already free.
    for &number in numbers.iter().filter(|n| **n > depth) {
        store.rename_tome(number, number - depth)?;
    }

    debug!(depth, "restored tome");
    Ok(book)
}

/// Lists the retained tomes, newest first. Unreadable tomes are reported, not fatal.
pub fn list_tomes<S: DataStore>(store: &S) -> Result<Vec<TomeInfo>> {
    let mut tomes = Vec::new();
    for number in store.tome_numbers()? {
        let state = match store.read_tome(number)? {
            Some(content) => match Book::from_slice(&content) {
                Ok(book) => TomeState::Readable {
                    categories: book.len(),
                    items: book.item_count(),
                },
                Err(e) => TomeState::Corrupt(e.to_string()),
            },
            None => continue,
        };
        tomes.push(TomeInfo {
            number,
            modified: store.tome_modified(number)?,
            state,
        });
    }
    Ok(tomes)
}
