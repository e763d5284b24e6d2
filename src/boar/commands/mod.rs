//! # Commands
//!
//! One module per user-facing operation. Mutating commands are pure: they take the loaded
//! [`Book`] and their already resolved parameters and return a [`CmdResult`] whose `book` is
//! the replacement to persist. Persisting (and pushing history) is left to
//! [`crate::api::BoarApi`], which is the only caller of these functions outside tests.
//!
//! Commands never print. What happened is described by `changes` and `messages` and the CLI
//! decides how to show it.

use crate::config::ConfigKey;
use crate::history::TomeInfo;
use crate::model::Book;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod remove;
pub mod reset;
pub mod undo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One applied field change, old value to new value. `None` means absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub field: &'static str,
    pub old: Option<String>,
    pub new: Option<String>,
}

impl Change {
    pub fn new(field: &'static str, old: Option<String>, new: Option<String>) -> Self {
        Self { field, old, new }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The book to persist. `None` for read-only commands.
    pub book: Option<Book>,
    pub listing: Option<list::Listing>,
    pub changes: Vec<Change>,
    pub tomes: Vec<TomeInfo>,
    pub config_entries: Vec<(ConfigKey, String)>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_book(mut self, book: Book) -> Self {
        self.book = Some(book);
        self
    }

    pub fn with_listing(mut self, listing: list::Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_changes(mut self, changes: Vec<Change>) -> Self {
        self.changes = changes;
        self
    }

    pub fn with_tomes(mut self, tomes: Vec<TomeInfo>) -> Self {
        self.tomes = tomes;
        self
    }

    pub fn with_config_entries(mut self, entries: Vec<(ConfigKey, String)>) -> Self {
        self.config_entries = entries;
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// What an edit does to an optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Keep,
    Clear,
    Set(String),
}

impl FieldEdit {
    /// Blank input keeps the value, the `clear` sentinel (any case) removes it.
    pub fn from_input(input: Option<&str>, clear: &str) -> Self {
        match input.map(str::trim) {
            None | Some("") => FieldEdit::Keep,
            Some(value) if value.to_lowercase() == clear.trim().to_lowercase() => {
                FieldEdit::Clear
            }
            Some(value) => FieldEdit::Set(value.to_string()),
        }
    }

    /// Applies the edit, returning the change if the value actually differs.
    pub(crate) fn apply(self, field: &'static str, value: &mut Option<String>) -> Option<Change> {
        let new = match self {
            FieldEdit::Keep => return None,
            FieldEdit::Clear => None,
            FieldEdit::Set(v) => Some(v),
        };
        if *value == new {
            return None;
        }
        let old = std::mem::replace(value, new.clone());
        Some(Change::new(field, old, new))
    }
}

/// Trims the input and drops it if nothing is left.
pub(crate) fn non_blank(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
