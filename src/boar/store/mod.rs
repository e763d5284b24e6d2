//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of boar touches persisted state. Commands
//! never see paths: they get a loaded [`Book`] and [`BoarConfig`] and hand back a new book,
//! and the history module moves tomes around through the tome operations below.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the data directory on disk
//! - [`memory::InMemoryStore`]: no persistence, used by unit tests (see `memory::fixtures`)
//!
//! ## Storage Format
//!
//! ```text
//! ~/.boar/
//! ├── book            # the live book (JSON array of categories)
//! ├── conf            # configuration (JSON object)
//! ├── boar.html       # last export
//! └── history/
//!     ├── tome1       # most recent previous book
//!     └── tomeN       # oldest retained version
//! ```
//!
//! Every file is replaced whole on write.

use crate::config::BoarConfig;
use crate::error::Result;
use crate::model::Book;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Report from [`DataStore::ensure_initialized`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// Names of the files or directories that had to be created.
    pub created: Vec<String>,
}

impl InitReport {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }
}

/// Abstract interface over the persisted book, config and history.
pub trait DataStore {
    /// Create whatever is missing: the history area, a template book and default config.
    fn ensure_initialized(&mut self) -> Result<InitReport>;

    /// Load the live book. A missing book loads as empty.
    fn load_book(&self) -> Result<Book>;

    /// Replace the live book.
    fn save_book(&mut self, book: &Book) -> Result<()>;

    /// Load the configuration. A missing config loads as the defaults.
    fn load_config(&self) -> Result<BoarConfig>;

    fn save_config(&mut self, config: &BoarConfig) -> Result<()>;

    /// Numbers of the tomes currently present, ascending.
    fn tome_numbers(&self) -> Result<Vec<usize>>;

    /// Raw bytes of a tome, `None` if there is no such tome.
    fn read_tome(&self, number: usize) -> Result<Option<Vec<u8>>>;

    fn write_tome(&mut self, number: usize, content: &str) -> Result<()>;

    /// Renumber a tome. Overwrites `to` if it exists.
    fn rename_tome(&mut self, from: usize, to: usize) -> Result<()>;

    fn remove_tome(&mut self, number: usize) -> Result<()>;

    /// When the tome was written, if the store can tell.
    fn tome_modified(&self, number: usize) -> Result<Option<DateTime<Utc>>>;

    /// Write an exported HTML page, returning where it went.
    fn write_export(&mut self, html: &str) -> Result<PathBuf>;
}
