//! # API Facade
//!
//! [`BoarApi`] is the single entry point for every boar operation. It is a thin layer:
//!
//! - loads the book and config from the store
//! - normalizes raw inputs (edit sentinels, export theme names)
//! - dispatches to the command in `commands/*.rs`
//! - persists the new book when a command returns one
//!
//! It never prints and never formats; it returns [`CmdResult`]s.
//!
//! ## Saving
//!
//! Mutating commands are pure and hand back a replacement book. The facade then pushes the
//! book that is currently persisted onto the history and writes the new one:
//!
//! ```text
//! load book -> command -> snapshot_before_save(old book) -> save_book(new book)
//! ```
//!
//! A failing command writes nothing. Commands that manage history themselves (`undo`,
//! `reset`) talk to the store directly.
//!
//! ## Generic Over DataStore
//!
//! - Production: `BoarApi<FileStore>`
//! - Testing: `BoarApi<InMemoryStore>`

use crate::commands::export::ExportTheme;
use crate::commands::{self, CmdResult, FieldEdit};
use crate::config::BoarConfig;
use crate::error::Result;
use crate::history;
use crate::model::Book;
use crate::store::DataStore;
use tracing::info;

pub struct BoarApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> BoarApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn config(&self) -> Result<BoarConfig> {
        self.store.load_config()
    }

    pub fn book(&self) -> Result<Book> {
        self.store.load_book()
    }

    pub fn list(&self, category: Option<&str>) -> Result<CmdResult> {
        let book = self.store.load_book()?;
        let config = self.store.load_config()?;
        commands::list::run(&book, &config, category)
    }

    pub fn categories(&self) -> Result<CmdResult> {
        commands::list::categories(&self.store.load_book()?)
    }

    pub fn add_category(&mut self, name: &str, short: Option<&str>) -> Result<CmdResult> {
        self.mutate(|book, _| commands::add::category(book, name, short))
    }

    pub fn add_item(
        &mut self,
        category: &str,
        name: &str,
        description: Option<&str>,
        link: Option<&str>,
    ) -> Result<CmdResult> {
        self.mutate(|book, _| commands::add::item(book, category, name, description, link))
    }

    pub fn remove_category(&mut self, category: &str) -> Result<CmdResult> {
        self.mutate(|book, _| commands::remove::category(book, category))
    }

    pub fn remove_item(&mut self, category: &str, item: &str) -> Result<CmdResult> {
        self.mutate(|book, _| commands::remove::item(book, category, item))
    }

    pub fn edit_category(
        &mut self,
        category: &str,
        name: Option<&str>,
        short: Option<&str>,
    ) -> Result<CmdResult> {
        self.mutate(|book, _| commands::edit::category(book, category, name, short))
    }

    /// `description` and `link` are raw inputs: blank keeps the value, the configured
    /// `clear` sentinel removes it.
    pub fn edit_item(
        &mut self,
        category: &str,
        item: &str,
        name: Option<&str>,
        description: Option<&str>,
        link: Option<&str>,
    ) -> Result<CmdResult> {
        self.mutate(|book, config| {
            commands::edit::item(
                book,
                category,
                item,
                name,
                FieldEdit::from_input(description, &config.clear),
                FieldEdit::from_input(link, &config.clear),
            )
        })
    }

    pub fn undo(&mut self, depth: Option<&str>) -> Result<CmdResult> {
        commands::undo::run(&mut self.store, depth)
    }

    pub fn history(&self) -> Result<CmdResult> {
        commands::history::run(&self.store)
    }

    pub fn export(&mut self, theme: Option<&str>) -> Result<CmdResult> {
        let theme = theme.map(str::parse::<ExportTheme>).transpose()?;
        let book = self.store.load_book()?;
        let config = self.store.load_config()?;
        commands::export::run(&mut self.store, &book, &config, theme)
    }

    pub fn configure(&mut self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&mut self.store, action)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.store)
    }

    /// Runs a pure command against the persisted book and saves its result, if any.
    fn mutate<F>(&mut self, command: F) -> Result<CmdResult>
    where
        F: FnOnce(&Book, &BoarConfig) -> Result<CmdResult>,
    {
        let current = self.store.load_book()?;
        let config = self.store.load_config()?;
        let result = command(&current, &config)?;

        if let Some(book) = &result.book {
            history::snapshot_before_save(&mut self.store, &current, config.history_length)?;
            self.store.save_book(book)?;
            info!(categories = book.len(), items = book.item_count(), "book saved");
        }
        Ok(result)
    }
}
