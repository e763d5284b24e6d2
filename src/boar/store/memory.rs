use super::{DataStore, InitReport};
use crate::config::BoarConfig;
use crate::error::Result;
use crate::model::Book;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: Option<Book>,
    config: Option<BoarConfig>,
    tomes: BTreeMap<usize, (String, DateTime<Utc>)>,
    export: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last exported page, if any.
    pub fn exported(&self) -> Option<&str> {
        self.export.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn ensure_initialized(&mut self) -> Result<InitReport> {
        let mut report = InitReport::default();
        if self.book.is_none() {
            self.book = Some(Book::template());
            report.created.push("book".to_string());
        }
        if self.config.is_none() {
            self.config = Some(BoarConfig::default());
            report.created.push("conf".to_string());
        }
        Ok(report)
    }

    fn load_book(&self) -> Result<Book> {
        Ok(self.book.clone().unwrap_or_default())
    }

    fn save_book(&mut self, book: &Book) -> Result<()> {
        self.book = Some(book.clone());
        Ok(())
    }

    fn load_config(&self) -> Result<BoarConfig> {
        Ok(self.config.clone().unwrap_or_default())
    }

    fn save_config(&mut self, config: &BoarConfig) -> Result<()> {
        self.config = Some(config.clone());
        Ok(())
    }

    fn tome_numbers(&self) -> Result<Vec<usize>> {
        Ok(self.tomes.keys().copied().collect())
    }

    fn read_tome(&self, number: usize) -> Result<Option<Vec<u8>>> {
        Ok(self
            .tomes
            .get(&number)
            .map(|(content, _)| content.as_bytes().to_vec()))
    }

    fn write_tome(&mut self, number: usize, content: &str) -> Result<()> {
        self.tomes
            .insert(number, (content.to_string(), Utc::now()));
        Ok(())
    }

    fn rename_tome(&mut self, from: usize, to: usize) -> Result<()> {
        if let Some(tome) = self.tomes.remove(&from) {
            self.tomes.insert(to, tome);
        }
        Ok(())
    }

    fn remove_tome(&mut self, number: usize) -> Result<()> {
        self.tomes.remove(&number);
        Ok(())
    }

    fn tome_modified(&self, number: usize) -> Result<Option<DateTime<Utc>>> {
        Ok(self.tomes.get(&number).map(|(_, at)| *at))
    }

    fn write_export(&mut self, html: &str) -> Result<PathBuf> {
        self.export = Some(html.to_string());
        Ok(PathBuf::from("boar.html"))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Category, Item};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// A store holding the template book and default config.
        pub fn new() -> Self {
            let mut store = InMemoryStore::new();
            store.ensure_initialized().unwrap();
            Self { store }
        }

        pub fn empty() -> Self {
            let mut store = InMemoryStore::new();
            store.save_book(&Book::default()).unwrap();
            store.save_config(&BoarConfig::default()).unwrap();
            Self { store }
        }

        pub fn with_book(mut self, book: Book) -> Self {
            self.store.save_book(&book).unwrap();
            self
        }

        /// Appends a category holding items named `items`, without descriptions or links.
        pub fn with_category(mut self, name: &str, short: &str, items: &[&str]) -> Self {
            let mut category = Category::new(name, short);
            category.items = items.iter().map(|name| Item::new(*name)).collect();
            let book = self.store.load_book().unwrap().with_category(category);
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_config(mut self, configure: impl FnOnce(&mut BoarConfig)) -> Self {
            let mut config = self.store.load_config().unwrap();
            configure(&mut config);
            self.store.save_config(&config).unwrap();
            self
        }

        /// Writes `book` as tome `number`, bypassing the rotation logic.
        pub fn with_tome(mut self, number: usize, book: &Book) -> Self {
            self.store
                .write_tome(number, &book.to_json().unwrap())
                .unwrap();
            self
        }
    }
}
