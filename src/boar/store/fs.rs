use super::{DataStore, InitReport};
use crate::config::BoarConfig;
use crate::error::{BoarError, Result};
use crate::model::Book;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const BOOK_FILE: &str = "book";
const CONFIG_FILE: &str = "conf";
const HISTORY_DIR: &str = "history";
const EXPORT_FILE: &str = "boar.html";
const TOME_PREFIX: &str = "tome";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn book_path(&self) -> PathBuf {
        self.root.join(BOOK_FILE)
    }

    fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    fn history_dir(&self) -> PathBuf {
        self.root.join(HISTORY_DIR)
    }

    fn tome_path(&self, number: usize) -> PathBuf {
        self.history_dir().join(format!("{}{}", TOME_PREFIX, number))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(BoarError::Io)?;
        }
        Ok(())
    }
}

/// `tome12` -> 12. Anything else in the history directory is ignored, including
/// zero-padded names like `tome01` that `tome_path` would never produce.
fn parse_tome_name(name: &str) -> Option<usize> {
    let digits = name.strip_prefix(TOME_PREFIX)?;
    if digits.is_empty() || digits.starts_with('0') || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok().filter(|n| *n > 0)
}

impl DataStore for FileStore {
    fn ensure_initialized(&mut self) -> Result<InitReport> {
        let mut report = InitReport::default();

        self.ensure_dir(&self.root)?;

        let history = self.history_dir();
        if !history.exists() {
            self.ensure_dir(&history)?;
            report.created.push(format!("{}/", HISTORY_DIR));
        }
        if !self.book_path().exists() {
            self.save_book(&Book::template())?;
            report.created.push(BOOK_FILE.to_string());
        }
        if !self.config_path().exists() {
            self.save_config(&BoarConfig::default())?;
            report.created.push(CONFIG_FILE.to_string());
        }

        if !report.is_empty() {
            debug!(root = %self.root.display(), created = ?report.created, "initialized data directory");
        }
        Ok(report)
    }

    fn load_book(&self) -> Result<Book> {
        let path = self.book_path();
        if !path.exists() {
            return Ok(Book::default());
        }
        let content = fs::read_to_string(&path).map_err(BoarError::Io)?;
        debug!(path = %path.display(), "loaded book");
        Book::from_json(&content)
    }

    fn save_book(&mut self, book: &Book) -> Result<()> {
        self.ensure_dir(&self.root)?;
        fs::write(self.book_path(), book.to_json()?).map_err(BoarError::Io)?;
        debug!(categories = book.len(), "saved book");
        Ok(())
    }

    fn load_config(&self) -> Result<BoarConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(BoarConfig::default());
        }
        let content = fs::read_to_string(path).map_err(BoarError::Io)?;
        BoarConfig::from_json(&content)
    }

    fn save_config(&mut self, config: &BoarConfig) -> Result<()> {
        self.ensure_dir(&self.root)?;
        fs::write(self.config_path(), config.to_json()?).map_err(BoarError::Io)?;
        Ok(())
    }

    fn tome_numbers(&self) -> Result<Vec<usize>> {
        let dir = self.history_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut numbers = Vec::new();
        for entry in fs::read_dir(dir).map_err(BoarError::Io)? {
            let entry = entry.map_err(BoarError::Io)?;
            if let Some(number) = entry.file_name().to_str().and_then(parse_tome_name) {
                numbers.push(number);
            }
        }
        numbers.sort_unstable();
        Ok(numbers)
    }

    fn read_tome(&self, number: usize) -> Result<Option<Vec<u8>>> {
        let path = self.tome_path(number);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(path).map_err(BoarError::Io)?))
    }

    fn write_tome(&mut self, number: usize, content: &str) -> Result<()> {
        self.ensure_dir(&self.history_dir())?;
        fs::write(self.tome_path(number), content).map_err(BoarError::Io)?;
        debug!(tome = number, "wrote tome");
        Ok(())
    }

    fn rename_tome(&mut self, from: usize, to: usize) -> Result<()> {
        fs::rename(self.tome_path(from), self.tome_path(to)).map_err(BoarError::Io)?;
        debug!(from, to, "renumbered tome");
        Ok(())
    }

    fn remove_tome(&mut self, number: usize) -> Result<()> {
        let path = self.tome_path(number);
        if path.exists() {
            fs::remove_file(path).map_err(BoarError::Io)?;
            debug!(tome = number, "removed tome");
        }
        Ok(())
    }

    fn tome_modified(&self, number: usize) -> Result<Option<DateTime<Utc>>> {
        let path = self.tome_path(number);
        if !path.exists() {
            return Ok(None);
        }
        let modified = fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(BoarError::Io)?;
        Ok(Some(DateTime::<Utc>::from(modified)))
    }

    fn write_export(&mut self, html: &str) -> Result<PathBuf> {
        self.ensure_dir(&self.root)?;
        let path = self.root.join(EXPORT_FILE);
        fs::write(&path, html).map_err(BoarError::Io)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("boar"));
        (dir, store)
    }

    #[test]
    fn test_ensure_initialized_creates_layout_once() {
        let (_dir, mut store) = store();

        let report = store.ensure_initialized().unwrap();
        assert_eq!(report.created, vec!["history/", "book", "conf"]);
        assert!(store.root().join("history").is_dir());
        assert_eq!(store.load_book().unwrap(), Book::template());
        assert_eq!(store.load_config().unwrap(), BoarConfig::default());

        let again = store.ensure_initialized().unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn test_missing_files_load_as_defaults() {
        let (_dir, store) = store();
        assert!(store.load_book().unwrap().is_empty());
        assert_eq!(store.load_config().unwrap(), BoarConfig::default());
        assert!(store.tome_numbers().unwrap().is_empty());
    }

    #[test]
    fn test_reads_book_written_by_hand() {
        let (_dir, mut store) = store();
        store.ensure_initialized().unwrap();
        fs::write(
            store.root().join("book"),
            r#"[{"name": "Tools", "short": "tool", "items": [{"name": "fd", "desc": null, "link": null}]}]"#,
        )
        .unwrap();

        let book = store.load_book().unwrap();
        assert_eq!(book.categories()[0].short_code, "tool");
    }

    #[test]
    fn test_corrupt_book_is_an_error() {
        let (_dir, mut store) = store();
        store.ensure_initialized().unwrap();
        fs::write(store.root().join("book"), "not json").unwrap();

        let err = store.load_book().unwrap_err();
        assert!(matches!(err, BoarError::Serialization(_)));
    }

    #[test]
    fn test_tome_operations() {
        let (_dir, mut store) = store();
        store.write_tome(1, "first").unwrap();
        store.write_tome(3, "third").unwrap();
        fs::write(store.root().join("history").join("notes.txt"), "x").unwrap();
        fs::write(store.root().join("history").join("tome0"), "x").unwrap();
        fs::write(store.root().join("history").join("tome03"), "x").unwrap();

        assert_eq!(store.tome_numbers().unwrap(), vec![1, 3]);
        assert_eq!(store.read_tome(3).unwrap().as_deref(), Some(&b"third"[..]));
        assert!(store.read_tome(2).unwrap().is_none());
        assert!(store.tome_modified(1).unwrap().is_some());

        store.rename_tome(1, 2).unwrap();
        store.remove_tome(3).unwrap();
        store.remove_tome(7).unwrap();
        assert_eq!(store.tome_numbers().unwrap(), vec![2]);
        assert_eq!(store.read_tome(2).unwrap().as_deref(), Some(&b"first"[..]));
    }

    #[test]
    fn test_tome_numbers_sort_numerically() {
        let (_dir, mut store) = store();
        for n in [10, 2, 1] {
            store.write_tome(n, "x").unwrap();
        }
        assert_eq!(store.tome_numbers().unwrap(), vec![1, 2, 10]);
    }

    #[test]
    fn test_write_export() {
        let (_dir, mut store) = store();
        let path = store.write_export("<html></html>").unwrap();
        assert_eq!(path, store.root().join("boar.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_parse_tome_name() {
        assert_eq!(parse_tome_name("tome1"), Some(1));
        assert_eq!(parse_tome_name("tome42"), Some(42));
        assert_eq!(parse_tome_name("tome0"), None);
        assert_eq!(parse_tome_name("tome"), None);
        assert_eq!(parse_tome_name("tome1.bak"), None);
        assert_eq!(parse_tome_name("book"), None);
    }
}
