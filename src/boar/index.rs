//! # Identifier Resolution
//!
//! Categories and items are never stored with an id. Users refer to them with tokens that
//! are resolved against the current book on every invocation:
//!
//! - A category token is either its 1-based position (`"2"`) or its short code (`"temp"`,
//!   matched case-insensitively).
//! - An item token is either its 1-based position inside the category (`"1"`) or its full
//!   name (matched case-insensitively).
//! - A compound token addresses an item directly: `"temp.1"`, `"2.A second entry"` or
//!   `"temp 1"`. It is split on the first `.` if there is one, otherwise on the first
//!   whitespace.
//!
//! The two rules never overlap: short codes cannot start with a digit and item names cannot
//! be purely numeric, so an all-digit token is always a position. Out of range positions
//! (including `0`) simply don't resolve.

use crate::error::{BoarError, Result};
use crate::model::{eq_ci, Book, Category, Item};

/// How a token refers to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// 1-based position. May be out of range.
    Position(usize),
    /// A short code for categories, a full name for items.
    Name(String),
}

impl Selector {
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            // Overflowing numbers can't be in range anyway.
            return Selector::Position(token.parse().unwrap_or(usize::MAX));
        }
        Selector::Name(token.to_string())
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Position(n) => write!(f, "{}", n),
            Selector::Name(name) => write!(f, "{}", name),
        }
    }
}

/// A positional id as shown to the user: `3` for a category, `3.2` for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex {
    pub category: usize,
    pub item: Option<usize>,
}

impl DisplayIndex {
    pub fn category(category: usize) -> Self {
        Self {
            category,
            item: None,
        }
    }

    pub fn item(category: usize, item: usize) -> Self {
        Self {
            category,
            item: Some(item),
        }
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.item {
            Some(item) => write!(f, "{}.{}", self.category, item),
            None => write!(f, "{}", self.category),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub index: DisplayIndex,
    pub item: Item,
}

#[derive(Debug, Clone)]
pub struct DisplayCategory {
    pub index: DisplayIndex,
    pub name: String,
    pub short_code: String,
    pub items: Vec<DisplayItem>,
}

/// Assigns positional ids to every category and item of the book, in book order.
pub fn index_book(book: &Book) -> Vec<DisplayCategory> {
    book.categories()
        .iter()
        .enumerate()
        .map(|(i, cat)| index_category(i + 1, cat))
        .collect()
}

pub fn index_category(position: usize, category: &Category) -> DisplayCategory {
    DisplayCategory {
        index: DisplayIndex::category(position),
        name: category.name.clone(),
        short_code: category.short_code.clone(),
        items: category
            .items
            .iter()
            .enumerate()
            .map(|(j, item)| DisplayItem {
                index: DisplayIndex::item(position, j + 1),
                item: item.clone(),
            })
            .collect(),
    }
}

/// Splits a compound `<category>.<item>` or `<category> <item>` token.
///
/// Returns the category token and the item token, if any.
pub fn split_compound(token: &str) -> (String, Option<String>) {
    let token = token.trim();
    let split = match token.find('.') {
        Some(pos) => Some((&token[..pos], &token[pos + 1..])),
        None => token.split_once(char::is_whitespace),
    };
    match split {
        Some((cat, item)) if !item.trim().is_empty() => {
            (cat.trim().to_string(), Some(item.trim().to_string()))
        }
        Some((cat, _)) => (cat.trim().to_string(), None),
        None => (token.to_string(), None),
    }
}

/// Resolves a category token to its 0-based position in the book.
pub fn resolve_category(book: &Book, token: &str) -> Result<usize> {
    let found = match Selector::parse(token) {
        Selector::Position(n) if (1..=book.len()).contains(&n) => Some(n - 1),
        Selector::Position(_) => None,
        Selector::Name(code) => book.category_coded(&code),
    };
    found.ok_or_else(|| BoarError::CategoryNotFound(token.trim().to_string()))
}

/// Resolves an item token to its 0-based position inside the category.
pub fn resolve_item(category: &Category, token: &str) -> Result<usize> {
    let found = match Selector::parse(token) {
        Selector::Position(n) if (1..=category.items.len()).contains(&n) => Some(n - 1),
        Selector::Position(_) => None,
        Selector::Name(name) => category.items.iter().position(|i| eq_ci(&i.name, &name)),
    };
    found.ok_or_else(|| BoarError::ItemNotFound {
        category: category.name.clone(),
        item: token.trim().to_string(),
    })
}

/// Resolves a category token and then an item token inside that category.
pub fn resolve_entry(book: &Book, category: &str, item: &str) -> Result<(usize, usize)> {
    let cat_idx = resolve_category(book, category)?;
    let item_idx = resolve_item(&book.categories()[cat_idx], item)?;
    Ok((cat_idx, item_idx))
}
