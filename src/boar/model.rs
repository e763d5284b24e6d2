use crate::error::{BoarError, Result};
use serde::{Deserialize, Serialize};

pub const SHORT_CODE_MIN_LEN: usize = 2;
pub const SHORT_CODE_MAX_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "desc", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            link: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "short")]
    pub short_code: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(name: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_code: short_code.into(),
            items: Vec::new(),
        }
    }

    /// Position (0-based) of the item whose name matches case-insensitively.
    pub fn item_named(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| eq_ci(&i.name, name))
    }
}

/// The whole reference collection. Order is significant: positional IDs are
/// derived from it on every view and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Book {
    categories: Vec<Category>,
}

impl Book {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The book written on first run and by `reset`.
    pub fn template() -> Self {
        let mut category = Category::new("Template Category", "temp");
        category.items.push(
            Item::new("Template entry 1")
                .with_description(Some("A good description about the entry".to_string()))
                .with_link(Some("https://example.com".to_string())),
        );
        category.items.push(Item::new("A second template entry"));
        Self::new(vec![category])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category at a 0-based position.
    pub fn get(&self, idx: usize) -> Option<&Category> {
        self.categories.get(idx)
    }

    /// Number of lines a full listing takes: one per category plus one per item.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len() + 1).sum()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Position of a category with the given name, ignoring case.
    pub fn category_named(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| eq_ci(&c.name, name))
    }

    /// Position of a category with the given short code, ignoring case.
    pub fn category_coded(&self, code: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| eq_ci(&c.short_code, code))
    }

    pub fn short_codes(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.short_code.as_str())
    }

    /// Returns a copy with `category` appended at the highest position.
    pub fn with_category(&self, category: Category) -> Self {
        let mut categories = self.categories.clone();
        categories.push(category);
        Self { categories }
    }

    /// Returns a copy with the category at `idx` replaced.
    pub fn with_replaced(&self, idx: usize, category: Category) -> Self {
        let mut categories = self.categories.clone();
        categories[idx] = category;
        Self { categories }
    }

    /// Returns a copy with the category at `idx` removed; the rest keep their order.
    pub fn without(&self, idx: usize) -> Self {
        let mut categories = self.categories.clone();
        categories.remove(idx);
        Self { categories }
    }

    /// Canonical serialized form, shared by the live book and every tome.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_slice(content.as_bytes())
    }

    /// Parses raw stored bytes. Invalid UTF-8 is reported like any other malformed JSON.
    pub fn from_slice(content: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(content)?)
    }
}

pub(crate) fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn is_valid_short_code(code: &str) -> bool {
    let len = code.chars().count();
    (SHORT_CODE_MIN_LEN..=SHORT_CODE_MAX_LEN).contains(&len)
        && code.chars().all(|c| c.is_ascii_alphanumeric())
        && code.chars().next().is_some_and(|c| !c.is_ascii_digit())
}

pub fn validate_short_code(code: &str) -> Result<()> {
    if is_valid_short_code(code) {
        Ok(())
    } else {
        Err(BoarError::InvalidShortCode(code.to_string()))
    }
}

pub fn validate_category_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(BoarError::InvalidName {
            name: name.to_string(),
            reason: "name can't be blank".to_string(),
        });
    }
    Ok(())
}

/// Item names may not be purely numeric, otherwise they would shadow positional IDs.
pub fn validate_item_name(name: &str) -> Result<()> {
    validate_category_name(name)?;
    if name.chars().all(|c| c.is_ascii_digit()) {
        return Err(BoarError::InvalidName {
            name: name.to_string(),
            reason: "item names can't be purely numeric".to_string(),
        });
    }
    Ok(())
}
