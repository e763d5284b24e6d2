use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_category, resolve_entry, DisplayIndex};
use crate::model::Book;
use tracing::info;

/// Removes a whole category with all its items.
pub fn category(book: &Book, category_ref: &str) -> Result<CmdResult> {
    let idx = resolve_category(book, category_ref)?;
    let removed = &book.categories()[idx];
    info!(category = %removed.name, "removed category");

    let message = CmdMessage::success(format!(
        "Category removed ({}): {} ({}), {} item(s)",
        DisplayIndex::category(idx + 1),
        removed.name,
        removed.short_code,
        removed.items.len()
    ));
    Ok(CmdResult::default()
        .with_message(message)
        .with_book(book.without(idx)))
}

/// Removes one item from a category.
pub fn item(book: &Book, category_ref: &str, item_ref: &str) -> Result<CmdResult> {
    let (cat_idx, item_idx) = resolve_entry(book, category_ref, item_ref)?;
    let mut category = book.categories()[cat_idx].clone();
    let removed = category.items.remove(item_idx);
    info!(category = %category.name, item = %removed.name, "removed item");

    let message = CmdMessage::success(format!(
        "Item removed from {} ({}): {}",
        category.name,
        DisplayIndex::item(cat_idx + 1, item_idx + 1),
        removed.name
    ));
    Ok(CmdResult::default()
        .with_message(message)
        .with_book(book.with_replaced(cat_idx, category)))
}
