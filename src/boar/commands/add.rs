use crate::commands::{non_blank, CmdMessage, CmdResult};
use crate::error::{BoarError, Result};
use crate::index::{resolve_category, DisplayIndex};
use crate::model::{
    eq_ci, validate_category_name, validate_item_name, validate_short_code, Book, Category, Item,
    SHORT_CODE_MIN_LEN,
};
use tracing::info;

/// Characters of the name used for a derived short code.
const DERIVED_CODE_LEN: usize = 4;

/// Appends a new, empty category.
///
/// Without an explicit `short` code one is derived from the name (see [`derive_short_code`]).
pub fn category(book: &Book, name: &str, short: Option<&str>) -> Result<CmdResult> {
    let name = name.trim();
    validate_category_name(name)?;
    if book.category_named(name).is_some() {
        return Err(BoarError::DuplicateName(name.to_string()));
    }

    let short_code = match non_blank(short) {
        Some(code) => {
            validate_short_code(&code)?;
            if book.category_coded(&code).is_some() {
                return Err(BoarError::DuplicateShortCode(code));
            }
            code.to_lowercase()
        }
        None => derive_short_code(book, name)?,
    };

    let new_book = book.with_category(Category::new(name, short_code.clone()));
    info!(category = name, short = %short_code, "added category");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Category added ({}): {} ({})",
            DisplayIndex::category(new_book.len()),
            name,
            short_code
        )))
        .with_book(new_book))
}

/// Derives a short code from the first alphanumeric characters of `name`.
///
/// When the candidate is taken, a number is appended: one more than the count of codes
/// sharing the candidate as prefix, counting up until the code is free.
pub fn derive_short_code(book: &Book, name: &str) -> Result<String> {
    let candidate: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(DERIVED_CODE_LEN)
        .collect::<String>()
        .to_lowercase();

    let usable = candidate.len() >= SHORT_CODE_MIN_LEN
        && candidate.chars().next().is_some_and(|c| !c.is_ascii_digit());
    if !usable {
        return Err(BoarError::ShortCodeUnavailable(name.to_string()));
    }
    if book.category_coded(&candidate).is_none() {
        return Ok(candidate);
    }

    let sharing_prefix = book
        .short_codes()
        .filter(|code| {
            code.get(..candidate.len())
                .is_some_and(|prefix| eq_ci(prefix, &candidate))
        })
        .count();

    (sharing_prefix + 1..)
        .map(|n| format!("{}{}", candidate, n))
        .find(|code| book.category_coded(code).is_none())
        .ok_or(BoarError::ShortCodeUnavailable(name.to_string()))
}

/// Appends a new item to the category referenced by `category_ref`.
pub fn item(
    book: &Book,
    category_ref: &str,
    name: &str,
    description: Option<&str>,
    link: Option<&str>,
) -> Result<CmdResult> {
    let cat_idx = resolve_category(book, category_ref)?;
    let name = name.trim();
    validate_item_name(name)?;

    let mut category = book.categories()[cat_idx].clone();
    if category.item_named(name).is_some() {
        return Err(BoarError::DuplicateItemName(name.to_string()));
    }

    category.items.push(
        Item::new(name)
            .with_description(non_blank(description))
            .with_link(non_blank(link)),
    );
    let index = DisplayIndex::item(cat_idx + 1, category.items.len());
    info!(category = %category.name, item = name, "added item");

    let message = CmdMessage::success(format!(
        "Item added to {} ({}): {}",
        category.name, index, name
    ));
    Ok(CmdResult::default()
        .with_message(message)
        .with_book(book.with_replaced(cat_idx, category)))
}
