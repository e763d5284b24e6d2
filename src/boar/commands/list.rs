use crate::commands::{non_blank, CmdMessage, CmdResult};
use crate::config::BoarConfig;
use crate::error::Result;
use crate::index::{index_book, index_category, resolve_category, DisplayCategory};
use crate::model::{eq_ci, Book};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Categories with all their items
    Full,
    /// Only category ids, names and short codes
    CategoriesOnly,
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub mode: ListMode,
    pub categories: Vec<DisplayCategory>,
    pub show_links: bool,
}

/// Lists the book, or a single category when `category_ref` resolves to one.
///
/// Without a reference a book with more entries than `max display` falls back to the
/// category overview; the `show all` token forces the full listing.
pub fn run(book: &Book, config: &BoarConfig, category_ref: Option<&str>) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No items to show.")));
    }

    let listing = match non_blank(category_ref) {
        Some(token) if eq_ci(&token, &config.show_all) => Listing {
            mode: ListMode::Full,
            categories: index_book(book),
            show_links: config.show_links,
        },
        Some(token) => {
            let idx = resolve_category(book, &token)?;
            Listing {
                mode: ListMode::Full,
                categories: vec![index_category(idx + 1, &book.categories()[idx])],
                show_links: true,
            }
        }
        None if book.entry_count() > config.max_display => Listing {
            mode: ListMode::CategoriesOnly,
            categories: index_book(book),
            show_links: false,
        },
        None => Listing {
            mode: ListMode::Full,
            categories: index_book(book),
            show_links: config.show_links,
        },
    };

    Ok(CmdResult::default().with_listing(listing))
}

/// Lists every category with its short code.
pub fn categories(book: &Book) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No categories to show.")));
    }
    Ok(CmdResult::default().with_listing(Listing {
        mode: ListMode::CategoriesOnly,
        categories: index_book(book),
        show_links: false,
    }))
}
