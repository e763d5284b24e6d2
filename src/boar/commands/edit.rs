//! Editing categories and items.
//!
//! Edits apply field by field. A rejected short code is reported as a warning and skipped
//! while the other fields still go through; only when nothing at all changed does the edit
//! fail with [`BoarError::NoChanges`], carrying the notes of whatever was skipped.

use crate::commands::{non_blank, Change, CmdMessage, CmdResult, FieldEdit};
use crate::error::{BoarError, Result, SHORT_CODE_RULE};
use crate::index::{resolve_category, resolve_entry};
use crate::model::{eq_ci, is_valid_short_code, validate_category_name, validate_item_name, Book};
use tracing::info;

pub fn category(
    book: &Book,
    category_ref: &str,
    new_name: Option<&str>,
    new_short: Option<&str>,
) -> Result<CmdResult> {
    let idx = resolve_category(book, category_ref)?;
    let mut category = book.categories()[idx].clone();
    let mut changes = Vec::new();
    let mut skipped = Vec::new();

    if let Some(name) = non_blank(new_name) {
        validate_category_name(&name)?;
        let taken = book
            .categories()
            .iter()
            .enumerate()
            .any(|(i, c)| i != idx && eq_ci(&c.name, &name));
        if taken {
            return Err(BoarError::DuplicateName(name));
        }
        if name != category.name {
            let old = std::mem::replace(&mut category.name, name.clone());
            changes.push(Change::new("name", Some(old), Some(name)));
        }
    }

    if let Some(code) = non_blank(new_short).map(|c| c.to_lowercase()) {
        if code == category.short_code {
            // Same code, nothing to do.
        } else if !is_valid_short_code(&code) {
            skipped.push(format!("Invalid short name '{}': {}", code, SHORT_CODE_RULE));
        } else if book
            .categories()
            .iter()
            .enumerate()
            .any(|(i, c)| i != idx && eq_ci(&c.short_code, &code))
        {
            skipped.push(format!(
                "A category with the short name '{}' already exists.",
                code
            ));
        } else {
            let old = std::mem::replace(&mut category.short_code, code.clone());
            changes.push(Change::new("short", Some(old), Some(code)));
        }
    }

    if changes.is_empty() {
        return Err(BoarError::NoChanges { skipped });
    }
    info!(category = %category.name, changes = changes.len(), "edited category");

    let mut result = CmdResult::default().with_changes(changes);
    for note in skipped {
        result.add_message(CmdMessage::warning(note));
    }
    Ok(result.with_book(book.with_replaced(idx, category)))
}

pub fn item(
    book: &Book,
    category_ref: &str,
    item_ref: &str,
    new_name: Option<&str>,
    description: FieldEdit,
    link: FieldEdit,
) -> Result<CmdResult> {
    let (cat_idx, item_idx) = resolve_entry(book, category_ref, item_ref)?;
    let mut category = book.categories()[cat_idx].clone();
    let mut changes = Vec::new();

    if let Some(name) = non_blank(new_name) {
        validate_item_name(&name)?;
        let taken = category
            .items
            .iter()
            .enumerate()
            .any(|(j, i)| j != item_idx && eq_ci(&i.name, &name));
        if taken {
            return Err(BoarError::DuplicateName(name));
        }
        let item = &mut category.items[item_idx];
        if name != item.name {
            let old = std::mem::replace(&mut item.name, name.clone());
            changes.push(Change::new("name", Some(old), Some(name)));
        }
    }

    let item = &mut category.items[item_idx];
    changes.extend(description.apply("desc", &mut item.description));
    changes.extend(link.apply("link", &mut item.link));

    if changes.is_empty() {
        return Err(BoarError::NoChanges {
            skipped: Vec::new(),
        });
    }
    info!(category = %category.name, item = %item.name, changes = changes.len(), "edited item");

    Ok(CmdResult::default()
        .with_changes(changes)
        .with_book(book.with_replaced(cat_idx, category)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Item};

    fn book() -> Book {
        let mut tools = Category::new("Tools", "tool");
        tools.items.push(Item::new("fd").with_description(Some("find".into())));
        tools.items.push(Item::new("rg"));
        Book::template().with_category(tools)
    }

    fn input(raw: &str) -> FieldEdit {
        FieldEdit::from_input(Some(raw), "cl")
    }

    #[test]
    fn renames_category_and_code() {
        let result = category(&book(), "tool", Some("Utilities"), Some("UTIL")).unwrap();
        assert_eq!(result.changes.len(), 2);
        let book = result.book.unwrap();
        let edited = &book.categories()[1];
        assert_eq!(edited.name, "Utilities");
        assert_eq!(edited.short_code, "util");
    }

    #[test]
    fn renaming_to_another_category_name_fails() {
        assert!(matches!(
            category(&book(), "tool", Some("template category"), None),
            Err(BoarError::DuplicateName(_))
        ));
    }

    #[test]
    fn case_only_rename_is_applied() {
        let result = category(&book(), "2", Some("TOOLS"), None).unwrap();
        assert_eq!(result.book.unwrap().categories()[1].name, "TOOLS");
    }

    #[test]
    fn identical_values_are_no_changes() {
        let err = category(&book(), "2", Some("Tools"), Some("TOOL")).unwrap_err();
        assert!(matches!(err, BoarError::NoChanges { skipped } if skipped.is_empty()));

        let err = category(&book(), "2", None, None).unwrap_err();
        assert!(matches!(err, BoarError::NoChanges { .. }));
    }

    #[test]
    fn bad_short_code_is_skipped_but_name_applies() {
        let result = category(&book(), "tool", Some("Utilities"), Some("temp")).unwrap();
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.messages.len(), 1);
        let book = result.book.unwrap();
        let edited = &book.categories()[1];
        assert_eq!(edited.name, "Utilities");
        assert_eq!(edited.short_code, "tool");
    }

    #[test]
    fn only_bad_short_code_reports_skip() {
        let err = category(&book(), "tool", None, Some("9lives")).unwrap_err();
        match err {
            BoarError::NoChanges { skipped } => {
                assert_eq!(skipped.len(), 1);
                assert!(skipped[0].contains("9lives"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn edits_item_fields_independently() {
        let result = item(
            &book(),
            "tool",
            "fd",
            Some("fd-find"),
            FieldEdit::Keep,
            input("https://github.com/sharkdp/fd"),
        )
        .unwrap();
        assert_eq!(result.changes.len(), 2);
        let book = result.book.unwrap();
        let edited = &book.categories()[1].items[0];
        assert_eq!(edited.name, "fd-find");
        assert_eq!(edited.description.as_deref(), Some("find"));
        assert_eq!(edited.link.as_deref(), Some("https://github.com/sharkdp/fd"));
    }

    #[test]
    fn clear_sentinel_removes_description() {
        for sentinel in ["cl", "CL"] {
            let result = item(&book(), "2", "1", None, input(sentinel), FieldEdit::Keep).unwrap();
            assert_eq!(
                result.changes,
                vec![Change::new("desc", Some("find".into()), None)]
            );
            assert!(result.book.unwrap().categories()[1].items[0]
                .description
                .is_none());
        }
    }

    #[test]
    fn clearing_absent_field_is_no_change() {
        let err = item(&book(), "tool", "rg", None, input("cl"), input("cl")).unwrap_err();
        assert!(matches!(err, BoarError::NoChanges { .. }));
    }

    #[test]
    fn item_rename_collision_fails() {
        assert!(matches!(
            item(&book(), "tool", "fd", Some("RG"), FieldEdit::Keep, FieldEdit::Keep),
            Err(BoarError::DuplicateName(_))
        ));
        assert!(matches!(
            item(&book(), "tool", "fd", Some("7"), FieldEdit::Keep, FieldEdit::Keep),
            Err(BoarError::InvalidName { .. })
        ));
    }

    #[test]
    fn unknown_targets_fail() {
        assert!(matches!(
            item(&book(), "tool", "bat", Some("x"), FieldEdit::Keep, FieldEdit::Keep),
            Err(BoarError::ItemNotFound { .. })
        ));
        assert!(matches!(
            category(&book(), "3", Some("x"), None),
            Err(BoarError::CategoryNotFound(_))
        ));
    }
}
