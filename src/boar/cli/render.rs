//! # Rendering
//!
//! Turns `CmdResult` parts into terminal text through the templates in `templates/`.
//!
//! Layout (id alignment, truncation, padding) is computed here with `unicode-width`, since
//! templates are bad at column math. Templates receive ready-made cells plus the style to
//! use for them. Every renderer takes `use_color` explicitly; the caller decides once.

use super::styles::{names, register_style_filter};
use super::templates::{
    CHANGES_TEMPLATE, CONFIG_TEMPLATE, HISTORY_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE,
};
use boar::commands::list::{ListMode, Listing};
use boar::commands::{Change, CmdMessage, MessageLevel};
use boar::config::ConfigKey;
use boar::error::Result;
use boar::history::{TomeInfo, TomeState};
use chrono::{DateTime, Utc};
use minijinja::Environment;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const HEADER: &str = "BOAR - Book Of All References";

/// Change values wider than this are cut to `TRUNCATE_KEEP` columns plus "...".
const TRUNCATE_AT: usize = 20;
const TRUNCATE_KEEP: usize = 17;

#[derive(Serialize)]
struct ItemLine {
    id_cell: String,
    name: String,
    has_link: bool,
    desc: String,
    link: Option<String>,
}

#[derive(Serialize)]
struct CategoryLine {
    id_cell: String,
    name_cell: String,
    short_code: String,
    items: Vec<ItemLine>,
    separator: bool,
}

#[derive(Serialize)]
struct ListData {
    header: &'static str,
    cat_style: &'static str,
    link_indent: String,
    categories: Vec<CategoryLine>,
}

#[derive(Serialize)]
struct ChangeLine {
    old: String,
    new: String,
}

#[derive(Serialize)]
struct ChangesData {
    changes: Vec<ChangeLine>,
}

#[derive(Serialize)]
struct ConfigLine {
    key: String,
    padding: String,
    value: String,
    description: Option<&'static str>,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigLine>,
}

#[derive(Serialize)]
struct TomeLine {
    label: String,
    age: String,
    summary: String,
    corrupt: bool,
}

#[derive(Serialize)]
struct HistoryData {
    tomes: Vec<TomeLine>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    register_style_filter(&mut env, use_color);
    Ok(env.render_str(template, data)?)
}

/// Renders a book listing, either in full or as the category overview.
pub fn render_listing(listing: &Listing, use_color: bool) -> Result<String> {
    let overview = listing.mode == ListMode::CategoriesOnly;

    let category_digits = listing
        .categories
        .iter()
        .map(|c| c.index.to_string().width())
        .max()
        .unwrap_or(1);
    let item_digits = listing
        .categories
        .iter()
        .map(|c| c.items.len().to_string().width())
        .max()
        .unwrap_or(1);
    let id_width = if overview {
        category_digits + 1
    } else {
        category_digits + 1 + item_digits
    };

    let count = listing.categories.len();
    let categories = listing
        .categories
        .iter()
        .enumerate()
        .map(|(pos, cat)| {
            let items = if overview {
                Vec::new()
            } else {
                cat.items
                    .iter()
                    .map(|di| ItemLine {
                        id_cell: pad_to(&di.index.to_string(), id_width),
                        name: di.item.name.clone(),
                        has_link: di.item.link.is_some(),
                        desc: di
                            .item
                            .description
                            .clone()
                            .unwrap_or_else(|| "...".to_string()),
                        link: di.item.link.clone().filter(|_| listing.show_links),
                    })
                    .collect()
            };
            CategoryLine {
                id_cell: format!("{} ", pad_to(&cat.index.to_string(), id_width)),
                name_cell: format!("{} ", cat.name),
                short_code: cat.short_code.clone(),
                items,
                separator: !overview && pos + 1 < count,
            }
        })
        .collect();

    let data = ListData {
        header: HEADER,
        cat_style: if overview {
            names::OVERVIEW
        } else {
            names::CATEGORY
        },
        link_indent: " ".repeat(id_width + 6),
        categories,
    };
    render_template(LIST_TEMPLATE, &data, use_color)
}

/// Renders applied edits as `old -> new` lines.
pub fn render_changes(changes: &[Change], use_color: bool) -> Result<String> {
    if changes.is_empty() {
        return Ok(String::new());
    }
    let data = ChangesData {
        changes: changes
            .iter()
            .map(|c| ChangeLine {
                old: change_value(c.old.as_deref()),
                new: change_value(c.new.as_deref()),
            })
            .collect(),
    };
    render_template(CHANGES_TEMPLATE, &data, use_color)
}

/// Renders option values. Descriptions are shown for the full listing only.
pub fn render_config(
    entries: &[(ConfigKey, String)],
    with_descriptions: bool,
    use_color: bool,
) -> Result<String> {
    let key_width = entries
        .iter()
        .map(|(key, _)| key.name().width())
        .max()
        .unwrap_or(0);
    let data = ConfigData {
        entries: entries
            .iter()
            .map(|(key, value)| ConfigLine {
                key: key.name().to_string(),
                padding: " ".repeat(key_width - key.name().width()),
                value: value.clone(),
                description: with_descriptions.then(|| key.description()),
            })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
}

pub fn render_history(tomes: &[TomeInfo], use_color: bool) -> Result<String> {
    let data = HistoryData {
        tomes: tomes
            .iter()
            .map(|tome| {
                let (summary, corrupt) = match &tome.state {
                    TomeState::Readable { categories, items } => (
                        format!(
                            "{} {}, {} {}",
                            categories,
                            plural(*categories, "category", "categories"),
                            items,
                            plural(*items, "item", "items")
                        ),
                        false,
                    ),
                    TomeState::Corrupt(reason) => (format!("unreadable: {}", reason), true),
                };
                TomeLine {
                    label: format!("tome{}", tome.number),
                    age: format_time_ago(tome.modified),
                    summary,
                    corrupt,
                }
            })
            .collect(),
    };
    render_template(HISTORY_TEMPLATE, &data, use_color)
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> Result<String> {
    if messages.is_empty() {
        return Ok(String::new());
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

fn pad_to(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

fn change_value(value: Option<&str>) -> String {
    match value {
        Some(v) => truncate_to_width(v),
        None => "None".to_string(),
    }
}

fn truncate_to_width(s: &str) -> String {
    if s.width() <= TRUNCATE_AT {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > TRUNCATE_KEEP {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push_str("...");
    result
}

fn format_time_ago(timestamp: Option<DateTime<Utc>>) -> String {
    let Some(timestamp) = timestamp else {
        return "unknown age".to_string();
    };
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boar::commands::list;
    use boar::config::BoarConfig;
    use boar::model::{Book, Category, Item};
    use chrono::Duration;

    fn full_listing(book: &Book) -> Listing {
        list::run(book, &BoarConfig::default(), None)
            .unwrap()
            .listing
            .unwrap()
    }

    #[test]
    fn test_render_template_book() {
        let output = render_listing(&full_listing(&Book::template()), false).unwrap();
        let expected = "\
BOAR - Book Of All References
1   Template Category  (temp)
1.1  - Template entry 1 [L] : A good description about the entry
         link: https://example.com
1.2  - A second template entry : ...
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_ids_align_to_widest() {
        let mut tools = Category::new("Tools", "tool");
        for n in 1..=10 {
            tools.items.push(Item::new(format!("tool {}", n)));
        }
        let book = Book::new(vec![tools, Category::new("Empty", "emp")]);
        let mut config = BoarConfig::default();
        config.show_links = false;
        let listing = list::run(&book, &config, Some("all"))
            .unwrap()
            .listing
            .unwrap();

        let output = render_listing(&listing, false).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "1    Tools  (tool)");
        assert_eq!(lines[2], "1.1   - tool 1 : ...");
        assert_eq!(lines[11], "1.10  - tool 10 : ...");
        // Blank line between categories, none after the last.
        assert_eq!(lines[12], "");
        assert_eq!(lines[13], "2    Empty  (emp)");
        assert_eq!(lines.len(), 14);
    }

    #[test]
    fn test_render_hides_links_when_configured() {
        let mut config = BoarConfig::default();
        config.show_links = false;
        let listing = list::run(&Book::template(), &config, None)
            .unwrap()
            .listing
            .unwrap();
        let output = render_listing(&listing, false).unwrap();
        assert!(output.contains("[L]"));
        assert!(!output.contains("link:"));

        // A single category always shows links.
        let listing = list::run(&Book::template(), &config, Some("temp"))
            .unwrap()
            .listing
            .unwrap();
        assert!(render_listing(&listing, false).unwrap().contains("link: "));
    }

    #[test]
    fn test_render_overview() {
        let book = Book::template().with_category(Category::new("Recipes", "reci"));
        let listing = list::categories(&book).unwrap().listing.unwrap();
        let output = render_listing(&listing, false).unwrap();
        let expected = "\
BOAR - Book Of All References
1  Template Category  (temp)
2  Recipes  (reci)
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_listing_with_color() {
        let output = render_listing(&full_listing(&Book::template()), true).unwrap();
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("Template entry 1"));
    }

    #[test]
    fn test_render_changes_truncates() {
        let changes = vec![
            Change::new("name", Some("short".into()), Some("a".repeat(25))),
            Change::new("link", Some("https://example.com".into()), None),
        ];
        let output = render_changes(&changes, false).unwrap();
        let expected = format!(
            "Changes:\nshort -> {}...\nhttps://example.com -> None\n",
            "a".repeat(17)
        );
        assert_eq!(output, expected);
        assert_eq!(render_changes(&[], false).unwrap(), "");
    }

    #[test]
    fn test_render_config_aligns_keys() {
        let config = BoarConfig::default();
        let output = render_config(&config.list_all(), true, false).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), ConfigKey::ALL.len());
        assert!(lines[0].starts_with("history length           5  amount"));

        let single = render_config(&[(ConfigKey::Clear, "cl".into())], false, false).unwrap();
        assert_eq!(single, "clear  cl\n");
    }

    #[test]
    fn test_render_history() {
        let tomes = vec![
            TomeInfo {
                number: 1,
                modified: Some(Utc::now() - Duration::hours(2)),
                state: TomeState::Readable {
                    categories: 1,
                    items: 2,
                },
            },
            TomeInfo {
                number: 2,
                modified: None,
                state: TomeState::Corrupt("expected value".into()),
            },
        ];
        let output = render_history(&tomes, false).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "tome1  2 hours ago  1 category, 2 items");
        assert_eq!(lines[1], "tome2  unknown age  unreadable: expected value");
    }

    #[test]
    fn test_render_messages() {
        assert!(render_messages(&[], false).unwrap().is_empty());
        let output = render_messages(
            &[
                CmdMessage::success("Category added"),
                CmdMessage::warning("Short name skipped"),
            ],
            false,
        )
        .unwrap();
        assert_eq!(output, "Category added\nShort name skipped\n");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        let value = "日本語".repeat(4);
        let cut = truncate_to_width(&value);
        assert!(cut.ends_with("..."));
        assert!(cut.trim_end_matches("...").width() <= TRUNCATE_KEEP);
    }
}
