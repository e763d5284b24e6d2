//! Styles for the boar CLI.
//!
//! Templates never name colors. They tag text with a semantic style (`{{ id | style("cat-id") }}`)
//! and the theme below decides what that looks like. The palette follows the classic boar look:
//! purple underlined category headers, cyan short codes, bright item names and dim links.
//!
//! Color is an explicit switch rather than something the filter detects: `--nocolor`, the
//! `disable colors` option and non-color terminals all turn it off before rendering starts.

use console::Style;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADER: &str = "header";
    pub const CATEGORY_ID: &str = "cat-id";
    pub const CATEGORY: &str = "category";
    pub const OVERVIEW: &str = "overview";
    pub const SHORT_CODE: &str = "short-code";
    pub const ITEM: &str = "item";
    pub const LINK: &str = "link";
    pub const MUTED: &str = "muted";
    pub const OLD: &str = "old";
    pub const NEW: &str = "new";
    pub const KEY: &str = "key";
    pub const TIME: &str = "time";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

/// A named set of styles.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styles `text` when colors are on. Unknown names leave the text untouched.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }
}

pub static BOAR_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().black().bright().bold();
    let purple_ul = Style::new().magenta().underlined();

    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::CATEGORY_ID, purple_ul.clone())
        .add(names::CATEGORY, purple_ul)
        .add(names::OVERVIEW, Style::new().white().underlined())
        .add(names::SHORT_CODE, Style::new().cyan())
        .add(names::ITEM, Style::new().white().bright())
        .add(names::LINK, muted.clone())
        .add(names::MUTED, muted)
        .add(names::OLD, Style::new().red())
        .add(names::NEW, Style::new().green())
        .add(names::KEY, Style::new().cyan())
        .add(names::TIME, Style::new().black().bright().italic())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, Style::new().black().bright())
});

/// Registers the `style` filter on a template environment.
pub fn register_style_filter(env: &mut Environment<'_>, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        BOAR_THEME.apply(&name, &value.to_string(), use_color)
    });
}
