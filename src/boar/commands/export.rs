use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoarConfig;
use crate::error::{BoarError, Result};
use crate::model::Book;
use crate::store::DataStore;
use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;
use std::str::FromStr;

const EXPORT_TEMPLATE: &str = include_str!("../templates/export.html");
const TITLE: &str = "BOAR - Book Of All References";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTheme {
    Light,
    Dark,
}

impl ExportTheme {
    /// An explicit choice wins, otherwise `export light by default` decides.
    pub fn resolve(choice: Option<ExportTheme>, config: &BoarConfig) -> Self {
        match choice {
            Some(theme) => theme,
            None if config.export_light => ExportTheme::Light,
            None => ExportTheme::Dark,
        }
    }

    fn palette(self) -> Palette {
        match self {
            ExportTheme::Light => Palette {
                text: "#000",
                bold: "#000",
                background: "#FFF",
                emphasize: true,
            },
            ExportTheme::Dark => Palette {
                text: "#AAA",
                bold: "#EEE",
                background: "#111",
                emphasize: false,
            },
        }
    }
}

impl FromStr for ExportTheme {
    type Err = BoarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ExportTheme::Light),
            "dark" => Ok(ExportTheme::Dark),
            _ => Err(BoarError::UnknownTheme(s.to_string())),
        }
    }
}

#[derive(Serialize)]
struct Palette {
    text: &'static str,
    bold: &'static str,
    background: &'static str,
    /// Bold headings and entry names; the dark theme relies on color alone.
    emphasize: bool,
}

/// Renders the book as a standalone HTML page. Every book value is HTML-escaped.
pub fn render_html(book: &Book, theme: ExportTheme) -> Result<String> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("export.html", EXPORT_TEMPLATE)?;

    let html = env.get_template("export.html")?.render(context! {
        title => TITLE,
        palette => theme.palette(),
        categories => book,
    })?;
    Ok(html)
}

pub fn run<S: DataStore>(
    store: &mut S,
    book: &Book,
    config: &BoarConfig,
    theme: Option<ExportTheme>,
) -> Result<CmdResult> {
    let theme = ExportTheme::resolve(theme, config);
    let html = render_html(book, theme)?;
    let path = store.write_export(&html)?;

    let message = CmdMessage::success(format!("Exported HTML to {}", path.display()));
    Ok(CmdResult::default()
        .with_export_path(path)
        .with_message(message))
}
