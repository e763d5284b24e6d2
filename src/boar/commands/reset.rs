use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoarConfig;
use crate::error::Result;
use crate::history;
use crate::model::Book;
use crate::store::DataStore;
use tracing::info;

/// Replaces the book with the template and the config with the defaults.
///
/// The current book is pushed onto the history first (with the retention configured before
/// the reset), so a reset can be undone like any other change.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let current = store.load_book()?;
    let config = store.load_config()?;

    history::snapshot_before_save(store, &current, config.history_length)?;
    store.save_book(&Book::template())?;
    store.save_config(&BoarConfig::default())?;
    info!("reset book and config to defaults");

    Ok(CmdResult::default().with_message(CmdMessage::success(
        "Book and configuration reset to defaults",
    )))
}
