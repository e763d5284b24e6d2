use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history;
use crate::store::DataStore;
use tracing::info;

/// Restores the book as it was `depth` saves ago (one when not given).
pub fn run<S: DataStore>(store: &mut S, depth: Option<&str>) -> Result<CmdResult> {
    let depth = history::parse_depth(depth)?;
    let book = history::undo(store, depth)?;
    info!(depth, "undo");

    let steps = if depth == 1 {
        "1 change".to_string()
    } else {
        format!("{} changes", depth)
    };
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Undid {} ({} categories, {} items restored from tome{})",
        steps,
        book.len(),
        book.item_count(),
        depth
    ))))
}
