use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let tomes = history::list_tomes(store)?;
    if tomes.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No history yet.")));
    }
    Ok(CmdResult::default().with_tomes(tomes))
}
