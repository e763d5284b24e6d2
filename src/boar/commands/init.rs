use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.ensure_initialized()?;
    let mut result = CmdResult::default();
    if report.is_empty() {
        result.add_message(CmdMessage::info("Nothing to do, boar is already set up."));
    }
    for created in report.created {
        result.add_message(CmdMessage::success(format!("Created {}", created)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn init_creates_then_reports_nothing_to_do() {
        let mut store = InMemoryStore::new();
        let first = run(&mut store).unwrap();
        assert_eq!(first.messages.len(), 2);

        let second = run(&mut store).unwrap();
        assert_eq!(second.messages.len(), 1);
        assert!(second.messages[0].content.contains("already"));
    }
}
