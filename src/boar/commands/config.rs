use crate::commands::{Change, CmdMessage, CmdResult};
use crate::config::ConfigKey;
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

impl ConfigAction {
    pub fn from_args(key: Option<&str>, value: Option<&str>) -> Self {
        match (key, value) {
            (None, _) => ConfigAction::ShowAll,
            (Some(key), None) => ConfigAction::ShowKey(key.to_string()),
            (Some(key), Some(value)) => ConfigAction::Set(key.to_string(), value.to_string()),
        }
    }
}

pub fn run<S: DataStore>(store: &mut S, action: ConfigAction) -> Result<CmdResult> {
    let mut config = store.load_config()?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config_entries(config.list_all())),
        ConfigAction::ShowKey(key) => {
            let key: ConfigKey = key.parse()?;
            Ok(CmdResult::default().with_config_entries(vec![(key, config.get(key))]))
        }
        ConfigAction::Set(key, value) => {
            let key: ConfigKey = key.parse()?;
            let old = config.get(key);
            config.set(key, &value)?;
            let new = config.get(key);

            if old == new {
                return Ok(CmdResult::default()
                    .with_message(CmdMessage::info(format!("{} is already {}", key, new))));
            }

            store.save_config(&config)?;
            info!(key = key.name(), value = %new, "updated config");
            Ok(CmdResult::default()
                .with_changes(vec![Change::new(key.name(), Some(old), Some(new))]))
        }
    }
}
