use crate::api::BoarApi;
use crate::config::BoarConfig;
use crate::error::{BoarError, Result};
use crate::store::fs::FileStore;
use crate::store::DataStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;
use tracing::debug;

/// Overrides the data directory. Used by tests and by anyone keeping several books.
pub const HOME_ENV: &str = "BOAR_HOME";

/// Data directory used by earlier releases, still honoured when present.
const LEGACY_DIR: &str = ".boar";

pub struct BoarContext {
    pub api: BoarApi<FileStore>,
    pub config: BoarConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory: `$BOAR_HOME`, then `~/.boar` if it exists, then the platform
/// config directory (`~/.config/boar` on Linux).
pub fn resolve_data_dir(
    override_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    if let Some(legacy) = home_dir.map(|home| home.join(LEGACY_DIR)) {
        if legacy.is_dir() {
            return Ok(legacy);
        }
    }
    config_dir.ok_or_else(|| BoarError::Store("Could not determine a data directory".to_string()))
}

pub fn data_dir() -> Result<PathBuf> {
    resolve_data_dir(
        std::env::var_os(HOME_ENV).map(PathBuf::from),
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
        ProjectDirs::from("", "", "boar").map(|dirs| dirs.config_dir().to_path_buf()),
    )
}

/// Builds the API over the data directory.
///
/// With `create_missing` the book, config and history area are created when absent, which
/// is what every command but `init` wants (`init` creates them itself and reports on it).
pub fn initialize(create_missing: bool) -> Result<BoarContext> {
    let data_dir = data_dir()?;
    let mut store = FileStore::new(data_dir.clone());
    if create_missing {
        let report = store.ensure_initialized()?;
        if !report.is_empty() {
            debug!(dir = %data_dir.display(), created = ?report.created, "first run setup");
        }
    }
    let config = store.load_config()?;
    debug!(dir = %data_dir.display(), "using data directory");

    Ok(BoarContext {
        api: BoarApi::new(store),
        config,
        data_dir,
    })
}
