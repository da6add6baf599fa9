use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;

use crate::config::project_dirs;

pub fn default_log_path() -> PathBuf {
    project_dirs()
        .map(|d| d.data_local_dir().join("jeopardy.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("jeopardy.log"))
}

/// Send `tracing` output to a file; the terminal belongs to the TUI.
/// Returns the path being written.
pub fn init_logging(path: Option<&Path>, verbose: bool) -> Result<PathBuf, String> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create log dir {}: {}", parent.display(), e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| format!("Cannot install logger: {}", e))?;

    Ok(path)
}
