//! Path and directory management.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::error::Result;
use crate::fs::log::{PostsLog, POSTS_LOG_NAME};

/// Folder name format for one run's logs.
const RUN_FOLDER_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Get the log folder for a run started at `started`.
pub fn get_run_folder(config: &Config, started: DateTime<Local>) -> PathBuf {
    config
        .options
        .log_directory
        .join(started.format(RUN_FOLDER_FORMAT).to_string())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Create the run folder and open its posts log.
pub fn create_posts_log(config: &Config, started: DateTime<Local>) -> Result<PostsLog> {
    let folder = get_run_folder(config, started);
    ensure_dir(&folder)?;
    PostsLog::open(&folder.join(POSTS_LOG_NAME))
}
