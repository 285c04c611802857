//! Filesystem module.
//!
//! Provides:
//! - Per-run log folders
//! - The append-only posts log

pub mod log;
pub mod paths;

pub use self::log::{read_posts_log, PostsLog, POSTS_LOG_NAME};
pub use paths::{create_posts_log, ensure_dir, get_run_folder};
