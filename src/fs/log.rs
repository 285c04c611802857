//! Append-only posts log.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::media::PostDetail;

/// File name of the posts log inside a run directory.
pub const POSTS_LOG_NAME: &str = "POSTS.jsonl";

/// Audit log with one JSON line per readable post.
///
/// Each line is `{"<position>": [<detail>]}`, keyed by the post's 1-based
/// position in the listing. Lines are flushed as they are written.
#[derive(Debug)]
pub struct PostsLog {
    path: PathBuf,
    file: File,
    entries: u64,
}

impl PostsLog {
    /// Open (or create) a log file for appending.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing::debug!("Opened posts log {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            file,
            entries: 0,
        })
    }

    /// Append one entry.
    pub fn record(&mut self, position: u64, detail: &PostDetail) -> Result<()> {
        let mut entry = BTreeMap::new();
        entry.insert(position.to_string(), [detail]);

        let line = serde_json::to_string(&entry)?;
        writeln!(self.file, "{}", line)?;
        self.file.flush()?;
        self.entries += 1;

        Ok(())
    }

    /// Entries written through this handle.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sync the file to disk and release it.
    pub fn close(self) -> Result<PathBuf> {
        self.file.sync_all()?;
        Ok(self.path)
    }
}

/// Read every entry of a posts log, in file order.
pub fn read_posts_log(path: &Path) -> Result<Vec<(u64, PostDetail)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let entry: BTreeMap<u64, Vec<PostDetail>> = serde_json::from_str(&line)?;
        for (position, details) in entry {
            entries.extend(details.into_iter().map(|detail| (position, detail)));
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::PostType;
    use tempfile::TempDir;

    fn make_detail(id: &str, post_type: Option<PostType>) -> PostDetail {
        PostDetail {
            post_id: id.to_string(),
            post_title: "title".to_string(),
            post_submitter: "someone".to_string(),
            post_type,
            post_url: "https://example.com/x".to_string(),
            post_subreddit: "pics".to_string(),
        }
    }

    #[test]
    fn test_record_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(POSTS_LOG_NAME);

        let mut log = PostsLog::open(&path).unwrap();
        log.record(1, &make_detail("a", Some(PostType::Direct))).unwrap();
        log.record(3, &make_detail("c", None)).unwrap();
        assert_eq!(log.entries(), 2);
        log.close().unwrap();

        let entries = read_posts_log(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, 1);
        assert_eq!(entries[0].1.post_type, Some(PostType::Direct));
        assert_eq!(entries[1].0, 3);
        assert_eq!(entries[1].1.post_type, None);
    }

    #[test]
    fn test_line_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(POSTS_LOG_NAME);

        let mut log = PostsLog::open(&path).unwrap();
        log.record(7, &make_detail("g", None)).unwrap();
        drop(log);

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(value["7"][0]["postId"], "g");
        assert!(value["7"][0]["postType"].is_null());
    }

    #[test]
    fn test_reopen_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(POSTS_LOG_NAME);

        let mut log = PostsLog::open(&path).unwrap();
        log.record(1, &make_detail("a", None)).unwrap();
        drop(log);

        let mut log = PostsLog::open(&path).unwrap();
        log.record(2, &make_detail("b", None)).unwrap();
        drop(log);

        assert_eq!(read_posts_log(&path).unwrap().len(), 2);
    }
}
