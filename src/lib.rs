//! Reddit Media Searcher - find Reddit posts that link to downloadable media.
//!
//! This library walks Reddit listings and classifies each post's link.
//!
//! # Features
//!
//! - Subreddit, front page and saved-item listings
//! - Text search scoped to a subreddit or the front page
//! - Sort modes with time windows where Reddit accepts them
//! - Gfycat, imgur and direct-file link detection
//! - Per-run JSON-lines log of every post checked
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use reddit_media_searcher::{Config, QuerySpec, SearchContext, Target};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let mut context = SearchContext::open(config).await?;
//!
//!     let result = context.run(&QuerySpec::new(Target::from_name("pics"))).await?;
//!     println!("{} media posts", result.posts.len());
//!
//!     context.close()?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod search;

// Re-exports for convenience
pub use api::{PostRecord, PostSource, RedditApi};
pub use config::{Config, Limit, SortMode, TimeFilter};
pub use error::{Error, Result};
pub use media::{classify, LinkCategory, PostDetail, PostType};
pub use search::{enumerate_posts, QuerySpec, RunSummary, SearchContext, SearchResult, Target};
